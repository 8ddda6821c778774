pub mod image_source;
pub mod palette_loader;
pub mod pattern_pipeline;

pub use image_source::{load_image, resample_to_grid};
pub use palette_loader::{load_palette, parse_hex_color, parse_palette};
pub use pattern_pipeline::PatternPipeline;
