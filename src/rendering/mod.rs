pub mod bead_list;
pub mod pdf;
pub mod preview_png;
pub mod svg;

pub use bead_list::{format_bead_list, write_bead_list_csv};
pub use pdf::{render_pattern_pdf, write_pattern_pdf};
pub use preview_png::{encode_preview_png, preview_dimensions, write_preview_png, MAX_PREVIEW_SIDE};
pub use svg::{render_svg, write_svg};
