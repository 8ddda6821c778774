pub mod config;
pub mod grid_spec;
pub mod pattern;

pub use config::{AppConfig, GridConfig};
pub use grid_spec::GridSpec;
pub use pattern::{PatternMeta, PatternReport, PatternRequest};
