use std::path::PathBuf;

use bead_core::{PaletteError, PatternError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid preview scale: {0} (must be at least 1)")]
    InvalidScale(u32),

    #[error("Preview scale {scale} is too large for a {width}x{height} grid (at most {max} pixels per side)")]
    PreviewTooLarge {
        scale: u32,
        width: usize,
        height: usize,
        max: u32,
    },

    #[error("Grid mismatch: pattern is {pattern_w}x{pattern_h}, steps are {steps_w}x{steps_h}")]
    GridMismatch {
        pattern_w: usize,
        pattern_h: usize,
        steps_w: usize,
        steps_h: usize,
    },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {} has no pixels", .0.display())]
    Empty(PathBuf),

    #[error("Resample failed: {0}")]
    Resample(String),
}

#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("Palette not found: {0}")]
    NotFound(String),

    #[error("Failed to read palette {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid palette JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Palette has no colors")]
    NoColors,

    #[error("Color #{index} is missing '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Color {code}: invalid rgb ({reason})")]
    InvalidRgb { code: String, reason: String },

    #[error("Color {code}: invalid hex color '{value}'")]
    InvalidHex { code: String, value: String },

    #[error(transparent)]
    Invalid(#[from] PaletteError),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid grid {width}x{height}: each side must be between 1 and {max}")]
    InvalidGrid { width: u32, height: u32, max: u32 },

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteLoadError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
