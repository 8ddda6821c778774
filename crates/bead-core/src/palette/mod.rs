//! Palette types
//!
//! This module provides the ordered color list used for quantization,
//! together with its validation error type.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PaletteColor, Rgb};
