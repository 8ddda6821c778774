//! Nearest-color quantization against a fixed palette.
//!
//! [`quantize`] maps every pixel to its closest palette color and can
//! shrink the palette to the most used colors first. The output,
//! [`QuantizeResult`], carries the index grid, the materialized RGB grid
//! and the palette the indices refer to.
//!
//! # Palette reduction
//!
//! Reduction is two-pass: the image is quantized against the full palette
//! to rank colors by usage, then quantized again against the survivors.
//! Remapping old indices instead would be wrong, since a cell whose nearest
//! full-palette color was dropped may have any survivor as its new nearest
//! color.

mod quantizer;
mod reduce;
mod result;

pub use quantizer::quantize;
pub use result::QuantizeResult;
