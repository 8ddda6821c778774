//! QuantizeResult: the quantizer's output bundle.

use crate::grid::{IndexGrid, PixelGrid};
use crate::palette::Palette;

/// Output of [`quantize`](super::quantize).
///
/// `indices` always refers to `palette`, which is either the input palette
/// or its reduced derivative. `rgb` holds `palette.color(idx).rgb()` for
/// every cell, so it can be written out without another lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeResult {
    pub(crate) indices: IndexGrid,
    pub(crate) rgb: PixelGrid,
    pub(crate) palette: Palette,
}

impl QuantizeResult {
    /// Palette index per cell.
    #[inline]
    pub fn indices(&self) -> &IndexGrid {
        &self.indices
    }

    /// Palette color per cell.
    #[inline]
    pub fn rgb(&self) -> &PixelGrid {
        &self.rgb
    }

    /// The palette `indices` refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.indices.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.indices.height()
    }

    /// Consume the result, returning `(indices, rgb, palette)`.
    pub fn into_parts(self) -> (IndexGrid, PixelGrid, Palette) {
        (self.indices, self.rgb, self.palette)
    }
}
