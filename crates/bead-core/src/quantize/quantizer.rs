//! The quantize operation.

use super::reduce;
use super::QuantizeResult;
use crate::counts::usage_counts;
use crate::error::PatternError;
use crate::grid::{IndexGrid, PixelGrid};
use crate::palette::Palette;

/// Quantize `pixels` to `palette`, optionally keeping only the `max_colors`
/// most used colors.
///
/// Each cell gets the palette index with the smallest squared RGB distance;
/// ties go to the lower index. When `max_colors` is smaller than the
/// palette, the colors are ranked by how many cells chose them, the top
/// `max_colors` used colors form a new palette named `"{name} Top {n}"`,
/// and every cell is matched again against that palette.
///
/// # Errors
///
/// [`PatternError::InvalidInput`] if the palette is empty or
/// `max_colors` is `Some(0)`.
///
/// # Example
///
/// ```
/// use bead_core::{quantize, Palette, PaletteColor, PixelGrid};
///
/// let palette = Palette::new(
///     "Basic",
///     vec![
///         PaletteColor::new("A", "Black", [0, 0, 0]),
///         PaletteColor::new("B", "White", [255, 255, 255]),
///         PaletteColor::new("C", "Red", [255, 0, 0]),
///     ],
/// )
/// .unwrap();
/// let pixels = PixelGrid::new(2, 1, vec![[10, 10, 10], [250, 250, 250]]).unwrap();
///
/// let result = quantize(&pixels, &palette, Some(2)).unwrap();
/// assert_eq!(result.palette().name(), "Basic Top 2");
/// assert_eq!(result.indices().cells(), &[0, 1]);
/// ```
pub fn quantize(
    pixels: &PixelGrid,
    palette: &Palette,
    max_colors: Option<usize>,
) -> Result<QuantizeResult, PatternError> {
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(PatternError::invalid("pixel grid has no cells"));
    }
    if palette.is_empty() {
        return Err(PatternError::invalid("palette has no colors"));
    }
    if max_colors == Some(0) {
        return Err(PatternError::invalid("max_colors must be positive"));
    }

    let full = map_to_palette(pixels, palette);

    match max_colors {
        Some(k) if k < palette.len() => {
            let counts = usage_counts(full.cells(), palette.len());
            let reduced = reduce::reduced_palette(palette, &counts, k);
            let indices = map_to_palette(pixels, &reduced);
            Ok(materialize(indices, reduced))
        }
        _ => Ok(materialize(full, palette.clone())),
    }
}

fn map_to_palette(pixels: &PixelGrid, palette: &Palette) -> IndexGrid {
    pixels.map(|&rgb| palette.find_nearest(rgb).0)
}

fn materialize(indices: IndexGrid, palette: Palette) -> QuantizeResult {
    let rgb = indices.map(|&idx| palette.color(idx).rgb());
    QuantizeResult {
        indices,
        rgb,
        palette,
    }
}
