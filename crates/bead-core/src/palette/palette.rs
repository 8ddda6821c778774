//! Palette struct with ordered colors and nearest-color matching.
//!
//! The position of a color inside a [`Palette`] is its index everywhere
//! else in the crate: index grids, counts and pattern symbols all refer to
//! colors by position.

use std::collections::HashSet;

use super::error::PaletteError;

/// An 8-bit sRGB triple `[R, G, B]`.
pub type Rgb = [u8; 3];

/// A single named bead color.
///
/// Immutable once constructed. `code` is the manufacturer's product code
/// (e.g. `"P01"`), `name` the human readable color name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteColor {
    code: String,
    name: String,
    rgb: Rgb,
}

impl PaletteColor {
    /// Create a color entry. Validation happens in [`Palette::new`].
    pub fn new(code: impl Into<String>, name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            rgb,
        }
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

/// An ordered, validated list of bead colors.
///
/// # Example
///
/// ```
/// use bead_core::{Palette, PaletteColor};
///
/// let palette = Palette::new(
///     "Basic",
///     vec![
///         PaletteColor::new("A", "Black", [0, 0, 0]),
///         PaletteColor::new("B", "White", [255, 255, 255]),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest([40, 40, 40]).0, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<PaletteColor>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::EmptyCode`] / [`PaletteError::EmptyName`] for blank fields
    /// - [`PaletteError::DuplicateCode`] if two colors share a code
    pub fn new(name: impl Into<String>, colors: Vec<PaletteColor>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            if color.code.is_empty() {
                return Err(PaletteError::EmptyCode { index });
            }
            if color.name.is_empty() {
                return Err(PaletteError::EmptyName {
                    code: color.code.clone(),
                });
            }
            if !seen.insert(color.code.as_str()) {
                return Err(PaletteError::DuplicateCode {
                    code: color.code.clone(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// Build a palette holding `indices` of `self`, in the given order.
    ///
    /// Indices must be valid and distinct, which keeps the result valid
    /// without re-running the checks in [`Palette::new`].
    pub(crate) fn subset(&self, name: String, indices: &[usize]) -> Self {
        debug_assert!(!indices.is_empty());
        Self {
            name,
            colors: indices.iter().map(|&i| self.colors[i].clone()).collect(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false` for palettes built through [`Palette::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> &PaletteColor {
        &self.colors[idx]
    }

    /// Find the palette color closest to `rgb`.
    ///
    /// Distance is squared Euclidean distance in RGB. On a tie the lowest
    /// index wins, since only a strictly smaller distance replaces the
    /// current best.
    ///
    /// Returns `(index, squared_distance)`.
    #[inline]
    pub fn find_nearest(&self, rgb: Rgb) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, color) in self.colors.iter().enumerate() {
            let dist = distance_squared(rgb, color.rgb);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_idx, best_dist)
    }
}

#[inline]
fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bw() -> Palette {
        Palette::new(
            "Test",
            vec![
                PaletteColor::new("A", "Black", [0, 0, 0]),
                PaletteColor::new("B", "White", [255, 255, 255]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = bw();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.name(), "Test");
        assert_eq!(palette.color(1).code(), "B");
        assert_eq!(palette.color(1).rgb(), [255, 255, 255]);
    }

    #[test]
    fn test_palette_empty_error() {
        let result = Palette::new("Empty", Vec::new());
        assert_eq!(result, Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_palette_empty_code() {
        let result = Palette::new(
            "Bad",
            vec![
                PaletteColor::new("A", "Black", [0, 0, 0]),
                PaletteColor::new("", "White", [255, 255, 255]),
            ],
        );
        assert_eq!(result, Err(PaletteError::EmptyCode { index: 1 }));
    }

    #[test]
    fn test_palette_empty_name() {
        let result = Palette::new("Bad", vec![PaletteColor::new("A", "", [0, 0, 0])]);
        assert_eq!(
            result,
            Err(PaletteError::EmptyName {
                code: "A".to_string()
            })
        );
    }

    #[test]
    fn test_palette_duplicate_code() {
        let result = Palette::new(
            "Bad",
            vec![
                PaletteColor::new("A", "Black", [0, 0, 0]),
                PaletteColor::new("A", "White", [255, 255, 255]),
            ],
        );
        assert!(matches!(result, Err(PaletteError::DuplicateCode { .. })));
    }

    #[test]
    fn test_duplicate_rgb_is_allowed() {
        // Two products can share a nominal color; only codes must be unique.
        let palette = Palette::new(
            "Twins",
            vec![
                PaletteColor::new("A", "Black", [0, 0, 0]),
                PaletteColor::new("B", "Jet", [0, 0, 0]),
            ],
        )
        .unwrap();
        assert_eq!(palette.find_nearest([0, 0, 0]), (0, 0));
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = bw();
        assert_eq!(palette.find_nearest([255, 255, 255]), (1, 0));
    }

    #[test]
    fn test_find_nearest_distance() {
        let palette = bw();
        let (idx, dist) = palette.find_nearest([10, 20, 30]);
        assert_eq!(idx, 0);
        assert_eq!(dist, 100 + 400 + 900);
    }

    #[test]
    fn test_find_nearest_tie_prefers_lowest_index() {
        let palette = Palette::new(
            "Greys",
            vec![
                PaletteColor::new("L", "Low", [100, 100, 100]),
                PaletteColor::new("H", "High", [110, 110, 110]),
            ],
        )
        .unwrap();
        // 105 is equidistant from both entries.
        assert_eq!(palette.find_nearest([105, 105, 105]).0, 0);

        let reversed = Palette::new(
            "Greys",
            vec![
                PaletteColor::new("H", "High", [110, 110, 110]),
                PaletteColor::new("L", "Low", [100, 100, 100]),
            ],
        )
        .unwrap();
        assert_eq!(reversed.find_nearest([105, 105, 105]).0, 0);
    }

    #[test]
    fn test_subset_preserves_order_given() {
        let palette = bw();
        let sub = palette.subset("Test Top 2".to_string(), &[1, 0]);
        assert_eq!(sub.name(), "Test Top 2");
        assert_eq!(sub.color(0).name(), "White");
        assert_eq!(sub.color(1).name(), "Black");
    }
}
