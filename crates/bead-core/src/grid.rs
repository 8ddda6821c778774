//! Row-major 2D grid used for pixels, palette indices and step masks.

use crate::error::PatternError;
use crate::palette::Rgb;

/// A `height x width` grid stored in row-major order.
///
/// Both dimensions are at least 1 and `cells.len() == width * height`;
/// every public constructor checks this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// RGB pixels, as produced by image decode and resample.
pub type PixelGrid = Grid<Rgb>;

/// Palette indices, one per cell.
pub type IndexGrid = Grid<usize>;

impl<T> Grid<T> {
    /// Wrap row-major `cells` as a `width x height` grid.
    ///
    /// # Errors
    ///
    /// [`PatternError::InvalidInput`] if either dimension is zero, the cell
    /// count overflows `usize`, or the number of cells does not match.
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, PatternError> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(PatternError::invalid(format!(
                "grid of {width}x{height} needs {expected} cells, got {}",
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// [`PatternError::InvalidInput`] if there are no rows, a row is empty,
    /// or the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, PatternError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(r) = rows.iter().position(|row| row.len() != width) {
            return Err(PatternError::invalid(format!(
                "row {r} has {} cells, expected {width}",
                rows[r].len()
            )));
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: grids have at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.width)
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

/// Number of cells in a `width x height` grid.
///
/// Rejects zero dimensions and sizes whose cell count overflows `usize`.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, PatternError> {
    if width == 0 || height == 0 {
        return Err(PatternError::invalid(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        PatternError::invalid(format!("grid of {width}x{height} has too many cells"))
    })
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`. Callers validate dimensions.
    pub(crate) fn filled(width: usize, height: usize, value: T) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.width + col] = value;
    }
}
