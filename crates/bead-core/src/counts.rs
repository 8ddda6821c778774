//! Per-color bead counts.

use crate::error::PatternError;
use crate::grid::IndexGrid;
use crate::palette::{Palette, Rgb};

/// Usage of one palette color in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    pub code: String,
    pub name: String,
    pub rgb: Rgb,
    pub count: usize,
}

/// Count how many cells use each palette color.
///
/// Returns one entry per color with a non-zero count, in palette order.
/// Ordering by frequency is left to the caller (see [`by_frequency`]).
///
/// # Errors
///
/// [`PatternError::InvalidInput`] if any index is outside
/// `0..palette.len()`.
pub fn compute_counts(
    indices: &IndexGrid,
    palette: &Palette,
) -> Result<Vec<CountEntry>, PatternError> {
    if indices.width() == 0 || indices.height() == 0 {
        return Err(PatternError::invalid("index grid has no cells"));
    }
    if let Some(pos) = indices.cells().iter().position(|&i| i >= palette.len()) {
        return Err(PatternError::invalid(format!(
            "index {} at row {}, column {} is outside palette of {} colors",
            indices.cells()[pos],
            pos / indices.width(),
            pos % indices.width(),
            palette.len()
        )));
    }

    let counts = usage_counts(indices.cells(), palette.len());
    Ok(counts
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .map(|(idx, count)| {
            let color = palette.color(idx);
            CountEntry {
                code: color.code().to_string(),
                name: color.name().to_string(),
                rgb: color.rgb(),
                count,
            }
        })
        .collect())
}

/// Sum of all counts, i.e. the number of beads in the pattern.
pub fn total_count(entries: &[CountEntry]) -> usize {
    entries.iter().map(|e| e.count).sum()
}

/// Entries ordered by count descending; equal counts keep palette order.
pub fn by_frequency(entries: &[CountEntry]) -> Vec<&CountEntry> {
    let mut sorted: Vec<&CountEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
}

/// Histogram of `indices` over `0..len`. Indices must already be in range.
pub(crate) fn usage_counts(indices: &[usize], len: usize) -> Vec<usize> {
    let mut counts = vec![0usize; len];
    for &idx in indices {
        counts[idx] += 1;
    }
    counts
}
