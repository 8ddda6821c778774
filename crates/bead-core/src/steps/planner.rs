//! Row and quadrant step planning.

use std::ops::Range;

use super::{Step, StepMask, StepMode, StepPlan};
use crate::error::PatternError;
use crate::grid::cell_count;

/// Split a `width x height` grid into assembly steps.
///
/// `rows_per_step` is only read in [`StepMode::Row`].
///
/// # Errors
///
/// [`PatternError::InvalidInput`] if a dimension is zero, the grid has more
/// cells than fit in `usize`, or `rows_per_step` is zero in row mode.
///
/// # Example
///
/// ```
/// use bead_core::{plan_steps, StepMode};
///
/// let plan = plan_steps(6, 5, StepMode::Row, 2).unwrap();
/// let names: Vec<&str> = plan.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["Rows 1-2", "Rows 3-4", "Rows 5-5"]);
/// ```
pub fn plan_steps(
    width: usize,
    height: usize,
    mode: StepMode,
    rows_per_step: usize,
) -> Result<StepPlan, PatternError> {
    cell_count(width, height)?;

    let steps = match mode {
        StepMode::Row => row_steps(width, height, rows_per_step)?,
        StepMode::Quadrant => quadrant_steps(width, height),
    };

    Ok(StepPlan {
        width,
        height,
        steps,
    })
}

/// [`plan_steps`] with the mode given as text (`"row"` / `"quadrant"`).
///
/// Dimensions are checked before the mode is parsed.
///
/// # Errors
///
/// As [`plan_steps`], plus [`PatternError::UnsupportedMode`] for an
/// unrecognized mode.
pub fn plan_steps_by_name(
    width: usize,
    height: usize,
    mode: &str,
    rows_per_step: usize,
) -> Result<StepPlan, PatternError> {
    cell_count(width, height)?;
    plan_steps(width, height, mode.parse()?, rows_per_step)
}

fn row_steps(width: usize, height: usize, rows_per_step: usize) -> Result<Vec<Step>, PatternError> {
    if rows_per_step == 0 {
        return Err(PatternError::invalid("rows_per_step must be positive"));
    }

    Ok((0..height)
        .step_by(rows_per_step)
        .map(|start| {
            let end = height.min(start + rows_per_step);
            Step {
                name: format!("Rows {}-{}", start + 1, end),
                mask: region_mask(width, height, start..end, 0..width),
            }
        })
        .collect())
}

fn quadrant_steps(width: usize, height: usize) -> Vec<Step> {
    let w_mid = width / 2;
    let h_mid = height / 2;
    let regions = [
        ("Quadrant 1 (Top-Left)", 0..h_mid, 0..w_mid),
        ("Quadrant 2 (Top-Right)", 0..h_mid, w_mid..width),
        ("Quadrant 3 (Bottom-Left)", h_mid..height, 0..w_mid),
        ("Quadrant 4 (Bottom-Right)", h_mid..height, w_mid..width),
    ];

    regions
        .into_iter()
        .filter(|(_, rows, cols)| !rows.is_empty() && !cols.is_empty())
        .map(|(name, rows, cols)| Step {
            name: name.to_string(),
            mask: region_mask(width, height, rows, cols),
        })
        .collect()
}

fn region_mask(width: usize, height: usize, rows: Range<usize>, cols: Range<usize>) -> StepMask {
    let mut mask = StepMask::filled(width, height, false);
    for row in rows {
        for col in cols.clone() {
            mask.set(row, col, true);
        }
    }
    mask
}
