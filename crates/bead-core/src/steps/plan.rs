//! Step and StepPlan types.

use crate::grid::Grid;

/// Which cells belong to a step, as a `height x width` boolean grid.
pub type StepMask = Grid<bool>;

/// One assembly phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub mask: StepMask,
}

impl Step {
    /// Whether `(row, col)` is placed during this step.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).copied().unwrap_or(false)
    }

    /// Number of cells in this step.
    pub fn cell_count(&self) -> usize {
        self.mask.cells().iter().filter(|&&on| on).count()
    }
}

/// Ordered steps covering a grid exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) steps: Vec<Step>,
}

impl StepPlan {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Index of the step containing `(row, col)`.
    pub fn step_of(&self, row: usize, col: usize) -> Option<usize> {
        self.steps.iter().position(|s| s.contains(row, col))
    }

    /// Per-cell count of steps covering it. All ones for a valid plan.
    pub fn coverage(&self) -> Grid<usize> {
        let mut cover = Grid::filled(self.width, self.height, 0usize);
        for step in &self.steps {
            for row in 0..self.height {
                for col in 0..self.width {
                    if step.contains(row, col) {
                        let current = cover.get(row, col).copied().unwrap_or(0);
                        cover.set(row, col, current + 1);
                    }
                }
            }
        }
        cover
    }
}

impl<'a> IntoIterator for &'a StepPlan {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
