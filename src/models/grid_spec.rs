use crate::error::PipelineError;

/// Size of the bead grid, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    /// Largest supported side (a few standard pegboards laid side by side)
    pub const MAX_SIDE: u32 = 256;

    /// Default grid: 48x48
    pub const DEFAULT: Self = Self {
        width: 48,
        height: 48,
    };

    /// Validate and build a grid size
    pub fn new(width: u32, height: u32) -> Result<Self, PipelineError> {
        let valid = 1..=Self::MAX_SIDE;
        if valid.contains(&width) && valid.contains(&height) {
            Ok(Self { width, height })
        } else {
            Err(PipelineError::InvalidGrid {
                width,
                height,
                max: Self::MAX_SIDE,
            })
        }
    }

    /// Number of beads in the grid
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
