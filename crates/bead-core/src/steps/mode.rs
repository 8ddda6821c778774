//! Step mode parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// Step-planning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepMode {
    /// Bands of consecutive rows.
    #[default]
    Row,
    /// Four regions split at `width / 2` and `height / 2`.
    Quadrant,
}

impl StepMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StepMode::Row => "row",
            StepMode::Quadrant => "quadrant",
        }
    }
}

impl fmt::Display for StepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepMode {
    type Err = PatternError;

    /// Parse `row` or `quadrant`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("row") {
            Ok(StepMode::Row)
        } else if token.eq_ignore_ascii_case("quadrant") {
            Ok(StepMode::Quadrant)
        } else {
            Err(PatternError::UnsupportedMode(s.to_string()))
        }
    }
}
