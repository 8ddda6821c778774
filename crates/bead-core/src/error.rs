//! Error type shared by the quantizer, counter and step planner.

use thiserror::Error;

/// Errors raised by the pattern operations.
///
/// Every operation validates its input before producing any output, so an
/// `Err` never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Malformed dimensions, empty palette, out-of-range index or a
    /// non-positive size parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Step-planning mode token other than `row` or `quadrant`.
    #[error("unknown step mode '{0}': expected 'row' or 'quadrant'")]
    UnsupportedMode(String),
}

impl PatternError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PatternError::InvalidInput(msg.into())
    }
}
