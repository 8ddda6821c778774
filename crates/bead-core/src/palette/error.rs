//! Error types for palette construction

use thiserror::Error;

/// Error type for palette validation.
///
/// Returned when a palette or one of its colors violates the palette
/// invariants: at least one color, non-empty code and name, unique codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// Color at the given position has an empty code
    #[error("color at index {index} has an empty code")]
    EmptyCode {
        /// Position of the offending color
        index: usize,
    },

    /// Color with the given code has an empty name
    #[error("color {code} has an empty name")]
    EmptyName {
        /// Code of the offending color
        code: String,
    },

    /// The same code appears more than once
    #[error("duplicate color code {code}")]
    DuplicateCode {
        /// The repeated code
        code: String,
    },
}
