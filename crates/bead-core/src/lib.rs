#![allow(clippy::module_inception)]

//! bead-core: palette quantization and step planning for fuse-bead patterns
//!
//! This crate holds the algorithmic part of turning an image into a bead
//! pattern. It does no I/O: callers hand in an already resized
//! [`PixelGrid`] and a validated [`Palette`], and get back plain data.
//!
//! # Quick Start
//!
//! ```
//! use bead_core::{compute_counts, plan_steps, quantize, Palette, PaletteColor, PixelGrid, StepMode};
//!
//! let palette = Palette::new(
//!     "Basic",
//!     vec![
//!         PaletteColor::new("A", "Black", [0, 0, 0]),
//!         PaletteColor::new("B", "White", [255, 255, 255]),
//!     ],
//! )
//! .unwrap();
//!
//! let pixels = PixelGrid::from_rows(vec![
//!     vec![[0, 0, 0], [255, 255, 255]],
//!     vec![[20, 20, 20], [230, 230, 230]],
//! ])
//! .unwrap();
//!
//! let quantized = quantize(&pixels, &palette, None).unwrap();
//! let counts = compute_counts(quantized.indices(), quantized.palette()).unwrap();
//! assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 4);
//!
//! let plan = plan_steps(2, 2, StepMode::Row, 1).unwrap();
//! assert_eq!(plan.len(), 2);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelGrid ──quantize──> QuantizeResult { IndexGrid, rgb, Palette }
//!                              │
//!                              ├──compute_counts──> Vec<CountEntry>
//!                              │
//! (width, height, mode) ──plan_steps──> StepPlan
//! ```
//!
//! # Determinism
//!
//! Every tie is broken by palette position: the nearest-color search keeps
//! the first minimum, and palette reduction ranks equally used colors by
//! their original index. Identical inputs always produce identical output.

pub mod counts;
pub mod error;
pub mod grid;
pub mod palette;
pub mod quantize;
pub mod steps;
pub mod symbol;


pub use counts::{by_frequency, compute_counts, total_count, CountEntry};
pub use error::PatternError;
pub use grid::{Grid, IndexGrid, PixelGrid};
pub use palette::{Palette, PaletteColor, PaletteError, Rgb};
pub use quantize::{quantize, QuantizeResult};
pub use steps::{plan_steps, plan_steps_by_name, Step, StepMask, StepMode, StepPlan};
pub use symbol::symbol_for_index;
