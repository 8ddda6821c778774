//! Perler Pattern Generator
//!
//! Turns an image into a fuse-bead pattern: a preview PNG, a bead shopping
//! list, and a printable step-by-step PDF. The palette matching, counting and
//! step planning live in `bead-core`; this crate adds file I/O, config and
//! the exporters, and is exposed as a library for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
