//! maxnumber - Largest value of an optional integer sequence
//!
//! This crate re-exports the maxnumber layers for convenient access.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: maxnumber_math       — max_number, try_max_number, MaxConfig
//! Layer 0: maxnumber_foundation — Core types (Error, ErrorKind, Result)
//! ```

pub use maxnumber_foundation as foundation;
pub use maxnumber_math as math;

pub use maxnumber_math::{MaxConfig, max_number, try_max_number};
