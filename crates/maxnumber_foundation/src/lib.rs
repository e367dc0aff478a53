//! Core types shared across the maxnumber crates.
//!
//! This crate provides:
//! - [`Error`] - The error type for strict operations
//! - [`ErrorKind`] - Categorized error kinds for pattern matching
//! - [`Result`] - Convenience alias over [`Error`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorKind, Result};
