//! Maximum-of-sequence functions for maxnumber.
//!
//! This crate provides:
//! - [`max_number`] - Largest value of an optional integer sequence, `0` when absent or empty
//! - [`try_max_number`] - Strict form that reports absent/empty input as an [`Error`]
//! - [`max_or`] - Generic scan with a caller-chosen fallback
//! - [`MaxConfig`] - Reusable fallback configuration
//!
//! [`Error`]: maxnumber_foundation::Error

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod max;

pub use config::MaxConfig;
pub use max::{DEFAULT_FALLBACK, max_number, max_or, try_max_number};
