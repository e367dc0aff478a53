//! Fallback configuration for maximum queries.

use crate::max::{DEFAULT_FALLBACK, max_or};

/// Configuration for maximum queries over possibly-absent sequences.
///
/// The default configuration behaves exactly like [`crate::max_number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxConfig {
    /// Value returned when the sequence is absent or empty.
    pub fallback: i32,
}

impl Default for MaxConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK,
        }
    }
}

impl MaxConfig {
    /// Creates a configuration with the default fallback of `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration whose fallback sorts below every real value.
    #[must_use]
    pub fn floor() -> Self {
        Self { fallback: i32::MIN }
    }

    /// Builder method to set the fallback value.
    #[must_use]
    pub fn with_fallback(mut self, fallback: i32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the largest value in `sequence`, or the configured fallback.
    #[must_use]
    pub fn max_number(&self, sequence: Option<&[i32]>) -> i32 {
        max_or(sequence, self.fallback)
    }
}
