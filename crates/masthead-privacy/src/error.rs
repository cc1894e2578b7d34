//! Error types for configuration and day-key parsing.
//!
//! The anonymization hot path itself is infallible: absent and malformed
//! inputs degrade to passthrough rather than errors. Structured errors only
//! arise at the edges, when resolving configuration or parsing day keys.

use thiserror::Error;

/// Errors produced while resolving an anonymizer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured day-boundary time zone is not a known IANA zone.
    #[error("unknown time zone {name:?}")]
    UnknownTimeZone {
        /// The zone name that failed to resolve.
        name: String,
        /// The underlying resolution error.
        #[source]
        source: jiff::Error,
    },
}

/// Error returned when parsing a day key from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid day key {input:?}: expected zero-padded YYYY-MM-DD")]
pub struct ParseDayKeyError {
    input: String,
}

impl ParseDayKeyError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
