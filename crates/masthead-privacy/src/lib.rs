#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for anonymization operations.
pub const TRACING_TARGET: &str = "masthead_privacy";

mod clock;
mod day_key;
mod digest;
mod error;

pub mod anonymizer;
pub mod config;

// Re-export key types for convenience
pub use anonymizer::{IpAnonymizer, anonymize};
pub use clock::{DayClock, FixedDayClock, SystemDayClock};
pub use config::AnonymizerConfig;
pub use day_key::DayKey;
pub use digest::{DIGEST_HEX_LEN, keyed_digest};
pub use error::{ConfigError, ParseDayKeyError};
