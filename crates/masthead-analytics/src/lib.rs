#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for event assembly operations.
pub const TRACING_TARGET: &str = "masthead_analytics";

mod client;
mod enrich;

pub mod event;

// Re-export key types for convenience
pub use client::{AgentInfo, ClientInfo, DeviceClass, referrer_domain};
pub use enrich::Enricher;
pub use event::PageView;
