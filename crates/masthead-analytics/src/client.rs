//! Client request metadata and its privacy-safe derivations.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, IntoStaticStr};
use url::Url;

/// Raw per-request metadata captured by the web layer.
///
/// Extraction is the web application's responsibility (forwarded-for
/// headers, socket addresses and so on); this crate only consumes whatever
/// was handed over. Every field is optional since any of them can be absent
/// on a real request.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    /// The client address as reported by the transport layer.
    pub remote_addr: Option<String>,
    /// The `User-Agent` header value.
    pub user_agent: Option<String>,
    /// The `Referer` header value, as a full URL.
    pub referrer: Option<String>,
}

/// Coarse device classification derived from the user agent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Desktop and laptop browsers.
    Desktop,
    /// Phones.
    Mobile,
    /// Tablets.
    Tablet,
}

/// Browser, OS and device classification parsed from a `User-Agent` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    /// Browser family name.
    pub browser: String,
    /// Browser version, when the parser could extract one.
    pub browser_version: Option<String>,
    /// Operating system family, when known.
    pub os: Option<String>,
    /// Coarse device class.
    pub device_class: DeviceClass,
}

impl AgentInfo {
    /// Parses a `User-Agent` value.
    ///
    /// Returns `None` when the value is empty or the parser cannot classify
    /// it at all.
    pub fn parse(user_agent: &str) -> Option<Self> {
        if user_agent.is_empty() {
            return None;
        }

        let parsed = woothee::parser::Parser::new().parse(user_agent)?;

        // woothee device categories map onto our coarser classes:
        //   "smartphone" / "mobilephone" → mobile
        //   "tablet"                     → tablet
        //   everything else              → desktop
        let device_class = match parsed.category {
            "smartphone" | "mobilephone" => DeviceClass::Mobile,
            "tablet" => DeviceClass::Tablet,
            _ => DeviceClass::Desktop,
        };

        Some(Self {
            browser: parsed.name.to_string(),
            browser_version: known_value(&parsed.version),
            os: known_value(&parsed.os),
            device_class,
        })
    }
}

/// Normalizes woothee's empty / `"UNKNOWN"` placeholders to `None`.
fn known_value(value: &str) -> Option<String> {
    if value.is_empty() || value == "UNKNOWN" {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extracts the host of a referrer URL, lowercased.
///
/// Returns `None` when the referrer is empty, is not a parseable URL, or
/// has no host component.
pub fn referrer_domain(referrer: &str) -> Option<String> {
    if referrer.is_empty() {
        return None;
    }

    let url = Url::parse(referrer).ok()?;
    let host = url.host_str()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}
