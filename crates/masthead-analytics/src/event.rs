//! Analytics event envelopes.
//!
//! Events carry only privacy-scrubbed values. The anonymized IP is an
//! opaque grouping key whose last two octets are hash-derived; downstream
//! consumers must not treat it as a routable address.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::DeviceClass;

/// A single page view on the content site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    /// Unique event id.
    pub id: Uuid,
    /// When the view was recorded.
    pub occurred_at: Timestamp,
    /// Path of the viewed page.
    pub path: String,
    /// Registrable host of the referring URL, when present and parseable.
    pub referrer_domain: Option<String>,
    /// Daily-rotating, geo-preserving grouping key derived from the client
    /// address; `None` when no address was available.
    pub anonymized_ip: Option<String>,
    /// Browser family name, when the user agent could be classified.
    pub browser: Option<String>,
    /// Browser version, when known.
    pub browser_version: Option<String>,
    /// Operating system family, when known.
    pub os: Option<String>,
    /// Coarse device class, when the user agent could be classified.
    pub device_class: Option<DeviceClass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_view_serializes_scrubbed_fields_only() {
        let event = PageView {
            id: Uuid::new_v4(),
            occurred_at: Timestamp::UNIX_EPOCH,
            path: "/articles/launch-day".to_string(),
            referrer_domain: Some("news.ycombinator.com".to_string()),
            anonymized_ip: Some("203.0.17.88".to_string()),
            browser: Some("Chrome".to_string()),
            browser_version: Some("120.0.0.0".to_string()),
            os: Some("Windows 10".to_string()),
            device_class: Some(DeviceClass::Desktop),
        };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["path"], "/articles/launch-day");
        assert_eq!(json["anonymized_ip"], "203.0.17.88");
        assert_eq!(json["device_class"], "desktop");
        // The envelope has no field that could carry a raw address.
        assert!(json.get("remote_addr").is_none());
        assert!(json.get("user_agent").is_none());
    }

    #[test]
    fn page_view_round_trips_through_json() {
        let event = PageView {
            id: Uuid::new_v4(),
            occurred_at: Timestamp::UNIX_EPOCH,
            path: "/".to_string(),
            referrer_domain: None,
            anonymized_ip: None,
            browser: None,
            browser_version: None,
            os: None,
            device_class: None,
        };

        let json = serde_json::to_string(&event).unwrap();
        let decoded: PageView = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.id, event.id);
        assert_eq!(decoded.path, event.path);
        assert_eq!(decoded.anonymized_ip, None);
    }
}
