//! Event enrichment.

use jiff::Timestamp;
use masthead_privacy::{AnonymizerConfig, ConfigError, DayClock, IpAnonymizer, SystemDayClock};
use uuid::Uuid;

use crate::TRACING_TARGET;
use crate::client::{AgentInfo, ClientInfo, referrer_domain};
use crate::event::PageView;

/// Turns raw request metadata into privacy-scrubbed analytics events.
///
/// The enricher owns the anonymizer; callers hand over a [`ClientInfo`] and
/// get back an event that never contains the raw address or user-agent
/// string. The clock behind the anonymizer is injectable so tests can pin
/// the day.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Enricher<C: DayClock = SystemDayClock> {
    anonymizer: IpAnonymizer<C>,
}

impl Enricher {
    /// Creates an enricher with the default UTC day boundary.
    pub fn new() -> Self {
        Self::with_anonymizer(IpAnonymizer::new())
    }

    /// Creates an enricher from an anonymizer configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration does not validate.
    pub fn from_config(config: &AnonymizerConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_anonymizer(config.build()?))
    }
}

impl<C: DayClock> Enricher<C> {
    /// Creates an enricher around an existing anonymizer.
    pub fn with_anonymizer(anonymizer: IpAnonymizer<C>) -> Self {
        Self { anonymizer }
    }

    /// Assembles a page-view event for `path` from the client metadata.
    ///
    /// The raw address is anonymized (or propagated as `None` when absent),
    /// the referrer is reduced to its host, and the user agent is collapsed
    /// into a coarse classification. None of the raw inputs are stored in
    /// the event.
    pub fn page_view(&self, path: impl Into<String>, client: &ClientInfo) -> PageView {
        let path = path.into();

        let anonymized_ip = self.anonymizer.anonymize(client.remote_addr.as_deref());
        let agent = client.user_agent.as_deref().and_then(AgentInfo::parse);
        let referrer_domain = client.referrer.as_deref().and_then(referrer_domain);

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            has_client_ip = anonymized_ip.is_some(),
            has_agent = agent.is_some(),
            referrer_domain = ?referrer_domain,
            "assembled page view"
        );

        let (browser, browser_version, os, device_class) = match agent {
            Some(agent) => (
                Some(agent.browser),
                agent.browser_version,
                agent.os,
                Some(agent.device_class),
            ),
            None => (None, None, None, None),
        };

        PageView {
            id: Uuid::new_v4(),
            occurred_at: Timestamp::now(),
            path,
            referrer_domain,
            anonymized_ip,
            browser,
            browser_version,
            os,
            device_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use masthead_privacy::FixedDayClock;

    use super::*;
    use crate::client::DeviceClass;

    const CHROME_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    fn pinned_enricher() -> Enricher<FixedDayClock> {
        let clock = FixedDayClock::new(date(2024, 1, 15));
        Enricher::with_anonymizer(IpAnonymizer::with_clock(clock))
    }

    #[test]
    fn page_view_scrubs_the_client_address() {
        let enricher = pinned_enricher();
        let client = ClientInfo {
            remote_addr: Some("203.0.113.42".to_string()),
            user_agent: Some(CHROME_DESKTOP.to_string()),
            referrer: Some("https://news.ycombinator.com/item?id=1".to_string()),
        };

        let event = enricher.page_view("/articles/launch-day", &client);

        let anonymized = event.anonymized_ip.unwrap();
        assert!(anonymized.starts_with("203.0."));
        assert_ne!(anonymized, "203.0.113.42");

        assert_eq!(event.path, "/articles/launch-day");
        assert_eq!(event.referrer_domain.as_deref(), Some("news.ycombinator.com"));
        assert_eq!(event.browser.as_deref(), Some("Chrome"));
        assert_eq!(event.device_class, Some(DeviceClass::Desktop));
    }

    #[test]
    fn page_view_without_client_metadata() {
        let enricher = pinned_enricher();

        let event = enricher.page_view("/", &ClientInfo::default());

        assert_eq!(event.anonymized_ip, None);
        assert_eq!(event.referrer_domain, None);
        assert_eq!(event.browser, None);
        assert_eq!(event.device_class, None);
    }

    #[test]
    fn page_view_is_stable_within_a_day_for_one_client() {
        let enricher = pinned_enricher();
        let client = ClientInfo {
            remote_addr: Some("203.0.113.42".to_string()),
            ..ClientInfo::default()
        };

        let first = enricher.page_view("/a", &client);
        let second = enricher.page_view("/b", &client);

        // Same client, same pinned day: identical grouping key, distinct events.
        assert_eq!(first.anonymized_ip, second.anonymized_ip);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn enricher_builds_from_config() {
        let config = AnonymizerConfig::default();
        assert!(Enricher::from_config(&config).is_ok());

        let config = AnonymizerConfig {
            time_zone: Some("Not/AZone".to_string()),
        };
        assert!(Enricher::from_config(&config).is_err());
    }
}
