//! Anonymizer configuration.

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::anonymizer::IpAnonymizer;
use crate::error::ConfigError;

/// Configuration for the IP anonymizer.
///
/// The only tunable is the day boundary. With no configured zone, requests
/// are bucketed into UTC calendar days, so a fleet spanning multiple time
/// zones derives identical salts and daylight-saving transitions cannot
/// split a day unevenly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnonymizerConfig {
    /// IANA time zone that defines the day boundary for salt rotation.
    ///
    /// Deployments that want a local editorial day (e.g. a newsroom's
    /// midnight rather than UTC midnight) set a zone name such as
    /// `"America/New_York"`. Unset means UTC.
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl AnonymizerConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTimeZone`] when `time_zone` is set to a
    /// name the time zone database cannot resolve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve_time_zone().map(|_| ())
    }

    /// Builds an anonymizer from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTimeZone`] when the configured zone
    /// cannot be resolved.
    pub fn build(&self) -> Result<IpAnonymizer, ConfigError> {
        Ok(IpAnonymizer::in_time_zone(self.resolve_time_zone()?))
    }

    fn resolve_time_zone(&self) -> Result<TimeZone, ConfigError> {
        match self.time_zone.as_deref() {
            None => Ok(TimeZone::UTC),
            // The default spelling must not depend on a zone database being
            // installed on the host.
            Some(name) if name.eq_ignore_ascii_case("utc") => Ok(TimeZone::UTC),
            Some(name) => TimeZone::get(name).map_err(|source| ConfigError::UnknownTimeZone {
                name: name.to_owned(),
                source,
            }),
        }
    }
}
