//! Geo-preserving, daily-rotating IP anonymization.
//!
//! The anonymizer keeps the first two octets of a dotted-quad IPv4 address
//! verbatim (coarse network/geography) and replaces the last two with values
//! derived from a keyed hash of the full address and the current day key.
//! For a fixed address and day the output is deterministic, which lets
//! downstream analytics group requests without any stored mapping; when the
//! day rolls over, the salt changes and the grouping key changes with it.
//!
//! The pipeline is pure and reentrant. It reads only its arguments and the
//! injected clock, holds no mutable state, and can be called from any number
//! of concurrent request handlers without locking.

use std::net::IpAddr;

use crate::TRACING_TARGET;
use crate::clock::{DayClock, SystemDayClock};
use crate::day_key::DayKey;
use crate::digest::keyed_digest;

/// Number of hex characters of the digest consumed per derived octet.
const HEX_CHARS_PER_OCTET: usize = 4;

/// Anonymizes client IP addresses with a daily-rotating salt.
///
/// The clock is injectable so tests can pin the day; production code uses
/// the default UTC system clock.
///
/// # Example
///
/// ```rust,ignore
/// use masthead_privacy::IpAnonymizer;
///
/// let anonymizer = IpAnonymizer::new();
/// let masked = anonymizer.anonymize(Some("203.0.113.42"));
/// assert!(masked.unwrap().starts_with("203.0."));
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct IpAnonymizer<C: DayClock = SystemDayClock> {
    clock: C,
}

impl IpAnonymizer {
    /// Creates an anonymizer whose day boundary is the UTC calendar day.
    pub fn new() -> Self {
        Self {
            clock: SystemDayClock::utc(),
        }
    }

    /// Creates an anonymizer whose day boundary follows the given time zone.
    pub fn in_time_zone(time_zone: jiff::tz::TimeZone) -> Self {
        Self {
            clock: SystemDayClock::new(time_zone),
        }
    }
}

impl<C: DayClock> IpAnonymizer<C> {
    /// Creates an anonymizer that reads the day from the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Anonymizes an optional raw address.
    ///
    /// Absent input propagates as `None`: analytics with no originating IP
    /// get no anonymized IP. Present input follows [`anonymize_str`].
    ///
    /// [`anonymize_str`]: Self::anonymize_str
    pub fn anonymize(&self, raw: Option<&str>) -> Option<String> {
        raw.map(|address| self.anonymize_str(address))
    }

    /// Anonymizes a raw address string.
    ///
    /// Input that does not split into exactly four dot-separated segments
    /// (IPv6, hostnames, malformed values) is returned unchanged: the caller
    /// keeps the ability to log something rather than nothing. Four-segment
    /// input is anonymized regardless of whether the segments are numeric;
    /// segment count is the only gate.
    ///
    /// Every branch returns a value. There is no error or panic surface.
    pub fn anonymize_str(&self, raw: &str) -> String {
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() != 4 {
            // The value itself is never logged: an unrecognized address
            // string is still potentially identifying.
            tracing::trace!(
                target: TRACING_TARGET,
                segment_count = segments.len(),
                "input is not dotted-quad shaped, passing through unchanged"
            );
            return raw.to_owned();
        }
        let (prefix1, prefix2) = (segments[0], segments[1]);

        let salt = DayKey::today(&self.clock);
        let digest = keyed_digest(raw, salt.as_str());

        let octet3 = derive_octet(&digest, 0);
        let octet4 = derive_octet(&digest, 1);

        format!("{prefix1}.{prefix2}.{octet3}.{octet4}")
    }

    /// Anonymizes a parsed address.
    ///
    /// IPv4 addresses are anonymized; IPv6 addresses come back as their
    /// canonical text form unchanged, making the passthrough policy explicit
    /// at the type level.
    pub fn anonymize_addr(&self, addr: IpAddr) -> String {
        self.anonymize_str(&addr.to_string())
    }
}

/// Derives one synthetic octet from the digest.
///
/// Each octet consumes a distinct 4-hex-char slice, parsed as a 16-bit
/// value and reduced modulo 256. The slice's value space (0..=65535) divides
/// evenly by 256, so the reduction is unbiased across octet values.
fn derive_octet(digest: &str, index: usize) -> u8 {
    let start = index * HEX_CHARS_PER_OCTET;
    let slice = &digest[start..start + HEX_CHARS_PER_OCTET];
    // The digest is hex we produced ourselves, so the parse cannot fail.
    (u16::from_str_radix(slice, 16).unwrap_or_default() % 256) as u8
}

/// Anonymizes an optional raw address with the default UTC day boundary.
///
/// Convenience entry point for callers that do not need clock injection or
/// a configured time zone; equivalent to `IpAnonymizer::new().anonymize(raw)`.
pub fn anonymize(raw: Option<&str>) -> Option<String> {
    IpAnonymizer::new().anonymize(raw)
}
