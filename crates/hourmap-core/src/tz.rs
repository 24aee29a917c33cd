//! Timezone resolution and local-time handling.
//!
//! This module maps location identifiers to IANA timezones and converts
//! wall-clock local times into zone-aware instants with explicit DST
//! handling.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{HourmapError, Result};

/// Zone used when no default timezone is configured.
pub const FALLBACK_TIMEZONE: Tz = chrono_tz::America::Indiana::Indianapolis;

/// Location id that the default configuration pins to a European zone.
const LONDON_LOCATION_ID: u32 = 6088;

/// Maps location identifiers to IANA timezones.
///
/// Resolution consults the per-location override table first and falls back
/// to the configured default zone. The configuration is an explicit value
/// passed into the engine, never ambient process state, so concurrent
/// callers can run with different tables.
///
/// # Examples
///
/// ```
/// use hourmap_core::tz::TimezoneConfig;
///
/// let config = TimezoneConfig::default();
/// assert_eq!(config.resolve(6088).name(), "Europe/London");
/// assert_eq!(config.resolve(123).name(), "America/Indiana/Indianapolis");
/// ```
#[derive(Debug, Clone)]
pub struct TimezoneConfig {
    default_tz: Tz,
    overrides: HashMap<u32, Tz>,
}

impl TimezoneConfig {
    /// Build a configuration with the given default zone and an empty
    /// override table; `None` selects the built-in fallback zone.
    pub fn new(default_tz: Option<Tz>) -> Self {
        Self {
            default_tz: default_tz.unwrap_or(FALLBACK_TIMEZONE),
            overrides: HashMap::new(),
        }
    }

    /// Replace the default zone, keeping the override table.
    pub fn with_default(mut self, tz: Tz) -> Self {
        self.default_tz = tz;
        self
    }

    /// Pin a single location to a zone, overriding the default.
    pub fn with_override(mut self, lid: u32, tz: Tz) -> Self {
        self.overrides.insert(lid, tz);
        self
    }

    /// The zone for a location id.
    pub fn resolve(&self, lid: u32) -> Tz {
        self.overrides.get(&lid).copied().unwrap_or(self.default_tz)
    }
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self::new(None).with_override(LONDON_LOCATION_ID, chrono_tz::Europe::London)
    }
}

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use hourmap_core::tz::parse_tz;
///
/// let tz = parse_tz("Europe/London").unwrap();
/// assert_eq!(tz.to_string(), "Europe/London");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| HourmapError::InvalidTimezone(name.to_string()))
}

/// Resolve a wall-clock local date-time in a zone.
///
/// Ambiguous times (DST fall back, the hour that occurs twice) resolve to
/// the earlier occurrence. Times a spring-forward transition skipped do not
/// exist on any clock in the zone and are an error rather than a guessed
/// instant.
pub fn resolve_local(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    let resolved = tz.from_local_datetime(&local);
    resolved
        .single()
        .or_else(|| resolved.earliest())
        .ok_or_else(|| HourmapError::NonexistentLocalTime {
            local: local.format("%Y-%m-%dT%H:%M:%S").to_string(),
            tz: tz.to_string(),
        })
}

/// Format a zoned date-time as ISO 8601 with its numeric UTC offset
/// (e.g. `2020-11-29T08:00:00-05:00`).
pub fn format_local(dt: &DateTime<Tz>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Zone abbreviation and numeric UTC offset at a given instant.
///
/// The instant matters: zones report different abbreviations and offsets in
/// and out of daylight saving, so callers inject the evaluation time instead
/// of this function reading the clock.
pub fn zone_metadata(tz: Tz, at: DateTime<Utc>) -> (String, String) {
    let local = at.with_timezone(&tz);
    (
        local.format("%Z").to_string(),
        local.format("%:z").to_string(),
    )
}
