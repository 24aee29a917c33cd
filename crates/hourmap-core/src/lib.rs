//! # hourmap-core
//!
//! Timezone-aware normalization of weekly operating-hours feeds.
//!
//! This library takes the raw schedule payload published for a set of
//! physical locations and produces a render-ready version: human 12-hour
//! tokens become zone-aware instants, ranges that run past midnight are
//! corrected, and summaries are rewritten when a day's hours are really
//! part of a 24-hour span on an adjacent day.
//!
//! ## Features
//!
//! - **12-Hour Token Parsing**: `8am`, `12:30pm`, `05:04:45pm` and friends,
//!   with the feed's midnight/noon conventions handled explicitly.
//! - **Per-Location Timezones**: an explicit override table plus a default
//!   zone, resolved through [`tz::TimezoneConfig`].
//! - **Overnight Correction**: a close time earlier than its open time is
//!   pushed into the next calendar day.
//! - **Adjacency-Aware Summaries**: days adjoining 24-hour days rerender as
//!   `Opens at ...` / `Closes at ...`.
//! - **Deterministic Evaluation**: the instant used for zone metadata is a
//!   parameter, never an ambient clock read.
//!
//! ## Example
//!
//! ```rust
//! use chrono::TimeZone;
//! use hourmap_core::prelude::*;
//!
//! let payload = r#"{
//!     "locations": [
//!         { "lid": 123, "name": "Main Library", "weeks": [] }
//!     ]
//! }"#;
//!
//! let feed: HoursFeed = serde_json::from_str(payload).unwrap();
//! let now = chrono::Utc.with_ymd_and_hms(2020, 12, 1, 12, 0, 0).single().unwrap();
//! let localized = localize_feed(feed, &TimezoneConfig::default(), now).unwrap();
//!
//! let main = &localized.locations["123"];
//! assert_eq!(main.timezone.as_deref(), Some("EST"));
//! assert_eq!(main.timezone_offset.as_deref(), Some("-05:00"));
//! ```

pub mod adjacency;
pub mod error;
pub mod localize;
pub mod map;
pub mod models;
pub mod parse;
pub mod tz;

// Re-export commonly used types at the crate root
pub use adjacency::{next_day_status, prev_day_status};
pub use error::{HourmapError, Result};
pub use localize::localize_day;
pub use map::{localize_feed, map_weeks, normalize_rendered};
pub use models::{
    Day, DayHours, DayStatus, HoursFeed, Interval, LocalizedHours, Location, Week, Weekday,
};
pub use parse::{parse_time_token, time_suffix};
pub use tz::TimezoneConfig;

/// Prelude module for convenient imports.
///
/// ```
/// use hourmap_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adjacency::{next_day_status, prev_day_status};
    pub use crate::error::{HourmapError, Result};
    pub use crate::localize::localize_day;
    pub use crate::map::{localize_feed, map_weeks, normalize_rendered};
    pub use crate::models::*;
    pub use crate::parse::{parse_time_token, time_suffix};
    pub use crate::tz::{TimezoneConfig, parse_tz};
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn winter_instant() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc
            .with_ymd_and_hms(2020, 12, 1, 12, 0, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn full_workflow_feed() {
        let payload = r#"{
            "locations": [
                {
                    "lid": 123,
                    "name": "Main Library",
                    "category": "library",
                    "weeks": [
                        {
                            "Sunday": {
                                "date": "2020-11-29",
                                "times": {
                                    "status": "open",
                                    "hours": [{ "from": "8am", "to": "12am" }],
                                    "currently_open": false
                                },
                                "rendered": "8am - midnight"
                            },
                            "Monday": {
                                "date": "2020-11-30",
                                "times": { "status": "24hours", "hours": [], "currently_open": true },
                                "rendered": "8am - 8pm"
                            }
                        }
                    ]
                },
                {
                    "lid": 6088,
                    "name": "London Reading Room",
                    "weeks": [
                        {
                            "Sunday": {
                                "date": "2020-11-29",
                                "times": { "status": "text", "text": "Closed until further notice" },
                                "rendered": "Closed until further notice."
                            }
                        }
                    ]
                }
            ]
        }"#;

        let feed: HoursFeed = serde_json::from_str(payload).unwrap();
        let localized = localize_feed(feed, &TimezoneConfig::default(), winter_instant()).unwrap();
        assert_eq!(localized.locations.len(), 2);

        let main = &localized.locations["123"];
        assert_eq!(main.timezone.as_deref(), Some("EST"));
        assert_eq!(main.timezone_offset.as_deref(), Some("-05:00"));

        // Sunday's hours continue into Monday's 24-hour day.
        let sunday = main.weeks[0].day(Weekday::Sunday).unwrap();
        assert_eq!(sunday.rendered, "Opens at 8am");
        let range = &sunday.times.as_ref().unwrap().hours[0];
        assert_eq!(
            range.from_local_date.as_deref(),
            Some("2020-11-29T08:00:00-05:00")
        );
        assert_eq!(
            range.to_local_date.as_deref(),
            Some("2020-11-30T00:00:00-05:00")
        );

        let monday = main.weeks[0].day(Weekday::Monday).unwrap();
        assert_eq!(monday.rendered, "Open 24 Hours");

        // The pinned location resolves to London and passes its text day
        // through with display punctuation applied.
        let london = &localized.locations["6088"];
        assert_eq!(london.timezone.as_deref(), Some("GMT"));
        assert_eq!(london.timezone_offset.as_deref(), Some("+00:00"));
        let sunday = london.weeks[0].day(Weekday::Sunday).unwrap();
        assert_eq!(sunday.rendered, "Closed until further notice,");
        assert!(sunday.times.as_ref().unwrap().hours.is_empty());
    }

    #[test]
    fn empty_payload_yields_empty_mapping() {
        let feed: HoursFeed = serde_json::from_str("{}").unwrap();
        let localized = localize_feed(feed, &TimezoneConfig::default(), winter_instant()).unwrap();
        let json = serde_json::to_string(&localized).unwrap();
        assert_eq!(json, r#"{"locations":{}}"#);
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let _tz = parse_tz("UTC").unwrap();
        let _config = TimezoneConfig::default();
        let _weekday = Weekday::Sunday;
    }
}
