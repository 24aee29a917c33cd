//! Core data types for hourmap.
//!
//! This module defines the payload model for the weekly hours feed:
//! - [`Weekday`] - Fixed weekday index, Sunday through Saturday
//! - [`DayStatus`] - A day's operating mode
//! - [`Interval`] - A single open/close range, raw and localized
//! - [`DayHours`] - The `times` block of a day
//! - [`Day`] - One weekday's schedule entry
//! - [`Week`] - One week record, keyed by weekday
//! - [`Location`] - A physical site with its week sequence
//! - [`HoursFeed`] / [`LocalizedHours`] - Raw input and enriched output

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weekday in feed order. Sunday is first; declaration order drives both
/// adjacency arithmetic and serialized key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in evaluation order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Position within the week, 0 (Sunday) through 6 (Saturday).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next weekday within the same week record, `None` after Saturday.
    ///
    /// Crossing the Saturday boundary means consulting the next week record;
    /// see the adjacency functions.
    pub fn succ(self) -> Option<Weekday> {
        match self {
            Weekday::Saturday => None,
            _ => Some(Self::ALL[self.index() + 1]),
        }
    }

    /// The previous weekday within the same week record, `None` before Sunday.
    pub fn pred(self) -> Option<Weekday> {
        match self {
            Weekday::Sunday => None,
            _ => Some(Self::ALL[self.index() - 1]),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{}", name)
    }
}

/// Operating status of a single day.
///
/// Status strings outside the recognized set round-trip verbatim through
/// [`DayStatus::Other`]; a missing or empty status becomes
/// [`DayStatus::Unset`]. Only `open` and `24hours` days are localized,
/// everything else passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayStatus {
    Open,
    TwentyFourHours,
    Closed,
    Text,
    #[default]
    Unset,
    Other(String),
}

impl From<String> for DayStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "open" => DayStatus::Open,
            "24hours" => DayStatus::TwentyFourHours,
            "closed" => DayStatus::Closed,
            "text" => DayStatus::Text,
            "" => DayStatus::Unset,
            _ => DayStatus::Other(status),
        }
    }
}

impl From<DayStatus> for String {
    fn from(status: DayStatus) -> Self {
        match status {
            DayStatus::Open => "open".to_string(),
            DayStatus::TwentyFourHours => "24hours".to_string(),
            DayStatus::Closed => "closed".to_string(),
            DayStatus::Text => "text".to_string(),
            DayStatus::Unset => String::new(),
            DayStatus::Other(status) => status,
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(self.clone()))
    }
}

/// One open/close range within a day.
///
/// `from`/`to` hold the human-authored 12-hour tokens exactly as the feed
/// wrote them; the engine attaches `fromLocalDate`/`toLocalDate`. The
/// synthetic interval of a 24-hour day carries only the localized fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Opening instant in the location's zone, ISO 8601 with numeric offset.
    #[serde(rename = "fromLocalDate", default, skip_serializing_if = "Option::is_none")]
    pub from_local_date: Option<String>,
    /// Closing instant in the location's zone, never earlier than the opening.
    #[serde(rename = "toLocalDate", default, skip_serializing_if = "Option::is_none")]
    pub to_local_date: Option<String>,
}

/// The `times` block of a day: status plus the raw hour ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub status: DayStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One weekday's schedule entry: a calendar date, the operating hours, and
/// the human-readable summary the feed rendered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<DayHours>,
    #[serde(default)]
    pub rendered: String,
}

/// A single week record mapping weekday to day.
///
/// Not every weekday need be present. Keys always serialize in
/// Sunday..Saturday order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(BTreeMap<Weekday, Day>);

impl Week {
    pub fn day(&self, weekday: Weekday) -> Option<&Day> {
        self.0.get(&weekday)
    }

    pub fn insert(&mut self, weekday: Weekday, day: Day) {
        self.0.insert(weekday, day);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &Day)> {
        self.0.iter().map(|(weekday, day)| (*weekday, day))
    }
}

impl FromIterator<(Weekday, Day)> for Week {
    fn from_iter<I: IntoIterator<Item = (Weekday, Day)>>(iter: I) -> Self {
        Week(iter.into_iter().collect())
    }
}

/// A physical site with its own weekly hours feed.
///
/// `timezone`/`timezoneOffset` are attached by the engine at evaluation
/// time; every feed field the engine does not interpret rides along in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lid: u32,
    #[serde(default)]
    pub name: String,
    /// Zone abbreviation at the evaluation instant (e.g. `EST`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Numeric UTC offset at the evaluation instant (e.g. `-05:00`).
    #[serde(rename = "timezoneOffset", default, skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<String>,
    #[serde(default)]
    pub weeks: Vec<Week>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Raw feed payload as fetched from the hours widget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoursFeed {
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// Enriched output payload: locations re-keyed by their id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LocalizedHours {
    pub locations: BTreeMap<String, Location>,
}
