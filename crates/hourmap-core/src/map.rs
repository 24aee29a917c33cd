//! Week and location mapping.
//!
//! This module drives the localization pipeline over whole payloads: every
//! week of every location, weekdays in fixed order, with neighbor statuses
//! resolved across week boundaries and rendered text normalized for
//! display.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::adjacency::{next_day_status, prev_day_status};
use crate::error::Result;
use crate::localize::localize_day;
use crate::models::{HoursFeed, LocalizedHours, Week, Weekday};
use crate::tz::{TimezoneConfig, zone_metadata};

/// Localize every week of a location's schedule.
///
/// Weeks keep their sequence order and weekdays their Sunday..Saturday
/// order; weekdays the feed never set stay absent. Each day's rendered text
/// is display-normalized after localization, whatever its status.
pub fn map_weeks(tz: Tz, weeks: &[Week]) -> Result<Vec<Week>> {
    let mut mapped = Vec::with_capacity(weeks.len());

    for (index, week) in weeks.iter().enumerate() {
        let prev_week = index.checked_sub(1).and_then(|prev| weeks.get(prev));
        let next_week = weeks.get(index + 1);

        let mut out = Week::default();
        for weekday in Weekday::ALL {
            let Some(day) = week.day(weekday) else {
                continue;
            };
            let next_status = next_day_status(week, next_week, weekday);
            let prev_status = prev_day_status(week, prev_week, weekday);

            let mut day = localize_day(tz, day.clone(), next_status, prev_status)?;
            day.rendered = normalize_rendered(&day.rendered);
            out.insert(weekday, day);
        }
        mapped.push(out);
    }

    Ok(mapped)
}

/// Display normalization applied to every rendered summary: hyphens become
/// en dashes and periods become commas.
pub fn normalize_rendered(rendered: &str) -> String {
    rendered.replace('-', "–").replace('.', ",")
}

/// Localize a whole feed payload.
///
/// Each location gets its zone's abbreviation and numeric offset (evaluated
/// at `now`), its weeks localized, and is re-keyed by its id in the output
/// mapping. A payload with no locations yields an empty mapping.
///
/// `now` is only used for the zone metadata; interval arithmetic is driven
/// entirely by each day's own date.
pub fn localize_feed(
    feed: HoursFeed,
    config: &TimezoneConfig,
    now: DateTime<Utc>,
) -> Result<LocalizedHours> {
    let mut locations = BTreeMap::new();

    for mut location in feed.locations {
        let tz = config.resolve(location.lid);
        let (abbreviation, offset) = zone_metadata(tz, now);
        location.timezone = Some(abbreviation);
        location.timezone_offset = Some(offset);
        location.weeks = map_weeks(tz, &location.weeks)?;
        locations.insert(location.lid.to_string(), location);
    }

    Ok(LocalizedHours { locations })
}
