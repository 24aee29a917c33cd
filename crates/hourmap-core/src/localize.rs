//! Day-level hours localization.
//!
//! This module converts one day's raw hour ranges into zone-aware instants,
//! corrects ranges that run past midnight, and rewrites the rendered
//! summary when a day's hours are really the head or tail of a 24-hour
//! span on an adjacent day.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::Result;
use crate::models::{Day, DayStatus, Interval};
use crate::parse::parse_time_token;
use crate::tz::{format_local, resolve_local};

/// Midnight token used by the feed when a range starts or ends at the day
/// boundary.
const MIDNIGHT_TOKEN: &str = "12am";

/// Localize one day's hours and adjust its rendered summary.
///
/// `next_day` / `prev_day` are the statuses of the chronologically adjacent
/// days, when those days exist. The input day is consumed and a new value
/// returned; nothing outside it is touched.
///
/// - `open` days get `fromLocalDate`/`toLocalDate` attached to every range,
///   with ranges whose close precedes their open pushed 24 hours into the
///   next day. A day whose hours are the tail of a 24-hour run rerenders as
///   `Closes at <to>`; one whose hours continue into a 24-hour day as
///   `Opens at <from>`.
/// - `24hours` days get a single synthetic range spanning the whole
///   calendar day and the rendered text `Open 24 Hours`.
/// - Every other status passes through untouched.
pub fn localize_day(
    tz: Tz,
    day: Day,
    next_day: Option<DayStatus>,
    prev_day: Option<DayStatus>,
) -> Result<Day> {
    let status = day
        .times
        .as_ref()
        .map(|times| times.status.clone())
        .unwrap_or_default();

    match status {
        DayStatus::Open => localize_open_day(tz, day, next_day, prev_day),
        DayStatus::TwentyFourHours => localize_all_day(tz, day),
        _ => Ok(day),
    }
}

fn localize_open_day(
    tz: Tz,
    mut day: Day,
    next_day: Option<DayStatus>,
    prev_day: Option<DayStatus>,
) -> Result<Day> {
    let date = day.date;
    let mut rendered = None;

    if let Some(times) = day.times.as_mut() {
        for range in &mut times.hours {
            let from_naive = date.and_time(parse_time_token(range.from.as_deref().unwrap_or(""))?);
            let from_local = resolve_local(from_naive, tz)?;

            let to_naive = match range.to.as_deref() {
                None | Some("") => end_of_day(date),
                Some(token) => date.and_time(parse_time_token(token)?),
            };
            let mut to_local = resolve_local(to_naive, tz)?;

            // A close instant before the open instant means the range runs
            // past midnight; the close belongs 24 wall-clock hours later.
            if to_local < from_local {
                to_local = resolve_local(to_naive + Duration::days(1), tz)?;
            }

            range.from_local_date = Some(format_local(&from_local));
            range.to_local_date = Some(format_local(&to_local));
        }

        // Hours starting at midnight after a 24-hour day are the closing
        // tail of that day's span; the opens-rewrite below wins if both
        // match.
        if prev_day == Some(DayStatus::TwentyFourHours) {
            if let Some(last) = times.hours.last() {
                if last.from.as_deref() == Some(MIDNIGHT_TOKEN) {
                    rendered = Some(format!("Closes at {}", last.to.as_deref().unwrap_or("")));
                }
            }
        }
        if next_day == Some(DayStatus::TwentyFourHours) {
            if let Some(first) = times.hours.first() {
                if first.to.as_deref() == Some(MIDNIGHT_TOKEN) {
                    rendered = Some(format!("Opens at {}", first.from.as_deref().unwrap_or("")));
                }
            }
        }
    }

    if let Some(rendered) = rendered {
        day.rendered = rendered;
    }
    Ok(day)
}

fn localize_all_day(tz: Tz, mut day: Day) -> Result<Day> {
    let start = resolve_local(start_of_day(day.date), tz)?;
    let end = resolve_local(end_of_day(day.date), tz)?;

    if let Some(times) = day.times.as_mut() {
        times.hours = vec![Interval {
            from: None,
            to: None,
            from_local_date: Some(format_local(&start)),
            to_local_date: Some(format_local(&end)),
        }];
    }
    day.rendered = "Open 24 Hours".to_string();
    Ok(day)
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HourmapError;
    use crate::models::DayHours;
    use crate::tz::FALLBACK_TIMEZONE;

    fn interval(from: &str, to: &str) -> Interval {
        Interval {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            ..Interval::default()
        }
    }

    fn open_day(date: &str, hours: Vec<Interval>, rendered: &str) -> Day {
        Day {
            date: date.parse().unwrap(),
            times: Some(DayHours {
                status: DayStatus::Open,
                hours,
                currently_open: Some(false),
                text: None,
            }),
            rendered: rendered.to_string(),
        }
    }

    fn status_day(date: &str, status: DayStatus, rendered: &str) -> Day {
        Day {
            date: date.parse().unwrap(),
            times: Some(DayHours {
                status,
                ..DayHours::default()
            }),
            rendered: rendered.to_string(),
        }
    }

    fn localized(day: Day) -> Day {
        localize_day(FALLBACK_TIMEZONE, day, None, None).unwrap()
    }

    fn range(day: &Day, index: usize) -> &Interval {
        &day.times.as_ref().unwrap().hours[index]
    }

    #[test]
    fn localizes_open_hours() {
        let day = localized(open_day(
            "2017-09-08",
            vec![interval("12am", "11pm")],
            "12am - 11pm",
        ));
        assert_eq!(
            range(&day, 0).from_local_date.as_deref(),
            Some("2017-09-08T00:00:00-04:00")
        );
        assert_eq!(
            range(&day, 0).to_local_date.as_deref(),
            Some("2017-09-08T23:00:00-04:00")
        );
    }

    #[test]
    fn close_at_midnight_lands_on_the_next_day() {
        let day = localized(open_day(
            "2017-09-08",
            vec![interval("1am", "12am")],
            "1am - 12am",
        ));
        assert_eq!(
            range(&day, 0).from_local_date.as_deref(),
            Some("2017-09-08T01:00:00-04:00")
        );
        assert_eq!(
            range(&day, 0).to_local_date.as_deref(),
            Some("2017-09-09T00:00:00-04:00")
        );
    }

    #[test]
    fn close_before_open_wraps_past_midnight() {
        let day = localized(open_day(
            "2017-09-08",
            vec![interval("8am", "3am")],
            "8am - 3am",
        ));
        assert_eq!(
            range(&day, 0).to_local_date.as_deref(),
            Some("2017-09-09T03:00:00-04:00")
        );
        assert!(range(&day, 0).to_local_date > range(&day, 0).from_local_date);
    }

    #[test]
    fn localizes_minute_precision_hours() {
        let day = localized(open_day(
            "2017-09-08",
            vec![interval("2:30am", "11:45pm")],
            "2:30am - 11:45pm",
        ));
        assert_eq!(
            range(&day, 0).from_local_date.as_deref(),
            Some("2017-09-08T02:30:00-04:00")
        );
        assert_eq!(
            range(&day, 0).to_local_date.as_deref(),
            Some("2017-09-08T23:45:00-04:00")
        );
    }

    #[test]
    fn midnight_and_noon_records() {
        let day = localized(open_day(
            "2017-09-08",
            vec![interval("12:30am", "11:45pm"), interval("12:30pm", "11:45pm")],
            "",
        ));
        assert_eq!(
            range(&day, 0).from_local_date.as_deref(),
            Some("2017-09-08T00:30:00-04:00")
        );
        assert_eq!(
            range(&day, 1).from_local_date.as_deref(),
            Some("2017-09-08T12:30:00-04:00")
        );
    }

    #[test]
    fn empty_close_means_end_of_day() {
        let day = localized(open_day("2017-09-08", vec![interval("8am", "")], "8am "));
        assert_eq!(
            range(&day, 0).to_local_date.as_deref(),
            Some("2017-09-08T23:59:59-04:00")
        );
    }

    #[test]
    fn all_day_produces_one_synthetic_range() {
        let day = localized(status_day(
            "2017-09-08",
            DayStatus::TwentyFourHours,
            "12am - 11pm",
        ));
        let times = day.times.as_ref().unwrap();
        assert_eq!(times.hours.len(), 1);
        assert_eq!(times.hours[0].from, None);
        assert_eq!(
            times.hours[0].from_local_date.as_deref(),
            Some("2017-09-08T00:00:00-04:00")
        );
        assert_eq!(
            times.hours[0].to_local_date.as_deref(),
            Some("2017-09-08T23:59:59-04:00")
        );
        assert_eq!(day.rendered, "Open 24 Hours");
    }

    #[test]
    fn closed_day_passes_through() {
        let day = status_day("2017-09-08", DayStatus::Closed, "12am - 11pm");
        assert_eq!(localized(day.clone()), day);
    }

    #[test]
    fn unrecognized_status_passes_through() {
        let day = status_day(
            "2017-09-08",
            DayStatus::Other("not-set".to_string()),
            "",
        );
        assert_eq!(localized(day.clone()), day);
    }

    #[test]
    fn day_without_times_passes_through() {
        let day = Day {
            date: "2017-09-08".parse().unwrap(),
            times: None,
            rendered: String::new(),
        };
        assert_eq!(localized(day.clone()), day);
    }

    #[test]
    fn tail_of_a_24_hour_run_renders_closing_time() {
        let day = open_day(
            "2017-09-08",
            vec![interval("12am", "11:45pm")],
            "12am to 11:45pm",
        );
        let day = localize_day(
            FALLBACK_TIMEZONE,
            day,
            None,
            Some(DayStatus::TwentyFourHours),
        )
        .unwrap();
        assert_eq!(day.rendered, "Closes at 11:45pm");
    }

    #[test]
    fn head_of_a_24_hour_run_renders_opening_time() {
        let day = open_day("2017-09-08", vec![interval("8am", "12am")], "8am ");
        let day = localize_day(
            FALLBACK_TIMEZONE,
            day,
            Some(DayStatus::TwentyFourHours),
            None,
        )
        .unwrap();
        assert_eq!(day.rendered, "Opens at 8am");
    }

    #[test]
    fn rewrites_require_a_24_hour_neighbor() {
        let day = open_day(
            "2017-09-08",
            vec![interval("12am", "11:45pm")],
            "12am - 11:45pm",
        );
        let day = localize_day(FALLBACK_TIMEZONE, day, None, Some(DayStatus::Open)).unwrap();
        assert_eq!(day.rendered, "12am - 11:45pm");
    }

    #[test]
    fn malformed_token_is_a_structured_error() {
        let day = open_day("2017-09-08", vec![interval("eightish", "")], "");
        let result = localize_day(FALLBACK_TIMEZONE, day, None, None);
        assert!(matches!(result, Err(HourmapError::InvalidTimeToken(_))));
    }
}
