//! Neighbor-status lookups across week records.
//!
//! A day's listed hours sometimes only make sense together with the day
//! next to it: a run of hours that crosses midnight into (or out of) a
//! 24-hour day renders differently. These helpers answer "what is the
//! status of the day before/after this one", wrapping to the adjacent week
//! record at the Saturday/Sunday boundary.

use crate::models::{Day, DayStatus, Week, Weekday};

/// Status of the day after `weekday` in `week`.
///
/// Interior weekdays look within the same week; Saturday looks at the next
/// week record's Sunday. Returns `None` when the neighboring week or day is
/// absent, or the day carries no status.
pub fn next_day_status(
    week: &Week,
    next_week: Option<&Week>,
    weekday: Weekday,
) -> Option<DayStatus> {
    let day = match weekday.succ() {
        Some(next) => week.day(next),
        None => next_week.and_then(|week| week.day(Weekday::Sunday)),
    };
    present_status(day)
}

/// Status of the day before `weekday` in `week`.
///
/// Interior weekdays look within the same week; Sunday looks at the
/// previous week record's Saturday. Returns `None` when the neighboring
/// week or day is absent, or the day carries no status.
pub fn prev_day_status(
    week: &Week,
    prev_week: Option<&Week>,
    weekday: Weekday,
) -> Option<DayStatus> {
    let day = match weekday.pred() {
        Some(prev) => week.day(prev),
        None => prev_week.and_then(|week| week.day(Weekday::Saturday)),
    };
    present_status(day)
}

fn present_status(day: Option<&Day>) -> Option<DayStatus> {
    match &day?.times.as_ref()?.status {
        DayStatus::Unset => None,
        status => Some(status.clone()),
    }
}
