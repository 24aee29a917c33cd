//! 12-hour time token parsing.
//!
//! The feed writes times the way humans author them: `8am`, `12:30pm`,
//! `05:04:45pm`. This module turns those tokens into 24-hour local times
//! of day.

use chrono::NaiveTime;

use crate::error::{HourmapError, Result};

/// Parse a 12-hour time token into a local time of day.
///
/// The accepted shape is `<hour>[:<minute>[:<second>]]<am|pm>` with hour
/// 0-12, minute/second 0-59, and a case-insensitive meridiem. Hour `12` is
/// normalized to `0` before the meridiem adjustment, so `12am` is midnight
/// and `12pm` is noon. Minutes and seconds default to zero.
///
/// The hour value `0` (as in `0am`) is not reinterpreted: only the literal
/// hour `12` is normalized, so `0am` parses to midnight the same way `12am`
/// does. The feed occasionally emits such tokens and this matches what it
/// means by them.
///
/// # Errors
///
/// Returns [`HourmapError::InvalidTimeToken`] for tokens without a meridiem
/// suffix, with non-numeric components, or with out-of-range fields.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use hourmap_core::parse::parse_time_token;
///
/// let time = parse_time_token("12:30pm").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(12, 30, 0).unwrap());
///
/// assert!(parse_time_token("noon").is_err());
/// ```
pub fn parse_time_token(token: &str) -> Result<NaiveTime> {
    let invalid = || HourmapError::InvalidTimeToken(token.to_string());

    let lower = token.trim().to_ascii_lowercase();
    let (clock, pm) = if let Some(rest) = lower.strip_suffix("am") {
        (rest, false)
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest, true)
    } else {
        return Err(invalid());
    };

    let mut fields = clock.split(':');
    let mut hour = match fields.next() {
        Some(field) => parse_field(field, 12).ok_or_else(invalid)?,
        None => return Err(invalid()),
    };
    let minute = match fields.next() {
        Some(field) => parse_field(field, 59).ok_or_else(invalid)?,
        None => 0,
    };
    let second = match fields.next() {
        Some(field) => parse_field(field, 59).ok_or_else(invalid)?,
        None => 0,
    };
    if fields.next().is_some() {
        return Err(invalid());
    }

    if hour == 12 {
        hour = 0;
    }
    if pm {
        hour += 12;
    }

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

/// Parse one zero-padded or plain numeric field, rejecting anything beyond
/// `max`.
fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = field.parse().ok()?;
    (value <= max).then_some(value)
}

/// Format a 12-hour token as the fixed-width `THH:MM:SS` suffix used to
/// build local date-times.
///
/// # Examples
///
/// ```
/// use hourmap_core::parse::time_suffix;
///
/// assert_eq!(time_suffix("12am").unwrap(), "T00:00:00");
/// assert_eq!(time_suffix("05:04:45pm").unwrap(), "T17:04:45");
/// ```
pub fn time_suffix(token: &str) -> Result<String> {
    let time = parse_time_token(token)?;
    Ok(format!("T{}", time.format("%H:%M:%S")))
}
