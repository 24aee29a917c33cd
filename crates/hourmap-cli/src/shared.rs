use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use hourmap_core::tz::{self, TimezoneConfig};

use crate::error::{CliError, CliResult};

pub fn parse_tz_or_input_error(name: &str) -> CliResult<Tz> {
    tz::parse_tz(name).map_err(|e| CliError::input(format!("Invalid timezone '{}': {}", name, e)))
}

/// Parse one repeatable `LID=ZONE` override flag.
pub fn parse_override(spec: &str) -> CliResult<(u32, Tz)> {
    let Some((lid, zone)) = spec.split_once('=') else {
        return Err(CliError::input(format!(
            "Invalid tz-override '{}'. Expected: LID=ZONE",
            spec
        )));
    };

    let lid = lid.trim().parse::<u32>().map_err(|_| {
        CliError::input(format!("Invalid location id in tz-override '{}'", spec))
    })?;
    let tz = parse_tz_or_input_error(zone.trim())?;

    Ok((lid, tz))
}

/// Build the resolver configuration from CLI flags.
///
/// The built-in override table stays active; flags replace the default zone
/// and add to (or shadow entries of) the table.
pub fn build_timezone_config(
    default_tz: Option<&str>,
    overrides: &[String],
) -> CliResult<TimezoneConfig> {
    let mut config = TimezoneConfig::default();

    if let Some(name) = default_tz {
        config = config.with_default(parse_tz_or_input_error(name)?);
    }
    for spec in overrides {
        let (lid, tz) = parse_override(spec)?;
        config = config.with_override(lid, tz);
    }

    Ok(config)
}

/// The evaluation instant: an explicit RFC3339 flag value, or the wall
/// clock when none was given.
pub fn parse_now(now: Option<&str>) -> CliResult<DateTime<Utc>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CliError::input(format!("Invalid --now '{}': {}", s, e))),
        None => Ok(Utc::now()),
    }
}
