use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use hourmap_core::{HoursFeed, localize_feed};

use crate::cli::LocalizeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{build_timezone_config, parse_now};

pub fn run_localize(args: LocalizeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let config = build_timezone_config(args.default_tz.as_deref(), &args.tz_overrides)?;
    let now = parse_now(args.now.as_deref())?;

    let payload = read_input(&args.input)?;
    let feed: HoursFeed = serde_json::from_str(&payload)
        .map_err(|e| CliError::input(format!("Invalid feed payload: {}", e)))?;

    let localized =
        localize_feed(feed, &config, now).map_err(|e| CliError::input(e.to_string()))?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&localized)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for (lid, location) in &localized.locations {
                println!(
                    "{} {} ({} {}): {} week(s)",
                    lid,
                    location.name,
                    location.timezone.as_deref().unwrap_or("?"),
                    location.timezone_offset.as_deref().unwrap_or("?"),
                    location.weeks.len()
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn read_input(path: &str) -> CliResult<String> {
    let mut payload = String::new();

    if path == "-" {
        io::stdin()
            .read_to_string(&mut payload)
            .map_err(|e| CliError::runtime(format!("Failed to read stdin: {}", e)))?;
    } else {
        File::open(path)
            .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", path, e)))?
            .read_to_string(&mut payload)
            .map_err(|e| CliError::runtime(format!("Failed to read file '{}': {}", path, e)))?;
    }

    Ok(payload)
}
