use std::process::ExitCode;

use serde::Serialize;

use hourmap_core::tz::zone_metadata;

use crate::cli::TzArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{build_timezone_config, parse_now};

pub fn run_tz(args: TzArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let config = build_timezone_config(args.default_tz.as_deref(), &args.tz_overrides)?;
    let now = parse_now(args.now.as_deref())?;

    let tz = config.resolve(args.lid);
    let (abbreviation, offset) = zone_metadata(tz, now);

    let result = TzResult {
        lid: args.lid,
        tz: tz.to_string(),
        abbreviation,
        offset,
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Location: {}", result.lid);
            println!("Timezone: {}", result.tz);
            println!("Abbreviation: {}", result.abbreviation);
            println!("Offset: {}", result.offset);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct TzResult {
    lid: u32,
    tz: String,
    abbreviation: String,
    offset: String,
}
