use std::process::ExitCode;

use serde::Serialize;

use hourmap_core::time_suffix;

use crate::cli::TimeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

pub fn run_time(args: TimeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let time = time_suffix(&args.token).map_err(|e| CliError::input(e.to_string()))?;

    let result = TimeResult {
        token: args.token,
        time,
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{} -> {}", result.token, result.time);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct TimeResult {
    token: String,
    time: String,
}
