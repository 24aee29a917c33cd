use std::process::ExitCode;

use clap::Parser;

mod cli;
mod error;
mod localize_cmd;
mod shared;
mod time_cmd;
mod tz_cmd;

use cli::{Cli, Commands};
use error::{output_format_hint, parse_output_format, render_error};
use localize_cmd::run_localize;
use time_cmd::run_time;
use tz_cmd::run_tz;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Localize(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_localize(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Tz(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_tz(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Time(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_time(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
