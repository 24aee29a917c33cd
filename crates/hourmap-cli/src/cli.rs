use clap::{Parser, Subcommand};

/// Timezone-aware operating-hours localizer
#[derive(Parser, Debug)]
#[command(name = "hourmap")]
#[command(about = "Timezone-aware operating-hours localizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Localize a raw hours feed payload
    Localize(LocalizeArgs),
    /// Show how a location id resolves to a timezone
    Tz(TzArgs),
    /// Parse a 12-hour time token into its 24-hour form
    Time(TimeArgs),
}

#[derive(clap::Args, Debug)]
pub struct LocalizeArgs {
    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Default IANA timezone for locations without an override
    #[arg(long)]
    pub default_tz: Option<String>,

    /// Pin a location id to a timezone (repeatable), e.g. 6088=Europe/London
    #[arg(long = "tz-override", value_name = "LID=ZONE")]
    pub tz_overrides: Vec<String>,

    /// Evaluation instant for timezone metadata (RFC3339); defaults to now
    #[arg(long)]
    pub now: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TzArgs {
    /// Location id to resolve
    #[arg(short, long)]
    pub lid: u32,

    /// Default IANA timezone for locations without an override
    #[arg(long)]
    pub default_tz: Option<String>,

    /// Pin a location id to a timezone (repeatable), e.g. 6088=Europe/London
    #[arg(long = "tz-override", value_name = "LID=ZONE")]
    pub tz_overrides: Vec<String>,

    /// Evaluation instant for the zone metadata (RFC3339); defaults to now
    #[arg(long)]
    pub now: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TimeArgs {
    /// 12-hour time token, e.g. 8am or 12:30pm
    pub token: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
