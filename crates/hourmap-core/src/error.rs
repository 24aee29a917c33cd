//! Error types for hourmap-core.
//!
//! This module defines the error types used throughout the library,
//! with specific error categories for timezone handling and for the
//! human-authored time tokens the feed carries.

use thiserror::Error;

/// The main error type for hours normalization.
#[derive(Debug, Error)]
pub enum HourmapError {
    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A 12-hour time token that does not match
    /// `<hour>[:<minute>[:<second>]]<am|pm>`.
    #[error("Invalid time token: '{0}'")]
    InvalidTimeToken(String),

    /// A wall-clock time that does not exist in the target zone because a
    /// DST spring-forward transition skipped it.
    #[error("Nonexistent local time {local} in timezone {tz}")]
    NonexistentLocalTime {
        /// The unrepresentable local date-time.
        local: String,
        /// The zone in which resolution was attempted.
        tz: String,
    },
}

/// Result type alias for hours normalization operations.
pub type Result<T> = std::result::Result<T, HourmapError>;
