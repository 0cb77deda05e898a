//! Error types for the payload layer.
//!
//! The AQI engine itself cannot fail; only decoding and validating a sensor
//! status document can.  All variants are `Copy` so they can be logged and
//! passed around without allocation.

use core::fmt;

use crate::status::Channel;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The status document is not valid JSON for the expected shape.
    Decode { line: usize, column: usize },
    /// A decoded concentration cannot be fed to the engine.
    Reading(ReadingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { line, column } => {
                write!(f, "decode: malformed status at line {line}, column {column}")
            }
            Self::Reading(e) => write!(f, "reading: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode {
            line: e.line(),
            column: e.column(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reading errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingError {
    /// Concentration is NaN or infinite.
    NonFinite {
        channel: Channel,
        field: &'static str,
    },
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { channel, field } => {
                write!(f, "channel {channel} field {field} is not finite")
            }
        }
    }
}

impl From<ReadingError> for Error {
    fn from(e: ReadingError) -> Self {
        Self::Reading(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
