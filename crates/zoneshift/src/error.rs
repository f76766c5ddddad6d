//! Error types for the conversion pipeline.
//!
//! Each variant renders the exact one-line message shown to the user; the
//! pipeline boundary converts every error to text via `Display` and nothing
//! else, so these strings are the user-facing contract.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The raw text is empty, has no standalone `to` separator, or does not
    /// split into exactly two non-empty segments.
    #[error("Input must follow the format: [date-time w/ time-zone] to [target time-zone].")]
    MalformedInput,

    /// No format pattern matched the date-time segment. Carries the segment
    /// text for the diagnostic.
    #[error("The format of the date time is invalid: {0}")]
    UnparseableDateTime(String),

    /// The target token is not syntactically a zone identifier. Carries the
    /// normalized (uppercased) token.
    #[error("Zone ID: {0} has an invalid format.")]
    UnknownZoneFormat(String),

    /// The target token is well-formed but names no known region or
    /// abbreviation. Carries the normalized (uppercased) token.
    #[error("Zone ID region ID for: {0} could not be found.")]
    UnknownZoneRegion(String),

    /// The converted representation fell outside the representable date
    /// range.
    #[error("Failed to return a copy of this date-time with a different time-zone.")]
    DateRangeExceeded,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
