use thiserror::Error;

/// Failure while turning a date string and timezone name into an instant.
///
/// Parsing is the only fallible step in this crate; every accessor on an
/// already-constructed value is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input matched neither `YYYY-MM-DD[ HH:MM:SS]` nor
    /// `DD-MM-YYYY[ HH:MM:SS]`, or its fields do not form a real calendar
    /// date (month 13, Feb 30).
    #[error("unrecognized or invalid date: {input:?} (expected YYYY-MM-DD or DD-MM-YYYY, with optional HH:MM:SS)")]
    InvalidFormat { input: String },

    /// The date parsed but names a wall-clock time the zone skips (DST gap).
    #[error("nonexistent local time: {input:?}")]
    InvalidDate { input: String },

    /// The timezone identifier is not a known IANA zone name.
    #[error("unknown timezone: {name:?}")]
    InvalidTimeZone { name: String },
}
