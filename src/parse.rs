use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::ParseError;

/// Accepted textual layouts, tried in order. Date-only layouts get a
/// midnight time-of-day.
const LAYOUTS: &[(&str, bool)] = &[
    ("%Y-%m-%d %H:%M:%S", true),
    ("%d-%m-%Y %H:%M:%S", true),
    ("%Y-%m-%d", false),
    ("%d-%m-%Y", false),
];

/// Resolve an IANA timezone name through the chrono-tz database.
pub fn parse_time_zone(name: &str) -> Result<Tz, ParseError> {
    name.parse::<Tz>().map_err(|_| ParseError::InvalidTimeZone {
        name: name.to_string(),
    })
}

/// Parse a date string in one of the accepted layouts and anchor it in the
/// given zone.
///
/// An ambiguous local time (DST fold) resolves to the earlier instant; a
/// local time that does not exist in the zone (DST gap) is an error.
pub fn parse_instant(input: &str, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    let naive = parse_naive(input)?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earlier, _) => {
            debug!(input = input, zone = %tz, "Ambiguous local time, taking earlier instant");
            Ok(earlier)
        }
        LocalResult::None => Err(ParseError::InvalidDate {
            input: input.to_string(),
        }),
    }
}

fn parse_naive(input: &str) -> Result<NaiveDateTime, ParseError> {
    for &(layout, has_time) in LAYOUTS {
        if has_time {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, layout) {
                debug!(input = input, layout = layout, "Parsed date string");
                return Ok(dt);
            }
        } else if let Ok(date) = NaiveDate::parse_from_str(input, layout) {
            debug!(input = input, layout = layout, "Parsed date string, defaulting to midnight");
            // Midnight always exists on a NaiveDate.
            return date.and_hms_opt(0, 0, 0).ok_or_else(|| ParseError::InvalidDate {
                input: input.to_string(),
            });
        }
    }

    // chrono rejects out-of-range fields (month 13, Feb 30) during layout
    // matching, so everything unparsed lands here.
    Err(ParseError::InvalidFormat {
        input: input.to_string(),
    })
}
