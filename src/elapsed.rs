use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::ParseError;
use crate::interval::CalendarInterval;
use crate::parse;

/// Zone used by [`ElapsedTime::new`] when the caller does not pick one.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Oslo";

/// Elapsed time between a reference instant and "now".
///
/// Both views of the difference are computed once, at construction, and are
/// immutable afterward: the calendar-aware [`CalendarInterval`] drives the
/// phrase accessors, while the flat total-seconds scalar drives the numeric
/// unit ladder. The two deliberately disagree (the ladder rounds through
/// fixed 60/24/7/30 steps, the interval follows the real calendar).
///
/// ```
/// use elapsed::ElapsedTime;
///
/// let et = ElapsedTime::new("2017-06-16 00:55:35").unwrap();
/// println!("{}", et.relative_phrase());
/// println!("{}", et.absolute_phrase());
/// ```
#[derive(Debug, Clone)]
pub struct ElapsedTime {
    interval: CalendarInterval,
    total_seconds: u64,
}

/// One magnitude tier of the relative phrase: a gate on the interval and
/// the rendering used when the gate is the first to pass.
struct Tier {
    matches: fn(&CalendarInterval) -> bool,
    render: fn(&CalendarInterval) -> String,
}

/// Tiers in strict precedence order. Evaluation stops at the first match,
/// so later tiers never see an interval with a larger non-zero unit. The
/// seconds tier is the unconditional fallback.
const TIERS: [Tier; 5] = [
    Tier {
        matches: |iv| iv.years >= 1,
        render: render_years,
    },
    Tier {
        matches: |iv| iv.months >= 1,
        render: render_months,
    },
    Tier {
        matches: |iv| iv.days >= 1,
        render: render_days,
    },
    Tier {
        matches: |iv| iv.hours >= 1,
        render: render_hours,
    },
    Tier {
        matches: |iv| iv.minutes >= 1,
        render: render_minutes,
    },
];

impl ElapsedTime {
    /// Construct against the system clock in the [`DEFAULT_TIME_ZONE`].
    pub fn new(date: &str) -> Result<Self, ParseError> {
        Self::with_time_zone(date, DEFAULT_TIME_ZONE)
    }

    /// Construct against the system clock in an explicit IANA zone.
    pub fn with_time_zone(date: &str, zone: &str) -> Result<Self, ParseError> {
        Self::at(date, zone, Utc::now())
    }

    /// Construct against an explicit "now" anchor instead of the system
    /// clock. This is the primitive the other constructors delegate to;
    /// callers that need reproducible output (tests, replay) use it
    /// directly.
    pub fn at(date: &str, zone: &str, now: DateTime<Utc>) -> Result<Self, ParseError> {
        let tz = parse::parse_time_zone(zone)?;
        let reference = parse::parse_instant(date, tz)?;
        let local_now = now.with_timezone(&tz);

        let interval = CalendarInterval::between(reference.naive_local(), local_now.naive_local());
        let total_seconds = (now.timestamp() - reference.timestamp()).unsigned_abs();

        debug!(
            reference = %reference,
            zone = %tz,
            total_seconds = total_seconds,
            "Computed elapsed time"
        );

        Ok(Self {
            interval,
            total_seconds,
        })
    }

    /// The calendar-aware breakdown behind the phrase accessors.
    pub fn interval(&self) -> &CalendarInterval {
        &self.interval
    }

    /// Single best human summary of the elapsed time ("3 days ago",
    /// "Yesterday", "Just now").
    ///
    /// Tiers are consulted strictly largest-first and only the first
    /// matching tier is rendered: two years and three months in the past
    /// is "2 years ago", never "2 years 3 months ago".
    pub fn relative_phrase(&self) -> String {
        for tier in &TIERS {
            if (tier.matches)(&self.interval) {
                return (tier.render)(&self.interval);
            }
        }
        render_seconds(&self.interval)
    }

    /// Full breakdown of every non-zero calendar unit, largest to
    /// smallest: "1 year 11 months 29 days 21 hours 56 minutes 36 seconds ".
    ///
    /// Zero-valued units are omitted entirely. Each segment carries its own
    /// trailing space, so the result ends in a space and is empty when
    /// nothing has elapsed.
    pub fn absolute_phrase(&self) -> String {
        let iv = &self.interval;
        let units = [
            (iv.years, "year"),
            (iv.months, "month"),
            (iv.days, "day"),
            (iv.hours, "hour"),
            (iv.minutes, "minute"),
            (iv.seconds, "second"),
        ];

        let mut out = String::new();
        for (value, unit) in units {
            if value != 0 {
                out.push_str(&format!("{value} {unit}{} ", plural(value)));
            }
        }
        out
    }

    /// Calendar years elapsed.
    pub fn years(&self) -> u64 {
        self.interval.years as u64
    }

    /// Approximate months: `round(days / 30)`.
    pub fn months(&self) -> u64 {
        round_div(self.days(), 30)
    }

    /// Approximate weeks: `round(days / 7)`.
    pub fn weeks(&self) -> u64 {
        round_div(self.days(), 7)
    }

    /// Approximate days: `round(hours / 24)`.
    pub fn days(&self) -> u64 {
        round_div(self.hours(), 24)
    }

    /// Approximate hours: `round(minutes / 60)`.
    pub fn hours(&self) -> u64 {
        round_div(self.minutes(), 60)
    }

    /// Approximate minutes: `round(seconds / 60)`.
    pub fn minutes(&self) -> u64 {
        round_div(self.seconds(), 60)
    }

    /// Exact whole seconds between the two instants.
    pub fn seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn milliseconds(&self) -> u64 {
        self.seconds().saturating_mul(1000)
    }

    pub fn microseconds(&self) -> u64 {
        self.milliseconds().saturating_mul(1000)
    }

    pub fn nanoseconds(&self) -> u64 {
        self.microseconds().saturating_mul(1000)
    }
}

/// Division rounded half away from zero. Each rung of the unit ladder
/// divides the previous rung's result, so rounding error compounds up the
/// chain on purpose.
fn round_div(value: u64, divisor: u64) -> u64 {
    (value as f64 / divisor as f64).round() as u64
}

fn plural(value: u32) -> &'static str {
    if value > 1 { "s" } else { "" }
}

fn render_years(iv: &CalendarInterval) -> String {
    if iv.years == 1 {
        format!("{} year ago", iv.years)
    } else {
        format!("{} years ago", iv.years)
    }
}

/// The day remainder rides along with the month tier. With a zero day
/// remainder the suffix is " ago", which doubles the space after the unit
/// word: "1 month  ago". Kept byte-for-byte so downstream snapshots stay
/// stable.
fn render_months(iv: &CalendarInterval) -> String {
    let days_ago = match iv.days {
        0 => " ago".to_string(),
        1 => format!("{} day ago", iv.days),
        _ => format!("{} days ago", iv.days),
    };

    if iv.months == 1 {
        format!("{} month {}", iv.months, days_ago)
    } else {
        format!("{} months {}", iv.months, days_ago)
    }
}

fn render_days(iv: &CalendarInterval) -> String {
    if iv.days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", iv.days)
    }
}

fn render_hours(iv: &CalendarInterval) -> String {
    if iv.hours == 1 {
        format!("{} hour ago", iv.hours)
    } else {
        format!("{} hours ago", iv.hours)
    }
}

fn render_minutes(iv: &CalendarInterval) -> String {
    if iv.minutes == 1 {
        format!("{} minute ago", iv.minutes)
    } else {
        format!("{} minutes ago", iv.minutes)
    }
}

fn render_seconds(iv: &CalendarInterval) -> String {
    if iv.seconds <= 30 {
        "Just now".to_string()
    } else {
        format!("{} seconds ago", iv.seconds)
    }
}
