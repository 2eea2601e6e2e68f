//! # elapsed
//!
//! Human-readable elapsed time between a timestamp and now.
//!
//! A single value object, [`ElapsedTime`], is built from a date string
//! (`YYYY-MM-DD[ HH:MM:SS]` or `DD-MM-YYYY[ HH:MM:SS]`) and an IANA
//! timezone. It exposes:
//!
//! - a **relative phrase** — the single best summary, picked by a strict
//!   largest-unit-first precedence ("2 years ago", "Yesterday", "Just now"),
//! - an **absolute phrase** — every non-zero calendar unit spelled out
//!   ("1 year 3 days 5 minutes "),
//! - numeric accessors from years down to nanoseconds.
//!
//! The phrase accessors are driven by a calendar-aware interval (real
//! month lengths, leap years); the numeric ladder is a chain of rounded
//! divisions of total seconds. The two models intentionally differ.
//!
//! ```
//! use elapsed::ElapsedTime;
//!
//! let et = ElapsedTime::with_time_zone("2017-06-16 00:55:35", "Europe/Oslo").unwrap();
//! assert!(et.relative_phrase().ends_with("ago"));
//! ```
//!
//! Everything is computed once at construction; an `ElapsedTime` never
//! changes afterward and is safe to share across threads.

pub mod elapsed;
pub mod error;
pub mod interval;
pub mod parse;

pub use elapsed::{DEFAULT_TIME_ZONE, ElapsedTime};
pub use error::ParseError;
pub use interval::CalendarInterval;
