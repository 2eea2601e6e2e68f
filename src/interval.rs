use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Calendar-aware decomposition of the elapsed time between two local
/// date/times.
///
/// Each field is the remainder after the larger units are taken out:
/// "1 year 2 months 3 days" means more than 1 year but less than
/// 1 year 3 months has passed. Chrono has no year/month/day diff of its
/// own, so the borrowing rules (variable month lengths, leap years) are
/// applied here by hand.
///
/// The decomposition is direction-normalized: whichever argument is
/// earlier becomes the subtrahend, so every field is non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarInterval {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CalendarInterval {
    /// Compute the calendar difference between two wall-clock date/times.
    pub fn between(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let mut seconds = end.second() as i64 - start.second() as i64;
        let mut minutes = end.minute() as i64 - start.minute() as i64;
        let mut hours = end.hour() as i64 - start.hour() as i64;
        let mut days = end.day() as i64 - start.day() as i64;
        let mut months = end.month() as i64 - start.month() as i64;
        let mut years = (end.year() - start.year()) as i64;

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            hours += 24;
            days -= 1;
        }

        // Day underflow borrows from the months preceding `end`, walking
        // backwards one month at a time so short months (February) are
        // counted at their real length.
        let (mut by, mut bm) = (end.year(), end.month());
        while days < 0 {
            if bm == 1 {
                by -= 1;
                bm = 12;
            } else {
                bm -= 1;
            }
            days += days_in_month(by, bm);
            months -= 1;
        }

        if months < 0 {
            months += 12;
            years -= 1;
        }

        CalendarInterval {
            years: years as u32,
            months: months as u32,
            days: days as u32,
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }
}

/// Gregorian month length.
pub(crate) fn days_in_month(year: i32, month: u32) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        // Months are 1-12 by construction; keeps the function total.
        _ => 30,
    }
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
