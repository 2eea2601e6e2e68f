use chrono::{DateTime, TimeZone, Utc};
use elapsed::{ElapsedTime, ParseError};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_ymd_with_time() {
    let et = ElapsedTime::at("2024-06-14 12:00:00", "UTC", anchor()).unwrap();
    assert_eq!(et.seconds(), 86400);
}

#[test]
fn test_dmy_with_time() {
    let et = ElapsedTime::at("14-06-2024 12:00:00", "UTC", anchor()).unwrap();
    assert_eq!(et.seconds(), 86400);
}

#[test]
fn test_ymd_date_only_defaults_to_midnight() {
    let et = ElapsedTime::at("2024-06-15", "UTC", anchor()).unwrap();
    assert_eq!(et.seconds(), 12 * 3600);
}

#[test]
fn test_dmy_date_only_defaults_to_midnight() {
    let et = ElapsedTime::at("15-06-2024", "UTC", anchor()).unwrap();
    assert_eq!(et.seconds(), 12 * 3600);
}

#[test]
fn test_both_layouts_agree() {
    let ymd = ElapsedTime::at("2024-02-01", "UTC", anchor()).unwrap();
    let dmy = ElapsedTime::at("01-02-2024", "UTC", anchor()).unwrap();
    assert_eq!(ymd.seconds(), dmy.seconds());
}

#[test]
fn test_not_a_date_fails() {
    let err = ElapsedTime::at("not-a-date", "UTC", anchor()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));
}

#[test]
fn test_empty_string_fails() {
    let err = ElapsedTime::at("", "UTC", anchor()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));
}

#[test]
fn test_month_thirteen_fails() {
    let err = ElapsedTime::at("2024-13-01", "UTC", anchor()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));
}

#[test]
fn test_february_thirtieth_fails() {
    let err = ElapsedTime::at("2024-02-30", "UTC", anchor()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));
}

#[test]
fn test_unknown_timezone_fails() {
    let err = ElapsedTime::at("2024-06-14", "Mars/Olympus", anchor()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidTimeZone { .. }));
}

#[test]
fn test_dst_gap_fails() {
    // Oslo springs forward 02:00 -> 03:00 on 2024-03-31; 02:30 never exists.
    let err = ElapsedTime::at("2024-03-31 02:30:00", "Europe/Oslo", anchor()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidDate { .. }));
}

#[test]
fn test_no_instance_on_failure() {
    // Construction either yields a fully computed value or nothing.
    assert!(ElapsedTime::at("garbage", "UTC", anchor()).is_err());
    assert!(ElapsedTime::at("2024-06-14", "garbage", anchor()).is_err());
}
