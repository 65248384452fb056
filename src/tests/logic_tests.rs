// src/tests/logic_tests.rs

use chrono::{TimeZone, Utc};

use crate::domain::logic::{format_event_time, initial_expanded};

#[test]
fn canceled_entries_start_collapsed() {
    assert!(!initial_expanded(true));
    assert!(initial_expanded(false));
}

#[test]
fn event_time_uses_the_long_format() {
    let time = Utc.with_ymd_and_hms(2025, 9, 1, 14, 3, 22).unwrap();
    assert_eq!(format_event_time(&time), "September 1st 2025, 14:03:22");
}

#[test]
fn event_time_hours_are_not_zero_padded() {
    let time = Utc.with_ymd_and_hms(2025, 12, 25, 9, 5, 0).unwrap();
    assert_eq!(format_event_time(&time), "December 25th 2025, 9:05:00");
}

#[test]
fn ordinal_days_cover_the_teens() {
    for (day, expected) in [
        (1, "March 1st"),
        (2, "March 2nd"),
        (3, "March 3rd"),
        (4, "March 4th"),
        (11, "March 11th"),
        (12, "March 12th"),
        (13, "March 13th"),
        (21, "March 21st"),
        (22, "March 22nd"),
        (23, "March 23rd"),
        (31, "March 31st"),
    ] {
        let time = Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap();
        assert!(
            format_event_time(&time).starts_with(expected),
            "day {day} formatted as {}",
            format_event_time(&time)
        );
    }
}
