// Date utility functions

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;

pub fn is_same_day(instant: NaiveDateTime, day: NaiveDate) -> bool {
    instant.date() == day
}

pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Calendar-day offset of `instant` relative to `day`: -1, 0 or +1.
///
/// Only the direction matters, events crossing midnight land on the adjacent
/// day and anything further away is treated the same.
pub fn day_offset(instant: NaiveDateTime, day: NaiveDate) -> i32 {
    match instant.date().cmp(&day) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_day_offset() {
        let prev = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let next = NaiveDate::from_ymd_opt(2025, 3, 11)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        let far = NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();

        assert_eq!(day_offset(prev, day()), -1);
        assert_eq!(day_offset(start_of_day(day()), day()), 0);
        assert_eq!(day_offset(next, day()), 1);
        assert_eq!(day_offset(far, day()), 1);
    }

    #[test]
    fn test_is_same_day() {
        assert!(is_same_day(start_of_day(day()), day()));
        assert!(!is_same_day(start_of_day(day().succ_opt().unwrap()), day()));
    }
}
