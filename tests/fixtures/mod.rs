// Test fixtures - reusable test data
// Provides consistent days, events and styles across integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use day_timeline::models::event::{Event, HorizontalRange};
use day_timeline::models::settings::TimelineStyle;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Jan 15, 2025
    pub fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        reference_day().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample styles for testing
pub mod styles {
    use super::*;

    pub const LEADING_INSET: f32 = 50.0;
    pub const LANE_WIDTH: f32 = 300.0;

    /// 60 px per hour, no vertical inset, no gap
    pub fn plain() -> TimelineStyle {
        TimelineStyle {
            vertical_inset: 0.0,
            vertical_diff: 60.0,
            leading_inset: LEADING_INSET,
            event_gap: 0.0,
            ..Default::default()
        }
    }

    pub fn with_gap(gap: f32) -> TimelineStyle {
        TimelineStyle {
            event_gap: gap,
            ..plain()
        }
    }

    /// Container width giving a full lane of `LANE_WIDTH`
    pub fn bounds_width() -> f32 {
        LEADING_INSET + LANE_WIDTH
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn timed(id: i64, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            format!("Event {}", id),
            dates::at(start.0, start.1),
            dates::at(end.0, end.1),
        )
        .unwrap()
    }

    pub fn in_lane(mut event: Event, lower: f32, upper: f32) -> Event {
        event.horizontal_range = HorizontalRange::new(lower, upper).unwrap();
        event
    }

    pub fn all_day(id: i64) -> Event {
        let mut event = timed(id, (0, 0), (23, 59));
        event.all_day = true;
        event.title = format!("All day {}", id);
        event
    }
}
