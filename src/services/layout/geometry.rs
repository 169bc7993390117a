//! Conversion between wall-clock instants and vertical timeline offsets.
//!
//! The timeline is a 24-hour column: `vertical_inset` pixels of padding, then
//! `vertical_diff` pixels per hour. Instants on the previous or next calendar
//! day map above or below the visible day so midnight-crossing events keep a
//! continuous frame.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::settings::{TimeFormat, TimelineStyle};
use crate::utils::date::{day_offset, start_of_day};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// One hour line of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct HourMark {
    pub hour: u32,
    pub y: f32,
    pub label: String,
}

/// Time/pixel mapping for a given vertical scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGeometry {
    pub vertical_inset: f32,
    pub vertical_diff: f32,
    pub split_minute_interval: u32,
}

impl TimelineGeometry {
    pub fn from_style(style: &TimelineStyle) -> Self {
        Self {
            vertical_inset: style.vertical_inset,
            vertical_diff: style.vertical_diff,
            split_minute_interval: style.split_minute_interval,
        }
    }

    /// Total height of the grid including both insets
    pub fn full_height(&self) -> f32 {
        self.vertical_inset * 2.0 + 24.0 * self.vertical_diff
    }

    /// Vertical offset of `instant` on the timeline for `day`.
    pub fn time_to_y(&self, instant: NaiveDateTime, day: NaiveDate) -> f32 {
        let offset = day_offset(instant, day) as f32;
        let hour = instant.hour() as f32;
        let minute = instant.minute() as f32;

        self.vertical_inset
            + hour * self.vertical_diff
            + minute * self.vertical_diff / 60.0
            + offset * 24.0 * self.vertical_diff
    }

    /// Instant at vertical offset `y`, quantised to whole minutes.
    ///
    /// Offsets above or below the day resolve to the adjacent day, never
    /// further.
    pub fn y_to_time(&self, y: f32, day: NaiveDate) -> NaiveDateTime {
        let minutes = ((y - self.vertical_inset) / self.vertical_diff * 60.0).round();
        // `as` saturates NaN to 0
        let minutes = (minutes as i64).clamp(-MINUTES_PER_DAY, 2 * MINUTES_PER_DAY - 1);
        start_of_day(day) + Duration::minutes(minutes)
    }

    /// Instant at `y` snapped to the nearest split-minute boundary within `day`.
    pub fn nearest_slot(&self, y: f32, day: NaiveDate) -> NaiveDateTime {
        let split = i64::from(self.split_minute_interval.max(1));
        let minutes = (self.y_to_time(y, day) - start_of_day(day)).num_minutes();
        let snapped = ((minutes as f64 / split as f64).round() as i64 * split)
            .clamp(0, MINUTES_PER_DAY);
        start_of_day(day) + Duration::minutes(snapped)
    }

    /// Hour lines 0 through 24 with their labels
    pub fn hour_marks(&self, format: TimeFormat) -> Vec<HourMark> {
        (0..=24u32)
            .map(|hour| HourMark {
                hour,
                y: self.vertical_inset + hour as f32 * self.vertical_diff,
                label: hour_label(hour, format),
            })
            .collect()
    }

    /// Position of the current-time indicator, if `now` falls on `day`.
    pub fn current_time_y(&self, now: NaiveDateTime, day: NaiveDate) -> Option<f32> {
        (now.date() == day).then(|| self.time_to_y(now, day))
    }
}

fn hour_label(hour: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFourHour => format!("{:02}:00", hour % 24),
        TimeFormat::TwelveHour => {
            let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{} {}", display, suffix)
        }
    }
}
