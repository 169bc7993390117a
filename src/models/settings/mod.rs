// Settings module
// Geometry and presentation style for the day timeline

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::error::TimelineError;

/// Hour label format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Style shared by geometry, layout and painting.
///
/// All lengths are logical pixels. Every field has a default so partial TOML
/// files only need to name what they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    /// Padding above hour 0 and below hour 24
    pub vertical_inset: f32,
    /// Pixels per hour
    pub vertical_diff: f32,
    /// Width reserved for hour labels on the leading side
    pub leading_inset: f32,
    /// Subtracted from each event frame's width and height
    pub event_gap: f32,
    /// Snapping granularity used by `nearest_slot`, in minutes
    pub split_minute_interval: u32,
    pub all_day_event_height: f32,
    pub all_day_max_visible_rows: usize,
    pub time_format: TimeFormat,
    pub first_weekday: Weekday,
    pub abbreviated_day_symbols: bool,
    pub right_to_left: bool,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            vertical_inset: 2.0,
            vertical_diff: 45.0,
            leading_inset: 53.0,
            event_gap: 0.0,
            split_minute_interval: 15,
            all_day_event_height: 25.0,
            all_day_max_visible_rows: 2,
            time_format: TimeFormat::TwentyFourHour,
            first_weekday: Weekday::Sun,
            abbreviated_day_symbols: true,
            right_to_left: false,
        }
    }
}

impl TimelineStyle {
    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.vertical_diff.is_nan() || self.vertical_diff <= 0.0 {
            return Err(TimelineError::InvalidStyle(format!(
                "vertical_diff must be positive, got {}",
                self.vertical_diff
            )));
        }

        for (name, value) in [
            ("vertical_inset", self.vertical_inset),
            ("leading_inset", self.leading_inset),
            ("event_gap", self.event_gap),
            ("all_day_event_height", self.all_day_event_height),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(TimelineError::InvalidStyle(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.split_minute_interval == 0 || 60 % self.split_minute_interval != 0 {
            return Err(TimelineError::InvalidStyle(format!(
                "split_minute_interval must divide 60, got {}",
                self.split_minute_interval
            )));
        }

        Ok(())
    }
}
