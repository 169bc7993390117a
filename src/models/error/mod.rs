// Error module
// Contract violations rejected when timeline inputs are constructed

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised while building timeline inputs.
///
/// Layout itself never fails; these are reported when an interval, a
/// horizontal range or a style is constructed from untrusted data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("Event end time {end} must be after start time {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Horizontal range {lower}..{upper} must satisfy 0 <= lower < upper <= 1")]
    InvalidRange { lower: f32, upper: f32 },

    #[error("Invalid timeline style: {0}")]
    InvalidStyle(String),

    #[error("Event title is required")]
    MissingTitle,

    #[error("Event interval is required")]
    MissingInterval,

    #[error("Color must be in hex format (#RRGGBB or #RGB), got {0:?}")]
    InvalidColor(String),
}
