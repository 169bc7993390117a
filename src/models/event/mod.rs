// Event module
// Descriptor capability set consumed by the timeline layout

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::error::TimelineError;

/// A validated time interval on the display calendar's wall clock.
///
/// Zoned instants are converted to local wall-clock time before they reach
/// the timeline; see [`TimeInterval::from_zoned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = TimelineError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        TimeInterval::new(raw.start, raw.end)
    }
}

impl TimeInterval {
    /// Create an interval, rejecting `end <= start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TimelineError> {
        if end <= start {
            return Err(TimelineError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build an interval from zoned instants using their local wall clock.
    pub fn from_zoned<Tz: TimeZone>(
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Self, TimelineError> {
        Self::new(start.naive_local(), end.naive_local())
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Strict open-interval overlap: intervals that merely touch do not collide.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.end > other.start && self.start < other.end
    }
}

/// Fractional horizontal slice of the timeline an event lays out in.
///
/// Events with exactly equal ranges share a lane; any difference, even an
/// overlapping one, puts them in independent lanes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct HorizontalRange {
    lower: f32,
    upper: f32,
}

#[derive(Deserialize)]
struct RawRange {
    lower: f32,
    upper: f32,
}

impl TryFrom<RawRange> for HorizontalRange {
    type Error = TimelineError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        HorizontalRange::new(raw.lower, raw.upper)
    }
}

impl HorizontalRange {
    pub const FULL: HorizontalRange = HorizontalRange {
        lower: 0.0,
        upper: 1.0,
    };

    pub fn new(lower: f32, upper: f32) -> Result<Self, TimelineError> {
        // Written so NaN fails every comparison and is rejected
        if !(lower >= 0.0 && upper <= 1.0 && lower < upper) {
            return Err(TimelineError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f32 {
        self.lower
    }

    pub fn upper(&self) -> f32 {
        self.upper
    }

    pub fn span(&self) -> f32 {
        self.upper - self.lower
    }
}

impl Default for HorizontalRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Capabilities the timeline needs from any event type.
///
/// The layout core only ever talks to this trait, so calendar backends can
/// hand over their own event types without conversion.
pub trait EventDescriptor {
    /// Stable identity, used to key reusable views.
    fn id(&self) -> i64;

    fn interval(&self) -> TimeInterval;

    fn is_all_day(&self) -> bool;

    fn horizontal_range(&self) -> HorizontalRange {
        HorizontalRange::FULL
    }

    fn title(&self) -> &str;

    /// Hex colour (`#RRGGBB` or `#RGB`), if the event has one.
    fn color(&self) -> Option<&str> {
        None
    }

    fn is_editable(&self) -> bool {
        false
    }
}

/// Plain timeline event, the descriptor used by the binary and tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub interval: TimeInterval,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub horizontal_range: HorizontalRange,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub editable: bool,
}

impl Event {
    /// Create a timed, full-width event
    ///
    /// # Examples
    /// ```
    /// use day_timeline::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    /// let start = day.and_hms_opt(9, 0, 0).unwrap();
    /// let end = day.and_hms_opt(10, 0, 0).unwrap();
    /// let event = Event::new(1, "Team Meeting", start, end).unwrap();
    /// assert!(!event.all_day);
    /// ```
    pub fn new(
        id: i64,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, TimelineError> {
        Event::builder()
            .id(id)
            .title(title)
            .interval(TimeInterval::new(start, end)?)
            .build()
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.title.trim().is_empty() {
            return Err(TimelineError::MissingTitle);
        }

        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err(TimelineError::InvalidColor(color.clone()));
            }
        }

        Ok(())
    }
}

impl EventDescriptor for Event {
    fn id(&self) -> i64 {
        self.id
    }

    fn interval(&self) -> TimeInterval {
        self.interval
    }

    fn is_all_day(&self) -> bool {
        self.all_day
    }

    fn horizontal_range(&self) -> HorizontalRange {
        self.horizontal_range
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn is_editable(&self) -> bool {
        self.editable
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: i64,
    title: Option<String>,
    interval: Option<TimeInterval>,
    all_day: bool,
    horizontal_range: HorizontalRange,
    color: Option<String>,
    editable: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn interval(mut self, interval: TimeInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Restrict the event to a fractional slice of the timeline width
    pub fn horizontal_range(mut self, range: HorizontalRange) -> Self {
        self.horizontal_range = range;
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, TimelineError> {
        let title = self.title.ok_or(TimelineError::MissingTitle)?;
        let interval = self.interval.ok_or(TimelineError::MissingInterval)?;

        let event = Event {
            id: self.id,
            title,
            interval,
            all_day: self.all_day,
            horizontal_range: self.horizontal_range,
            color: self.color,
            editable: self.editable,
        };

        event.validate()?;
        Ok(event)
    }
}
