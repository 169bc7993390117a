//! Day timeline layout.
//!
//! [`TimelineLayout`] owns the layout attributes for one day. Every call to
//! [`TimelineLayout::set_events`] replaces the whole set and every
//! [`TimelineLayout::relayout`] recomputes all frames from scratch:
//!
//! 1. all-day events are stacked into the [`AllDayStrip`],
//! 2. timed events are partitioned into lanes by exact horizontal range,
//! 3. each lane is split into flush groups of columns ([`columns`]),
//! 4. each group's frames grow into free space ([`expansion`]),
//! 5. the event gap is applied and, for right-to-left layouts, frames are
//!    mirrored across the container.

pub mod all_day;
pub mod collision;
pub mod columns;
pub mod expansion;
pub mod geometry;

use chrono::NaiveDate;
use egui::{pos2, vec2, Rect};

use crate::models::event::{EventDescriptor, HorizontalRange, TimeInterval};
use crate::models::layout::LayoutAttributes;
use crate::models::settings::TimelineStyle;

pub use all_day::{arrange_all_day, AllDayStrip};
pub use collision::overlaps;
pub use columns::{assign_columns, FlushGroup};
pub use expansion::expand_group;
pub use geometry::{HourMark, TimelineGeometry};

/// Events sharing one exact horizontal range
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub range: HorizontalRange,
    /// Indices into the attribute slice the lanes were built from
    pub members: Vec<usize>,
}

/// Counters from one layout pass, mostly for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub lanes: usize,
    pub flush_groups: usize,
    pub max_columns: usize,
}

/// Layout attributes for one day and the style they were computed with.
pub struct TimelineLayout<E> {
    style: TimelineStyle,
    day: NaiveDate,
    bounds_width: f32,
    attributes: Vec<LayoutAttributes<E>>,
    all_day_count: usize,
    all_day_strip: AllDayStrip,
}

impl<E: EventDescriptor> TimelineLayout<E> {
    pub fn new(style: TimelineStyle, day: NaiveDate) -> Self {
        Self {
            style,
            day,
            bounds_width: 0.0,
            attributes: Vec::new(),
            all_day_count: 0,
            all_day_strip: AllDayStrip::default(),
        }
    }

    /// Replace the event set and lay it out at the current width.
    ///
    /// All-day events keep their relative order and come first; timed events
    /// follow in the order supplied.
    pub fn set_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = E>,
    {
        let (all_day, regular): (Vec<E>, Vec<E>) =
            events.into_iter().partition(|event| event.is_all_day());

        self.all_day_count = all_day.len();
        self.attributes = all_day
            .into_iter()
            .chain(regular)
            .map(LayoutAttributes::new)
            .collect();

        self.relayout(self.bounds_width);
    }

    pub fn set_day(&mut self, day: NaiveDate) {
        self.day = day;
        self.relayout(self.bounds_width);
    }

    pub fn set_style(&mut self, style: TimelineStyle) {
        self.style = style;
        self.relayout(self.bounds_width);
    }

    /// Recompute every frame for a container `bounds_width` pixels wide.
    ///
    /// A non-finite width is laid out as zero.
    pub fn relayout(&mut self, bounds_width: f32) {
        let bounds_width = if bounds_width.is_finite() {
            bounds_width
        } else {
            log::warn!("Ignoring non-finite timeline width {}", bounds_width);
            0.0
        };
        self.bounds_width = bounds_width;

        let (all_day, regular) = self.attributes.split_at_mut(self.all_day_count);
        self.all_day_strip = arrange_all_day(all_day, &self.style, bounds_width);
        let stats = layout_regular(regular, &self.style, self.day, bounds_width);

        if self.style.right_to_left {
            for attribute in self.attributes.iter_mut() {
                attribute.set_frame(mirror(attribute.frame(), bounds_width));
            }
        }

        log::debug!(
            "Timeline layout for {}: {} all-day, {} timed in {} lanes, {} flush groups, up to {} columns",
            self.day,
            self.all_day_count,
            self.attributes.len() - self.all_day_count,
            stats.lanes,
            stats.flush_groups,
            stats.max_columns
        );
    }

    /// All attributes, all-day events first
    pub fn attributes(&self) -> &[LayoutAttributes<E>] {
        &self.attributes
    }

    pub fn all_day_attributes(&self) -> &[LayoutAttributes<E>] {
        &self.attributes[..self.all_day_count]
    }

    pub fn regular_attributes(&self) -> &[LayoutAttributes<E>] {
        &self.attributes[self.all_day_count..]
    }

    pub fn all_day_strip(&self) -> AllDayStrip {
        self.all_day_strip
    }

    pub fn geometry(&self) -> TimelineGeometry {
        TimelineGeometry::from_style(&self.style)
    }

    pub fn style(&self) -> &TimelineStyle {
        &self.style
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn bounds_width(&self) -> f32 {
        self.bounds_width
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Group timed events by exactly equal horizontal range, in first-seen order.
///
/// Overlapping but unequal ranges form separate lanes and may draw on top of
/// each other.
pub fn partition_lanes<E: EventDescriptor>(attributes: &[LayoutAttributes<E>]) -> Vec<Lane> {
    let mut lanes: Vec<Lane> = Vec::new();

    for (index, attribute) in attributes.iter().enumerate() {
        let range = attribute.descriptor().horizontal_range();
        match lanes.iter_mut().find(|lane| lane.range == range) {
            Some(lane) => lane.members.push(index),
            None => lanes.push(Lane {
                range,
                members: vec![index],
            }),
        }
    }

    lanes
}

/// Lay out timed events lane by lane and write their frames.
///
/// Frames are in left-to-right container coordinates with the event gap
/// applied; mirroring is left to the caller.
pub fn layout_regular<E: EventDescriptor>(
    attributes: &mut [LayoutAttributes<E>],
    style: &TimelineStyle,
    day: NaiveDate,
    bounds_width: f32,
) -> LayoutStats {
    let geometry = TimelineGeometry::from_style(style);
    let calendar_width = (bounds_width - style.leading_inset).max(0.0);
    let lanes = partition_lanes(attributes);
    let mut stats = LayoutStats {
        lanes: lanes.len(),
        ..Default::default()
    };

    for lane in &lanes {
        let lane_left = style.leading_inset + lane.range.lower() * calendar_width;
        let lane_width = lane.range.span() * calendar_width;
        let lane_right = lane_left + lane_width;

        let intervals: Vec<TimeInterval> = lane
            .members
            .iter()
            .map(|&index| attributes[index].descriptor().interval())
            .collect();

        for group in assign_columns(&intervals) {
            stats.flush_groups += 1;
            stats.max_columns = stats.max_columns.max(group.column_count());

            let column_count = group.column_count();
            let column_width = lane_width / column_count as f32;
            // Neighbouring columns share one boundary value so they touch exactly
            let boundary = |column: usize| {
                if column == column_count {
                    lane_right
                } else {
                    lane_left + column as f32 * column_width
                }
            };
            let placements: Vec<(usize, usize)> = group.placements().collect();

            let mut frames: Vec<Rect> = placements
                .iter()
                .map(|&(column, member)| {
                    let interval = &intervals[member];
                    let top = geometry.time_to_y(interval.start(), day);
                    let bottom = geometry.time_to_y(interval.end(), day).max(top);
                    Rect::from_min_max(
                        pos2(boundary(column), top),
                        pos2(boundary(column + 1), bottom),
                    )
                })
                .collect();

            expand_group(&mut frames, lane_right);

            for (&(_, member), frame) in placements.iter().zip(frames) {
                attributes[lane.members[member]].set_frame(apply_gap(frame, style.event_gap));
            }
        }
    }

    stats
}

fn apply_gap(frame: Rect, gap: f32) -> Rect {
    if gap <= 0.0 {
        return frame;
    }
    Rect::from_min_size(
        frame.min,
        vec2((frame.width() - gap).max(0.0), (frame.height() - gap).max(0.0)),
    )
}

/// Mirror a frame horizontally within a container `container_width` wide.
pub fn mirror(frame: Rect, container_width: f32) -> Rect {
    Rect::from_min_size(
        pos2(container_width - frame.min.x - frame.width(), frame.min.y),
        frame.size(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn style() -> TimelineStyle {
        TimelineStyle {
            vertical_inset: 0.0,
            vertical_diff: 60.0,
            leading_inset: 50.0,
            event_gap: 0.0,
            ..Default::default()
        }
    }

    fn timed(id: i64, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            format!("Event {}", id),
            day().and_hms_opt(start.0, start.1, 0).unwrap(),
            day().and_hms_opt(end.0, end.1, 0).unwrap(),
        )
        .unwrap()
    }

    fn in_range(mut event: Event, lower: f32, upper: f32) -> Event {
        event.horizontal_range = HorizontalRange::new(lower, upper).unwrap();
        event
    }

    fn layout(events: Vec<Event>, style: TimelineStyle) -> TimelineLayout<Event> {
        let mut layout = TimelineLayout::new(style, day());
        layout.set_events(events);
        layout.relayout(350.0);
        layout
    }

    #[test]
    fn test_empty_layout() {
        let layout = layout(Vec::new(), style());
        assert!(layout.is_empty());
        assert!(layout.all_day_strip().is_empty());
    }

    #[test]
    fn test_all_day_events_come_first() {
        let mut holiday = timed(3, (0, 0), (23, 0));
        holiday.all_day = true;
        let layout = layout(vec![timed(1, (9, 0), (10, 0)), holiday, timed(2, (11, 0), (12, 0))], style());

        let ids: Vec<i64> = layout.attributes().iter().map(|a| a.descriptor().id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(layout.all_day_attributes().len(), 1);
        assert_eq!(layout.regular_attributes().len(), 2);
        assert_eq!(layout.all_day_strip().rows, 1);
    }

    #[test]
    fn test_partition_lanes_by_exact_range() {
        let attributes: Vec<_> = vec![
            in_range(timed(1, (9, 0), (10, 0)), 0.0, 0.5),
            in_range(timed(2, (9, 0), (10, 0)), 0.5, 1.0),
            in_range(timed(3, (9, 0), (10, 0)), 0.0, 0.5),
            in_range(timed(4, (9, 0), (10, 0)), 0.0, 0.6),
        ]
        .into_iter()
        .map(LayoutAttributes::new)
        .collect();

        let lanes = partition_lanes(&attributes);
        assert_eq!(lanes.len(), 3);
        assert_eq!(lanes[0].members, vec![0, 2]);
        assert_eq!(lanes[1].members, vec![1]);
        assert_eq!(lanes[2].members, vec![3]);
    }

    #[test]
    fn test_lanes_split_width() {
        let layout = layout(
            vec![
                in_range(timed(1, (9, 0), (10, 0)), 0.0, 0.5),
                in_range(timed(2, (9, 0), (10, 0)), 0.5, 1.0),
            ],
            style(),
        );
        let frames: Vec<Rect> = layout.regular_attributes().iter().map(|a| a.frame()).collect();

        assert_eq!(frames[0], Rect::from_min_size(pos2(50.0, 540.0), vec2(150.0, 60.0)));
        assert_eq!(frames[1], Rect::from_min_size(pos2(200.0, 540.0), vec2(150.0, 60.0)));
    }

    #[test]
    fn test_event_gap_shrinks_frames() {
        let layout = layout(
            vec![timed(1, (9, 0), (10, 0)), timed(2, (9, 30), (10, 30))],
            TimelineStyle {
                event_gap: 2.0,
                ..style()
            },
        );
        let frames: Vec<Rect> = layout.regular_attributes().iter().map(|a| a.frame()).collect();

        assert_eq!(frames[0], Rect::from_min_size(pos2(50.0, 540.0), vec2(148.0, 58.0)));
        assert_eq!(frames[1], Rect::from_min_size(pos2(200.0, 570.0), vec2(148.0, 58.0)));
    }

    #[test]
    fn test_right_to_left_mirrors_frames() {
        let layout = layout(
            vec![timed(1, (9, 0), (10, 0)), timed(2, (9, 30), (10, 30))],
            TimelineStyle {
                right_to_left: true,
                ..style()
            },
        );
        let frames: Vec<Rect> = layout.regular_attributes().iter().map(|a| a.frame()).collect();

        assert_eq!(frames[0].min.x, 150.0);
        assert_eq!(frames[1].min.x, 0.0);
        assert_eq!(frames[0].width(), 150.0);
    }

    #[test]
    fn test_relayout_is_idempotent() {
        let mut layout = layout(
            vec![
                timed(1, (9, 0), (10, 0)),
                timed(2, (9, 30), (11, 0)),
                timed(3, (10, 15), (10, 45)),
            ],
            style(),
        );
        let before: Vec<Rect> = layout.attributes().iter().map(|a| a.frame()).collect();
        layout.relayout(350.0);
        let after: Vec<Rect> = layout.attributes().iter().map(|a| a.frame()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_day_moves_frames() {
        let mut layout = layout(vec![timed(1, (9, 0), (10, 0))], style());
        layout.set_day(day().pred_opt().unwrap());
        assert_eq!(layout.regular_attributes()[0].frame().min.y, 24.0 * 60.0 + 540.0);
    }

    #[test]
    fn test_midnight_crossing_event_extends_below_day() {
        let event = Event::new(
            1,
            "Late",
            day().and_hms_opt(23, 0, 0).unwrap(),
            day().succ_opt().unwrap().and_hms_opt(1, 0, 0).unwrap(),
        )
        .unwrap();
        let layout = layout(vec![event], style());
        let frame = layout.regular_attributes()[0].frame();
        assert_eq!(frame.min.y, 23.0 * 60.0);
        assert_eq!(frame.height(), 120.0);
    }

    #[test]
    fn test_non_finite_width_lays_out_as_zero() {
        for width in [f32::INFINITY, f32::NAN] {
            let mut layout = layout(vec![timed(1, (9, 0), (10, 0))], style());
            layout.relayout(width);

            let frame = layout.regular_attributes()[0].frame();
            assert_eq!(layout.bounds_width(), 0.0);
            assert!(frame.min.x.is_finite() && frame.max.x.is_finite());
            assert_eq!(frame.min.y, 540.0);
        }
    }

    #[test]
    fn test_huge_width_terminates() {
        let mut layout = layout(vec![timed(1, (9, 0), (10, 0))], style());
        layout.relayout(3.0e7);

        let frame = layout.regular_attributes()[0].frame();
        assert_eq!(frame.min.x, 50.0);
        assert_eq!(frame.max.x, 3.0e7);
    }

    #[test]
    fn test_mirror() {
        let frame = Rect::from_min_size(pos2(60.0, 10.0), vec2(100.0, 20.0));
        assert_eq!(mirror(frame, 300.0).min.x, 140.0);
        assert_eq!(mirror(mirror(frame, 300.0), 300.0), frame);
    }
}
