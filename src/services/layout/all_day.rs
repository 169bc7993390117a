//! Fixed-height stacking for all-day events.
//!
//! All-day events never enter the timed geometry. They are stacked one per
//! row above the grid, in the order they were supplied.

use egui::{pos2, vec2, Rect};

use crate::models::event::EventDescriptor;
use crate::models::layout::LayoutAttributes;
use crate::models::settings::TimelineStyle;

/// Summary of the all-day strip after arranging its events
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AllDayStrip {
    /// Total number of all-day events
    pub rows: usize,
    /// Rows shown without scrolling
    pub visible_rows: usize,
    /// Events beyond the visible rows
    pub hidden: usize,
    /// Height of the visible part of the strip
    pub height: f32,
}

impl AllDayStrip {
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Assign one full-width row per all-day event.
pub fn arrange_all_day<E: EventDescriptor>(
    attributes: &mut [LayoutAttributes<E>],
    style: &TimelineStyle,
    bounds_width: f32,
) -> AllDayStrip {
    let row_height = style.all_day_event_height;
    let width = (bounds_width - style.leading_inset).max(0.0);

    for (row, attribute) in attributes.iter_mut().enumerate() {
        let frame = Rect::from_min_size(
            pos2(style.leading_inset, row as f32 * row_height),
            vec2(
                (width - style.event_gap).max(0.0),
                (row_height - style.event_gap).max(0.0),
            ),
        );
        attribute.set_frame(frame);
    }

    let rows = attributes.len();
    let visible_rows = rows.min(style.all_day_max_visible_rows);

    AllDayStrip {
        rows,
        visible_rows,
        hidden: rows - visible_rows,
        height: visible_rows as f32 * row_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{Event, TimeInterval};
    use chrono::NaiveDate;

    fn all_day_event(id: i64) -> LayoutAttributes<Event> {
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let interval = TimeInterval::new(
            day.and_hms_opt(0, 0, 0).unwrap(),
            day.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
        )
        .unwrap();
        LayoutAttributes::new(
            Event::builder()
                .id(id)
                .title(format!("Holiday {}", id))
                .interval(interval)
                .all_day(true)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_rows_stack_in_order() {
        let style = TimelineStyle {
            leading_inset: 50.0,
            all_day_event_height: 20.0,
            all_day_max_visible_rows: 2,
            ..Default::default()
        };
        let mut attributes: Vec<_> = (1..=3).map(all_day_event).collect();

        let strip = arrange_all_day(&mut attributes, &style, 350.0);

        assert_eq!(attributes[0].frame().min, pos2(50.0, 0.0));
        assert_eq!(attributes[2].frame().min, pos2(50.0, 40.0));
        assert_eq!(attributes[1].frame().width(), 300.0);
        assert_eq!(
            strip,
            AllDayStrip {
                rows: 3,
                visible_rows: 2,
                hidden: 1,
                height: 40.0
            }
        );
    }

    #[test]
    fn test_empty_strip() {
        let mut attributes: Vec<LayoutAttributes<Event>> = Vec::new();
        let strip = arrange_all_day(&mut attributes, &TimelineStyle::default(), 300.0);
        assert!(strip.is_empty());
        assert_eq!(strip.height, 0.0);
    }
}
