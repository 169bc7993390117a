//! Time grid rendering for the day timeline.
//!
//! Paints hour lines, half-hour lines, hour labels in the leading inset and
//! the current time indicator. Positions come from [`TimelineGeometry`] so
//! the grid always lines up with laid-out event frames.

use chrono::{NaiveDate, NaiveDateTime};
use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use super::palette::TimelinePalette;
use crate::models::settings::TimelineStyle;
use crate::services::layout::TimelineGeometry;

/// Draw the current time indicator line across the event area.
pub fn draw_current_time_indicator(
    painter: &Painter,
    origin: Pos2,
    width: f32,
    style: &TimelineStyle,
    day: NaiveDate,
    now: NaiveDateTime,
    palette: &TimelinePalette,
) -> bool {
    let geometry = TimelineGeometry::from_style(style);
    let Some(y) = geometry.current_time_y(now, day) else {
        return false;
    };

    let y_position = origin.y + y;
    let (x_start, x_end) = if style.right_to_left {
        (origin.x, origin.x + width - style.leading_inset)
    } else {
        (origin.x + style.leading_inset, origin.x + width)
    };
    let dot_x = if style.right_to_left { x_end + 4.0 } else { x_start - 4.0 };

    painter.circle_filled(Pos2::new(dot_x, y_position), 3.0, palette.now_indicator);
    painter.line_segment(
        [Pos2::new(x_start, y_position), Pos2::new(x_end, y_position)],
        Stroke::new(2.0, palette.now_indicator),
    );
    true
}

/// Render the 24-hour grid for `day` with its top-left corner at `origin`.
pub fn render_time_grid(
    painter: &Painter,
    origin: Pos2,
    width: f32,
    style: &TimelineStyle,
    day: NaiveDate,
    now: NaiveDateTime,
    palette: &TimelinePalette,
) {
    let geometry = TimelineGeometry::from_style(style);
    let grid_rect = Rect::from_min_size(origin, Vec2::new(width, geometry.full_height()));
    painter.rect_filled(grid_rect, 0.0, palette.background);

    let (line_start, line_end, label_x, label_align) = if style.right_to_left {
        (
            origin.x,
            origin.x + width - style.leading_inset,
            origin.x + width - 5.0,
            Align2::RIGHT_CENTER,
        )
    } else {
        (
            origin.x + style.leading_inset,
            origin.x + width,
            origin.x + 5.0,
            Align2::LEFT_CENTER,
        )
    };

    for mark in geometry.hour_marks(style.time_format) {
        let y = origin.y + mark.y;
        painter.line_segment(
            [Pos2::new(line_start, y), Pos2::new(line_end, y)],
            Stroke::new(1.0, palette.hour_line),
        );

        if mark.hour < 24 {
            let half = y + geometry.vertical_diff / 2.0;
            painter.line_segment(
                [Pos2::new(line_start, half), Pos2::new(line_end, half)],
                Stroke::new(0.5, palette.half_hour_line),
            );
        }

        painter.text(
            Pos2::new(label_x, y),
            label_align,
            mark.label,
            FontId::proportional(11.0),
            palette.hour_text,
        );
    }

    draw_current_time_indicator(painter, origin, width, style, day, now, palette);
}
