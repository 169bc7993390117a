//! Weekday header strip shown above the timeline.

use chrono::Weekday;
use egui::{Align2, FontId, Painter, Pos2, Rect, Vec2};

use super::palette::TimelinePalette;

/// One weekday cell of the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySymbol {
    pub weekday: Weekday,
    pub label: String,
    pub is_weekend: bool,
}

fn full_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Seven weekday symbols starting at `first_weekday`, reversed for
/// right-to-left layouts.
pub fn day_symbols(first_weekday: Weekday, abbreviated: bool, right_to_left: bool) -> Vec<DaySymbol> {
    let mut weekday = first_weekday;
    let mut symbols = Vec::with_capacity(7);

    for _ in 0..7 {
        symbols.push(DaySymbol {
            weekday,
            label: if abbreviated {
                weekday.to_string()
            } else {
                full_name(weekday).to_string()
            },
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
        });
        weekday = weekday.succ();
    }

    if right_to_left {
        symbols.reverse();
    }
    symbols
}

/// Paint the symbols into equal-width cells across `rect`.
pub fn render_day_symbols(
    painter: &Painter,
    rect: Rect,
    symbols: &[DaySymbol],
    palette: &TimelinePalette,
) {
    if symbols.is_empty() {
        return;
    }

    let cell_width = rect.width() / symbols.len() as f32;
    for (index, symbol) in symbols.iter().enumerate() {
        let cell = Rect::from_min_size(
            Pos2::new(rect.left() + index as f32 * cell_width, rect.top()),
            Vec2::new(cell_width, rect.height()),
        );
        let color = if symbol.is_weekend {
            palette.weekend_text
        } else {
            palette.weekday_text
        };
        painter.text(
            cell.center(),
            Align2::CENTER_CENTER,
            &symbol.label,
            FontId::proportional(12.0),
            color,
        );
    }
}
