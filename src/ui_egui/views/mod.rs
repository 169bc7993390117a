//! egui views for the day timeline: weekday header, time grid and event
//! blocks. All of them only read layout results.

pub mod day_event_rendering;
pub mod day_symbols;
pub mod palette;
pub mod time_grid;
pub mod utils;

pub use day_event_rendering::{render_all_day_strip, render_events, EventView, EventViewPool};
pub use day_symbols::{day_symbols, render_day_symbols, DaySymbol};
pub use palette::TimelinePalette;
pub use time_grid::{draw_current_time_indicator, render_time_grid};
