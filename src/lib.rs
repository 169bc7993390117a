// Day Timeline Library
// Event layout for a day-view calendar timeline, plus egui painting

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use models::event::{Event, EventDescriptor, HorizontalRange, TimeInterval};
pub use models::layout::LayoutAttributes;
pub use models::settings::TimelineStyle;
pub use services::layout::{TimelineGeometry, TimelineLayout};
