// egui painting for the day timeline

pub mod theme;
pub mod views;
