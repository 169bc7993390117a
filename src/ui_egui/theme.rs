//! Theme definitions for the timeline
//!
//! Defines the CalendarTheme colours the palettes in `views::palette` are
//! derived from.

use egui::Color32;

/// Colours used by the timeline widgets
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme
    pub is_dark: bool,

    /// Timeline background color
    pub calendar_background: Color32,

    /// Weekend label color in the day symbol strip
    pub weekend_text: Color32,

    /// Hour line color
    pub day_border: Color32,

    /// Accent used for the current time indicator
    pub today_border: Color32,

    /// Primary text color (event titles, weekday labels)
    pub text_primary: Color32,

    /// Secondary text color (hour labels)
    pub text_secondary: Color32,

    /// Fill for events without their own color
    pub event_default: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_text: Color32::from_rgb(150, 150, 150),
            day_border: Color32::from_rgb(220, 220, 220),
            today_border: Color32::from_rgb(255, 100, 100),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            event_default: Color32::from_rgb(100, 150, 200),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            calendar_background: Color32::from_rgb(40, 40, 40),
            weekend_text: Color32::from_rgb(120, 120, 120),
            day_border: Color32::from_rgb(60, 60, 60),
            today_border: Color32::from_rgb(255, 100, 100),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            event_default: Color32::from_rgb(80, 120, 170),
        }
    }
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self::light()
    }
}
