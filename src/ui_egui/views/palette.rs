use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelinePalette {
    pub background: Color32,
    pub hour_line: Color32,
    pub half_hour_line: Color32,
    pub hour_text: Color32,
    pub now_indicator: Color32,
    pub event_fallback: Color32,
    pub event_text: Color32,
    pub weekday_text: Color32,
    pub weekend_text: Color32,
}

impl TimelinePalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            background: theme.calendar_background,
            hour_line: theme.day_border,
            half_hour_line: with_alpha(theme.day_border, 120),
            hour_text: theme.text_secondary,
            now_indicator: theme.today_border,
            event_fallback: theme.event_default,
            event_text: if theme.is_dark {
                theme.text_primary
            } else {
                blend(theme.text_primary, Color32::BLACK, 0.3)
            },
            weekday_text: theme.text_primary,
            weekend_text: theme.weekend_text,
        }
    }

    /// Background fill for an event block of the given base colour
    pub fn event_fill(&self, base: Color32) -> Color32 {
        with_alpha(blend(base, self.background, 0.35), 230)
    }
}

impl Default for TimelinePalette {
    fn default() -> Self {
        Self::from_theme(&CalendarTheme::default())
    }
}
