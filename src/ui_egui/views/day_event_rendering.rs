//! Event rendering for the day timeline.
//!
//! Laid-out frames are turned into [`EventView`]s taken from a
//! [`ReusePool`] keyed by event id, so scrolling and relayout reuse the
//! same views (and their title buffers) instead of rebuilding them. Views
//! are read-only snapshots of the layout; nothing here writes frames back.

use std::collections::HashSet;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use super::palette::TimelinePalette;
use super::utils::parse_color;
use crate::models::event::EventDescriptor;
use crate::models::layout::LayoutAttributes;
use crate::services::pool::ReusePool;

/// Accent bar width on the leading edge of an event block
const ACCENT_WIDTH: f32 = 3.0;

/// Shortest block drawn; sub-minute events lay out with zero height
pub const MIN_EVENT_HEIGHT: f32 = 4.0;

/// Reusable visual element for one event
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub event_id: i64,
    pub frame: Rect,
    pub base_color: Color32,
    pub title: String,
    pub editable: bool,
}

impl Default for EventView {
    fn default() -> Self {
        Self {
            event_id: 0,
            frame: Rect::NOTHING,
            base_color: Color32::TRANSPARENT,
            title: String::new(),
            editable: false,
        }
    }
}

impl EventView {
    /// Refresh the view from laid-out attributes, reusing the title buffer.
    pub fn update<E: EventDescriptor>(
        &mut self,
        attributes: &LayoutAttributes<E>,
        palette: &TimelinePalette,
    ) {
        let descriptor = attributes.descriptor();
        self.event_id = descriptor.id();
        self.frame = attributes.frame();
        self.base_color = descriptor
            .color()
            .and_then(parse_color)
            .unwrap_or(palette.event_fallback);
        self.title.clear();
        self.title.push_str(descriptor.title());
        self.editable = descriptor.is_editable();
    }
}

pub type EventViewPool = ReusePool<i64, EventView>;

/// Bring the pool in line with `attributes`: views for vanished events go
/// back to the free list, every current event gets an up-to-date view.
pub fn sync_event_views<E: EventDescriptor>(
    pool: &mut EventViewPool,
    attributes: &[LayoutAttributes<E>],
    palette: &TimelinePalette,
) {
    debug_assert!(
        unique_ids(attributes),
        "event ids must be unique within one layout"
    );

    pool.retain(|id| attributes.iter().any(|a| a.descriptor().id() == *id));

    for attribute in attributes {
        pool.acquire(attribute.descriptor().id(), EventView::default)
            .update(attribute, palette);
    }
}

fn unique_ids<E: EventDescriptor>(attributes: &[LayoutAttributes<E>]) -> bool {
    let mut seen = HashSet::with_capacity(attributes.len());
    attributes.iter().all(|a| seen.insert(a.descriptor().id()))
}

/// Paint one event block with its frame offset by `origin`.
///
/// Frames shorter than [`MIN_EVENT_HEIGHT`] are drawn at that height.
pub fn paint_event_view(painter: &Painter, origin: Pos2, view: &EventView, palette: &TimelinePalette) {
    let mut rect = view.frame.translate(origin.to_vec2());
    if !rect.is_finite() || rect.width() <= 0.0 {
        return;
    }
    if rect.height() < MIN_EVENT_HEIGHT {
        rect.set_height(MIN_EVENT_HEIGHT);
    }

    painter.rect_filled(rect, 2.0, palette.event_fill(view.base_color));

    let bar_rect = Rect::from_min_size(rect.min, Vec2::new(ACCENT_WIDTH.min(rect.width()), rect.height()));
    painter.rect_filled(bar_rect, 0.0, view.base_color);

    let text_left = bar_rect.right() + 4.0;
    let wrap_width = (rect.right() - text_left - 2.0).max(0.0);
    if wrap_width <= 0.0 || view.title.is_empty() {
        return;
    }

    let galley = painter.layout(
        view.title.clone(),
        FontId::proportional(12.0),
        palette.event_text,
        wrap_width,
    );
    painter
        .with_clip_rect(rect)
        .galley(Pos2::new(text_left, rect.top() + 2.0), galley, palette.event_text);
}

/// Sync the pool with `attributes` and paint every event, in layout order.
///
/// Views are keyed by event id, so ids must be unique within `attributes`.
pub fn render_events<E: EventDescriptor>(
    painter: &Painter,
    origin: Pos2,
    pool: &mut EventViewPool,
    attributes: &[LayoutAttributes<E>],
    palette: &TimelinePalette,
) {
    sync_event_views(pool, attributes, palette);

    for attribute in attributes {
        if let Some(view) = pool.get(&attribute.descriptor().id()) {
            paint_event_view(painter, origin, view, palette);
        }
    }
}

/// Paint the all-day strip rows and a "+N" badge for hidden rows.
///
/// Views for hidden rows are released, so give the strip its own pool
/// rather than sharing the timed events' one.
pub fn render_all_day_strip<E: EventDescriptor>(
    painter: &Painter,
    origin: Pos2,
    pool: &mut EventViewPool,
    attributes: &[LayoutAttributes<E>],
    visible_rows: usize,
    palette: &TimelinePalette,
) {
    let visible = &attributes[..visible_rows.min(attributes.len())];
    render_events(painter, origin, pool, visible, palette);

    let hidden = attributes.len() - visible.len();
    if let Some(last) = visible.last().filter(|_| hidden > 0) {
        let frame = last.frame().translate(origin.to_vec2());
        painter.text(
            Pos2::new(frame.right() - 4.0, frame.center().y),
            Align2::RIGHT_CENTER,
            format!("+{}", hidden),
            FontId::proportional(11.0),
            palette.event_text,
        );
    }
}
