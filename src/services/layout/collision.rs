//! Overlap predicates shared by column assignment and width expansion.

use egui::Rect;

use crate::models::event::TimeInterval;

/// Two intervals collide when they share any open span of time.
///
/// `a.end == b.start` is not a collision.
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.overlaps(b)
}

/// Strict rectangle intersection: frames that only share an edge do not
/// intersect.
pub fn frames_intersect(a: Rect, b: Rect) -> bool {
    a.intersect(b).is_positive()
}
