//! Width expansion for one flush group.
//!
//! After column assignment every event in a group has an equal share of the
//! lane. Events whose neighbouring columns are empty for their time span grow
//! rightwards, one step at a time, until the next step would leave the lane
//! or intersect another frame of the group.

use egui::Rect;

use super::collision::frames_intersect;

/// Growth increment in pixels
pub const EXPANSION_STEP: f32 = 1.0;

/// Slack allowed when comparing a grown frame against the lane edge, so
/// accumulated float error on fractional column widths does not block growth.
const EDGE_TOLERANCE: f32 = 1e-3;

/// Grow each frame in place as far as the lane and its neighbours allow.
///
/// Frames are compared by position in the slice, never by value, so two
/// events with identical geometry still block each other. Frames are
/// processed in slice order and later frames see earlier growth.
pub fn expand_group(frames: &mut [Rect], lane_right: f32) {
    for index in 0..frames.len() {
        let mut frame = frames[index];

        loop {
            let mut candidate = frame;
            candidate.set_width(frame.width() + EXPANSION_STEP);

            // At very large widths the step is lost to f32 rounding
            if candidate.width() <= frame.width()
                || !fits_lane(candidate, lane_right)
                || blocked(frames, index, candidate)
            {
                break;
            }
            frame = candidate;
        }

        frames[index] = frame;
    }
}

/// Whether `frame` stays within the lane's right edge
pub fn fits_lane(frame: Rect, lane_right: f32) -> bool {
    frame.max.x <= lane_right + EDGE_TOLERANCE
}

/// Whether `candidate` intersects any frame other than the one at `index`
pub fn blocked(frames: &[Rect], index: usize, candidate: Rect) -> bool {
    frames
        .iter()
        .enumerate()
        .any(|(other, &frame)| other != index && frames_intersect(candidate, frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn frame(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_min_size(pos2(x, y), vec2(width, height))
    }

    #[test]
    fn test_lone_frame_fills_lane() {
        let mut frames = [frame(0.0, 0.0, 50.0, 60.0)];
        expand_group(&mut frames, 300.0);
        assert_eq!(frames[0].width(), 300.0);
    }

    #[test]
    fn test_blocked_frame_keeps_column_width() {
        let mut frames = [frame(0.0, 0.0, 150.0, 60.0), frame(150.0, 30.0, 150.0, 60.0)];
        expand_group(&mut frames, 300.0);
        assert_eq!(frames[0].width(), 150.0);
        assert_eq!(frames[1].width(), 150.0);
    }

    #[test]
    fn test_frame_reclaims_empty_column() {
        // Column 1 is only occupied early, so the later event in column 0
        // grows across it.
        let mut frames = [
            frame(0.0, 0.0, 100.0, 60.0),
            frame(100.0, 0.0, 100.0, 30.0),
            frame(0.0, 60.0, 100.0, 60.0),
            frame(200.0, 0.0, 100.0, 40.0),
        ];
        expand_group(&mut frames, 300.0);

        assert_eq!(frames[0].width(), 100.0);
        assert_eq!(frames[2].width(), 300.0);
        assert_eq!(frames[3].width(), 100.0);
    }

    #[test]
    fn test_identical_frames_block_each_other() {
        let same = frame(0.0, 0.0, 100.0, 60.0);
        let mut frames = [same, same];
        expand_group(&mut frames, 300.0);

        // Identical geometry already intersects, so neither may grow.
        assert_eq!(frames[0].width(), 100.0);
        assert_eq!(frames[1].width(), 100.0);
    }

    #[test]
    fn test_growth_stops_when_step_is_below_precision() {
        // 2^24 + 1 is not representable, so the next step cannot widen the frame
        let start = 16_777_216.0;
        let mut frames = [frame(0.0, 0.0, start, 60.0)];
        expand_group(&mut frames, 3.0e7);
        assert_eq!(frames[0].width(), start);
    }

    #[test]
    fn test_fractional_columns_reach_lane_edge() {
        let width = 300.0 / 7.0;
        let mut frames = [frame(6.0 * width, 0.0, width, 60.0)];
        expand_group(&mut frames, 300.0);
        assert!(fits_lane(frames[0], 300.0));
        assert!(frames[0].max.x > 300.0 - EXPANSION_STEP);
    }
}
