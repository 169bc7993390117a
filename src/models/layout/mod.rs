// Layout module
// Per-event frame records written by the layout pass and read by renderers

use egui::Rect;

use crate::models::event::EventDescriptor;

/// One event paired with the frame the timeline computed for it.
///
/// Frames are only written by [`crate::services::layout::TimelineLayout`]
/// during a pass; renderers get shared references and read them until the
/// next pass replaces the whole set.
#[derive(Debug, Clone)]
pub struct LayoutAttributes<E> {
    descriptor: E,
    frame: Rect,
}

impl<E: EventDescriptor> LayoutAttributes<E> {
    pub fn new(descriptor: E) -> Self {
        Self {
            descriptor,
            frame: Rect::NOTHING,
        }
    }

    pub fn descriptor(&self) -> &E {
        &self.descriptor
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn into_descriptor(self) -> E {
        self.descriptor
    }
}
