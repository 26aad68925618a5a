//! Zone hit testing for shells that do their own layout.

use crate::board::ZoneId;
use kurbo::{Point, Rect};

/// Screen rectangles of the zones for the current frame.
#[derive(Debug, Clone, Default)]
pub struct ZoneLayout {
    rects: Vec<(ZoneId, Rect)>,
}

impl ZoneLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all rectangles (call before laying out a new frame).
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Record where a zone was drawn.
    pub fn insert(&mut self, zone: ZoneId, rect: Rect) {
        if let Some(entry) = self.rects.iter_mut().find(|(id, _)| *id == zone) {
            entry.1 = rect;
        } else {
            self.rects.push((zone, rect));
        }
    }

    pub fn rect(&self, zone: ZoneId) -> Option<Rect> {
        self.rects
            .iter()
            .find(|(id, _)| *id == zone)
            .map(|(_, rect)| *rect)
    }

    /// Zone containing a point. Later insertions are on top.
    pub fn zone_at(&self, point: Point) -> Option<ZoneId> {
        self.rects
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(point))
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
