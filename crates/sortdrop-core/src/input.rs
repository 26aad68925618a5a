//! Drag input vocabulary for desktop drag-and-drop and touch.

use crate::board::{ItemId, ZoneId};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Which input modality started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragModality {
    /// HTML5-style drag-and-drop driven by a mouse or pen.
    Pointer,
    /// Touch-start / touch-move / touch-end.
    Touch,
}

/// Input events a shell forwards to the exercise.
///
/// Zone resolution is the shell's job: `TouchMove::over` is the zone
/// containing the element under the touch point, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragInput {
    DragStart {
        item: ItemId,
    },
    DragEnd {
        item: ItemId,
    },
    DragEnter {
        zone: ZoneId,
    },
    DragOver {
        zone: ZoneId,
    },
    DragLeave {
        zone: ZoneId,
    },
    Drop {
        zone: ZoneId,
        /// Type published by the drag source, if the transfer data was readable.
        transfer: Option<String>,
    },
    TouchStart {
        item: ItemId,
        position: Point,
    },
    TouchMove {
        position: Point,
        over: Option<ZoneId>,
    },
    TouchEnd {
        item: ItemId,
    },
    /// The platform aborted the touch. Nothing is placed or reported.
    TouchCancel {
        item: ItemId,
    },
}

impl DragInput {
    /// The modality this event belongs to.
    pub fn modality(&self) -> DragModality {
        match self {
            Self::TouchStart { .. }
            | Self::TouchMove { .. }
            | Self::TouchEnd { .. }
            | Self::TouchCancel { .. } => DragModality::Touch,
            _ => DragModality::Pointer,
        }
    }
}

/// The single in-flight drag of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub item: ItemId,
    pub modality: DragModality,
}

/// Tracks an active touch drag between touch-start and touch-end.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    /// Item the touch started on.
    active: Option<ItemId>,
    /// Where the touch started.
    pub start: Option<Point>,
    /// Most recent touch position.
    pub position: Option<Point>,
    /// Zone under the touch point at the last move.
    last_target: Option<ZoneId>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking a touch on an item.
    pub fn begin(&mut self, item: ItemId, position: Point) {
        self.active = Some(item);
        self.start = Some(position);
        self.position = Some(position);
        self.last_target = None;
    }

    /// Record a move. Returns false when no touch is active.
    pub fn update(&mut self, position: Point, over: Option<ZoneId>) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.position = Some(position);
        self.last_target = over;
        true
    }

    /// Stop tracking, returning the zone recorded by the last move.
    pub fn finish(&mut self) -> Option<ZoneId> {
        let target = self.last_target;
        *self = Self::default();
        target
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_item(&self) -> Option<ItemId> {
        self.active
    }

    pub fn last_target(&self) -> Option<ZoneId> {
        self.last_target
    }

    /// Distance travelled since touch-start.
    pub fn delta(&self) -> Option<Vec2> {
        match (self.start, self.position) {
            (Some(start), Some(position)) => Some(position - start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_tracking() {
        let mut touch = TouchTracker::new();

        touch.begin(ItemId(1), Point::new(10.0, 10.0));
        assert!(touch.is_active());
        assert_eq!(touch.active_item(), Some(ItemId(1)));

        assert!(touch.update(Point::new(40.0, 50.0), Some(ZoneId(0))));
        let delta = touch.delta().unwrap();
        assert!((delta.x - 30.0).abs() < f64::EPSILON);
        assert!((delta.y - 40.0).abs() < f64::EPSILON);

        assert_eq!(touch.finish(), Some(ZoneId(0)));
        assert!(!touch.is_active());
        assert_eq!(touch.start, None);
    }

    #[test]
    fn test_move_without_touch_is_ignored() {
        let mut touch = TouchTracker::new();

        assert!(!touch.update(Point::new(5.0, 5.0), Some(ZoneId(0))));
        assert_eq!(touch.last_target(), None);
    }

    #[test]
    fn test_last_move_decides_target() {
        let mut touch = TouchTracker::new();

        touch.begin(ItemId(0), Point::ZERO);
        touch.update(Point::new(1.0, 1.0), Some(ZoneId(2)));
        touch.update(Point::new(2.0, 2.0), None);

        assert_eq!(touch.finish(), None);
    }

    #[test]
    fn test_release_without_move_has_no_target() {
        let mut touch = TouchTracker::new();

        touch.begin(ItemId(0), Point::new(3.0, 3.0));
        assert_eq!(touch.finish(), None);
    }

    #[test]
    fn test_modality() {
        assert_eq!(DragInput::DragStart { item: ItemId(0) }.modality(), DragModality::Pointer);
        assert_eq!(
            DragInput::TouchMove { position: Point::ZERO, over: None }.modality(),
            DragModality::Touch
        );
        assert_eq!(DragInput::TouchCancel { item: ItemId(0) }.modality(), DragModality::Touch);
    }
}
