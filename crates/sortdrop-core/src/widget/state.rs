//! Visual state definitions.

use serde::{Deserialize, Serialize};

/// The visual state of a drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoneVisual {
    /// Normal display state.
    #[default]
    Neutral,
    /// A drag or touch is over the zone (scaled up, highlighted).
    Hover,
}

impl ZoneVisual {
    pub fn is_hover(&self) -> bool {
        matches!(self, Self::Hover)
    }
}

/// The visual state of an item still in the tray.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ItemVisual {
    #[default]
    Idle,
    /// Item is being dragged and shown at reduced opacity.
    Dragging { opacity: f32 },
}

impl ItemVisual {
    /// Opacity the item should be rendered with.
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Idle => 1.0,
            Self::Dragging { opacity } => *opacity,
        }
    }
}
