//! SortDrop Core Library
//!
//! Platform-agnostic model and interaction state machine for the drag-and-drop
//! sorting exercise. Shells (DOM, egui) feed [`DragInput`] events into a
//! [`SortingExercise`] and apply the [`Effect`]s it returns.

pub mod board;
pub mod config;
pub mod content;
pub mod exercise;
pub mod input;
pub mod layout;
pub mod timer;
pub mod widget;

pub use board::{Board, Item, ItemId, ItemLocation, PlacementError, Zone, ZoneId};
pub use config::{ConfigError, Rgba, Theme, WidgetConfig};
pub use content::{ContentDescriptor, ContentError, ItemSpec, ZoneSpec};
pub use exercise::{Completion, Effect, SortingExercise};
pub use input::{DragInput, DragModality, DragSession, TouchTracker};
pub use layout::ZoneLayout;
pub use timer::SuccessTimer;
pub use widget::{ItemVisual, VisualManager, ZoneVisual};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::content::{ContentDescriptor, ItemSpec, ZoneSpec};

    /// Three items (fruit, veggie, fruit) and a fruit zone plus a veggie zone.
    pub fn fruit_and_veggies() -> ContentDescriptor {
        ContentDescriptor {
            items: vec![
                ItemSpec::new("fruit", "🍎"),
                ItemSpec::new("veggie", "🥕"),
                ItemSpec::new("fruit", "🍌"),
            ],
            zones: vec![
                ZoneSpec::new("fruit-zone", "🧺", "Fruit", ["fruit"]),
                ZoneSpec::new("veggie-zone", "🥗", "Veggies", ["veggie"]),
            ],
        }
    }

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
