//! egui components for the sorting exercise.
//!
//! - **Board**: [`SortingBoard`], zones row plus item tray, driven by the core state machine
//! - **Interaction**: translation of egui drag/touch observations into drag input
//! - **Colors**: theme conversion to egui colors

pub mod board;
pub mod colors;
pub mod interaction;

pub use board::SortingBoard;
pub use colors::{to_color32, ZonePaint};
pub use interaction::{FrameObservation, PointerTranslator};

/// Standard sizing constants used across the board.
pub mod sizing {
    /// Drop zone width
    pub const ZONE_WIDTH: f32 = 180.0;
    /// Drop zone height
    pub const ZONE_HEIGHT: f32 = 240.0;
    /// Gap between zones
    pub const ZONE_GAP: f32 = 60.0;
    /// Tray item side length
    pub const ITEM_SIZE: f32 = 100.0;
    /// Gap between tray items
    pub const ITEM_GAP: f32 = 40.0;
    /// Zone corner radius
    pub const ZONE_RADIUS: u8 = 20;
    /// Item corner radius
    pub const ITEM_RADIUS: u8 = 24;
    /// Tray corner radius
    pub const TRAY_RADIUS: u8 = 30;
}

/// Font sizes used across the board.
pub mod fonts {
    /// Zone icon
    pub const ICON: f32 = 64.0;
    /// Zone label
    pub const LABEL: f32 = 20.0;
    /// Item content in the tray
    pub const ITEM: f32 = 48.0;
    /// Placed clone inside a zone
    pub const PLACED: f32 = 28.0;
}
