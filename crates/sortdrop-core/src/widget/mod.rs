//! Visual state for zones and items.
//!
//! The exercise only decides *which* state a zone or item is in; shells map
//! states to styling:
//! - Zones are neutral or hovered (likely drop target)
//! - Items are idle or dimmed while dragged
//!
//! Placed items have no visual state of their own; they are clones owned by
//! their zone.

mod manager;
mod state;

pub use manager::VisualManager;
pub use state::{ItemVisual, ZoneVisual};
