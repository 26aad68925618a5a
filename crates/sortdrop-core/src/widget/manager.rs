//! Visual manager for tracking zone and item styling state.

use super::state::{ItemVisual, ZoneVisual};
use crate::board::{ItemId, ZoneId};
use std::collections::HashMap;

/// Tracks the visual state of every zone and of dragged items.
///
/// Setters report whether anything changed so shells only restyle what
/// actually moved between states.
#[derive(Debug, Clone, Default)]
pub struct VisualManager {
    /// One entry per zone, indexed by `ZoneId`.
    zones: Vec<ZoneVisual>,
    /// Items with a non-idle state.
    items: HashMap<ItemId, ItemVisual>,
}

impl VisualManager {
    /// Create a manager for `zone_count` zones, all neutral.
    pub fn new(zone_count: usize) -> Self {
        Self {
            zones: vec![ZoneVisual::Neutral; zone_count],
            items: HashMap::new(),
        }
    }

    /// Get the state of a zone.
    pub fn zone(&self, id: ZoneId) -> ZoneVisual {
        self.zones.get(id.0).copied().unwrap_or_default()
    }

    /// Get the state of an item.
    pub fn item(&self, id: ItemId) -> ItemVisual {
        self.items.get(&id).copied().unwrap_or_default()
    }

    /// Zone currently hovered, if any. The lowest id wins when several are.
    pub fn hovered_zone(&self) -> Option<ZoneId> {
        self.zones.iter().position(ZoneVisual::is_hover).map(ZoneId)
    }

    /// Set the state of a zone. Returns true if it changed.
    pub fn set_zone(&mut self, id: ZoneId, visual: ZoneVisual) -> bool {
        match self.zones.get_mut(id.0) {
            Some(current) if *current != visual => {
                *current = visual;
                true
            }
            _ => false,
        }
    }

    /// Set the state of an item. Returns true if it changed.
    pub fn set_item(&mut self, id: ItemId, visual: ItemVisual) -> bool {
        let previous = self.item(id);
        if visual == ItemVisual::Idle {
            self.items.remove(&id);
        } else {
            self.items.insert(id, visual);
        }
        previous != visual
    }

    /// Recompute every zone: `over` hovers, everything else is neutral.
    ///
    /// Returns the zones whose state changed, with their new state.
    pub fn hover_only(&mut self, over: Option<ZoneId>) -> Vec<(ZoneId, ZoneVisual)> {
        let mut changed = Vec::new();
        for (i, current) in self.zones.iter_mut().enumerate() {
            let id = ZoneId(i);
            let next = if Some(id) == over {
                ZoneVisual::Hover
            } else {
                ZoneVisual::Neutral
            };
            if *current != next {
                *current = next;
                changed.push((id, next));
            }
        }
        changed
    }

    /// Reset every zone to neutral. Returns the zones that changed.
    pub fn reset_zones(&mut self) -> Vec<(ZoneId, ZoneVisual)> {
        self.hover_only(None)
    }

    /// Forget an item's state (after placement).
    pub fn remove_item(&mut self, id: ItemId) {
        self.items.remove(&id);
    }
}
