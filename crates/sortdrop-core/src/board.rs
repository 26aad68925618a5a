//! Board model: zones, items and where each item currently lives.

use crate::content::{ContentDescriptor, ItemSpec, ZoneSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Positional identifier of an item within its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

/// Positional identifier of a zone within its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone#{}", self.0)
    }
}

/// Placement errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),
    #[error("Unknown zone: {0}")]
    UnknownZone(ZoneId),
    #[error("{item} is already placed in {zone}")]
    AlreadyPlaced { item: ItemId, zone: ZoneId },
}

/// Where an item currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemLocation {
    /// Still in the source tray and draggable.
    #[default]
    Tray,
    /// Cloned into a zone. Terminal.
    Placed(ZoneId),
}

/// A draggable item.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub kind: String,
    pub content: String,
    pub location: ItemLocation,
}

impl Item {
    fn from_spec(id: ItemId, spec: &ItemSpec) -> Self {
        Self {
            id,
            kind: spec.kind.clone(),
            content: spec.content.clone(),
            location: ItemLocation::Tray,
        }
    }

    pub fn in_tray(&self) -> bool {
        self.location == ItemLocation::Tray
    }
}

/// A drop zone and the items placed in it.
#[derive(Debug, Clone)]
pub struct Zone {
    pub id: ZoneId,
    /// Identifier from the content descriptor.
    pub name: String,
    pub icon: String,
    pub label: String,
    /// Accepted types in descriptor order.
    pub accept: Vec<String>,
    accept_set: HashSet<String>,
    /// Placed items in placement order.
    placed: Vec<ItemId>,
}

impl Zone {
    fn from_spec(id: ZoneId, spec: &ZoneSpec) -> Self {
        Self {
            id,
            name: spec.id.clone(),
            icon: spec.icon.clone(),
            label: spec.label.clone(),
            accept: spec.accept.clone(),
            accept_set: spec.accept.iter().cloned().collect(),
            placed: Vec::new(),
        }
    }

    /// Check whether this zone accepts an item type.
    pub fn accepts(&self, kind: &str) -> bool {
        self.accept_set.contains(kind)
    }

    /// The accepted set as a JSON array, as stored on the zone element.
    pub fn accept_json(&self) -> String {
        // A list of strings always serializes
        serde_json::to_string(&self.accept).unwrap_or_else(|_| "[]".to_string())
    }

    /// Items placed in this zone, oldest first.
    pub fn placed(&self) -> &[ItemId] {
        &self.placed
    }
}

/// All zones and items of one exercise.
#[derive(Debug, Clone, Default)]
pub struct Board {
    zones: Vec<Zone>,
    items: Vec<Item>,
}

impl Board {
    /// Build a board with every item in the tray.
    pub fn from_content(content: &ContentDescriptor) -> Self {
        let zones = content
            .zones
            .iter()
            .enumerate()
            .map(|(i, spec)| Zone::from_spec(ZoneId(i), spec))
            .collect();
        let items = content
            .items
            .iter()
            .enumerate()
            .map(|(i, spec)| Item::from_spec(ItemId(i), spec))
            .collect();
        Self { zones, items }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.0)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// Find a zone by its descriptor identifier. The first match wins.
    pub fn zone_by_name(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items still in the tray, in render order.
    pub fn tray_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.in_tray())
    }

    /// Items placed in a zone, oldest first.
    pub fn placed_in(&self, zone: ZoneId) -> impl Iterator<Item = &Item> {
        self.zone(zone)
            .into_iter()
            .flat_map(|z| z.placed.iter())
            .filter_map(|id| self.item(*id))
    }

    /// Number of placed items summed over all zones.
    pub fn placed_total(&self) -> usize {
        self.zones.iter().map(|z| z.placed.len()).sum()
    }

    /// Move an item from the tray into a zone.
    ///
    /// Placement is terminal: a placed item can never move again.
    pub fn place(&mut self, item: ItemId, zone: ZoneId) -> Result<(), PlacementError> {
        if self.zone(zone).is_none() {
            return Err(PlacementError::UnknownZone(zone));
        }
        let entry = self
            .items
            .get_mut(item.0)
            .ok_or(PlacementError::UnknownItem(item))?;
        if let ItemLocation::Placed(existing) = entry.location {
            return Err(PlacementError::AlreadyPlaced { item, zone: existing });
        }
        entry.location = ItemLocation::Placed(zone);
        self.zones[zone.0].placed.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fruit_and_veggies;

    #[test]
    fn test_board_creation() {
        let board = Board::from_content(&fruit_and_veggies());

        assert_eq!(board.item_count(), 3);
        assert_eq!(board.zones().len(), 2);
        assert_eq!(board.tray_items().count(), 3);
        assert_eq!(board.placed_total(), 0);
        assert_eq!(board.zone_by_name("veggie-zone").map(|z| z.id), Some(ZoneId(1)));
    }

    #[test]
    fn test_place_item() {
        let mut board = Board::from_content(&fruit_and_veggies());

        board.place(ItemId(0), ZoneId(0)).unwrap();

        assert_eq!(board.item(ItemId(0)).unwrap().location, ItemLocation::Placed(ZoneId(0)));
        assert_eq!(board.tray_items().count(), 2);
        assert_eq!(board.placed_in(ZoneId(0)).count(), 1);
        assert_eq!(board.placed_total(), 1);
    }

    #[test]
    fn test_placement_is_terminal() {
        let mut board = Board::from_content(&fruit_and_veggies());

        board.place(ItemId(0), ZoneId(0)).unwrap();
        let result = board.place(ItemId(0), ZoneId(1));

        assert_eq!(
            result,
            Err(PlacementError::AlreadyPlaced { item: ItemId(0), zone: ZoneId(0) })
        );
        assert_eq!(board.placed_in(ZoneId(1)).count(), 0);
        assert_eq!(board.placed_total(), 1);
    }

    #[test]
    fn test_place_unknown_ids() {
        let mut board = Board::from_content(&fruit_and_veggies());

        assert_eq!(board.place(ItemId(9), ZoneId(0)), Err(PlacementError::UnknownItem(ItemId(9))));
        assert_eq!(board.place(ItemId(0), ZoneId(9)), Err(PlacementError::UnknownZone(ZoneId(9))));
        assert_eq!(board.tray_items().count(), 3);
    }

    #[test]
    fn test_zone_accepts() {
        let board = Board::from_content(&fruit_and_veggies());
        let fruit = board.zone(ZoneId(0)).unwrap();

        assert!(fruit.accepts("fruit"));
        assert!(!fruit.accepts("veggie"));
        assert!(!fruit.accepts(""));
        assert_eq!(fruit.accept_json(), r#"["fruit"]"#);
    }
}
