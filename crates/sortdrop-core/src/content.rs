//! Content descriptor: the items and zones an exercise is built from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a content descriptor.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid content descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

/// A draggable item as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    /// Type tag matched against a zone's accepted set.
    #[serde(rename = "type")]
    pub kind: String,
    /// Markup or plain text rendered inside the item.
    pub content: String,
}

impl ItemSpec {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }
}

/// A drop zone as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub id: String,
    /// Markup or plain text shown above the label.
    pub icon: String,
    pub label: String,
    /// Item type tags this zone accepts.
    pub accept: Vec<String>,
}

impl ZoneSpec {
    pub fn new<I, S>(
        id: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
        accept: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            icon: icon.into(),
            label: label.into(),
            accept: accept.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether an item type is in this zone's accepted set.
    pub fn accepts(&self, kind: &str) -> bool {
        self.accept.iter().any(|a| a == kind)
    }
}

/// Immutable description of an exercise, supplied once at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDescriptor {
    pub items: Vec<ItemSpec>,
    pub zones: Vec<ZoneSpec>,
}

impl ContentDescriptor {
    /// Parse a descriptor from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the descriptor to JSON.
    pub fn to_json(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Item types that no zone accepts. Such items can never be placed.
    pub fn unplaceable_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self
            .items
            .iter()
            .map(|item| item.kind.as_str())
            .filter(|kind| !self.zones.iter().any(|zone| zone.accepts(kind)))
            .collect();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }

    /// Descriptors are a caller contract; oddities are reported but never rejected.
    pub(crate) fn log_suspicious(&self) {
        for kind in self.unplaceable_kinds() {
            log::warn!("No zone accepts item type '{}'; the exercise cannot complete", kind);
        }
        for (i, zone) in self.zones.iter().enumerate() {
            if self.zones[..i].iter().any(|other| other.id == zone.id) {
                log::warn!("Duplicate zone id '{}'", zone.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        let json = r#"{
            "items": [{"type": "fruit", "content": "🍎"}],
            "zones": [{"id": "basket", "icon": "🧺", "label": "Fruit", "accept": ["fruit"]}]
        }"#;

        let content = ContentDescriptor::from_json(json).unwrap();
        assert_eq!(content.items.len(), 1);
        assert_eq!(content.items[0].kind, "fruit");
        assert_eq!(content.zones[0].id, "basket");
        assert!(content.zones[0].accepts("fruit"));
        assert!(!content.zones[0].accepts("veggie"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{"items": [{"content": "🍎"}], "zones": []}"#;
        let result = ContentDescriptor::from_json(json);
        assert!(matches!(result, Err(ContentError::Json(_))));
    }

    #[test]
    fn test_item_type_field_name() {
        let item = ItemSpec::new("fruit", "🍎");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"fruit""#));
    }

    #[test]
    fn test_unplaceable_kinds() {
        let content = ContentDescriptor {
            items: vec![
                ItemSpec::new("fruit", "🍎"),
                ItemSpec::new("rock", "🪨"),
                ItemSpec::new("rock", "🪨"),
            ],
            zones: vec![ZoneSpec::new("basket", "", "Fruit", ["fruit"])],
        };
        assert_eq!(content.unplaceable_kinds(), vec!["rock"]);
    }
}
