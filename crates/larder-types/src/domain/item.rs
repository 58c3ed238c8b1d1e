use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ItemFields, Location};

/// Opaque unique identifier of an item.
///
/// Freshly generated ids are UUID v4 strings, but ids read back from a
/// backend are accepted verbatim (a shared document may have been written
/// by another client using its own scheme).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 characters, as shown in listings.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A tracked perishable good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub location: Location,
    /// Expiry date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl Item {
    /// Build an item from already validated fields.
    ///
    /// Callers go through [`ItemFields::validate`] first; the name is
    /// stored exactly as given.
    pub fn new(id: ItemId, name: impl Into<String>, location: Location, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            date,
        }
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            location: self.location,
            date: Some(self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(ItemId::new("7f2abd2d-1111-2222").short(), "7f2abd2d");
        assert_eq!(ItemId::new("abc").short(), "abc");
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new(
            ItemId::new("item-1"),
            "Milk",
            Location::Fridge,
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "item-1",
                "name": "Milk",
                "location": "Fridge",
                "date": "2026-10-19"
            })
        );
    }
}
