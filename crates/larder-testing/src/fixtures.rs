//! Sync documents as another device would write them.

use anyhow::Result;
use serde_json::{Map, Value, json};
use std::path::Path;

/// One entry of a sync document.
#[derive(Debug, Clone)]
pub struct SampleItem {
    pub id: String,
    pub name: String,
    pub location: String,
    pub date: String,
}

impl SampleItem {
    pub fn new(id: &str, name: &str, location: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            date: date.to_string(),
        }
    }
}

/// A small household: one item per urgency bucket against `TEST_TODAY`.
pub fn household() -> Vec<SampleItem> {
    vec![
        SampleItem::new("a1b2c3d4-0001", "Milk", "Fridge", "2026-10-19"),
        SampleItem::new("a1b2c3d4-0002", "Yogurt", "Fridge", "2026-10-22"),
        SampleItem::new("b5e6f7a8-0003", "Peas", "Freezer", "2026-10-16"),
        SampleItem::new("c9d0e1f2-0004", "Rice", "Pantry", "2027-03-01"),
    ]
}

pub fn sync_document(items: &[SampleItem]) -> Value {
    let entries: Map<String, Value> = items
        .iter()
        .map(|item| {
            (
                item.id.clone(),
                json!({
                    "name": item.name,
                    "location": item.location,
                    "date": item.date,
                }),
            )
        })
        .collect();
    json!({ "items": entries })
}

/// Write (or overwrite) a sync document, creating parent directories.
pub fn write_sync_document(path: &Path, items: &[SampleItem]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(
        path,
        serde_json::to_string_pretty(&sync_document(items))?,
    )?;
    Ok(())
}
