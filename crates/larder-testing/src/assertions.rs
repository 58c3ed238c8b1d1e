//! Assertions over `larder list --format json` output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Items of one shelf in display order.
pub fn shelf_items<'a>(json: &'a Value, location: &str) -> Result<&'a Vec<Value>> {
    let shelves = json["content"]["shelves"]
        .as_array()
        .context("Expected 'content.shelves' array in JSON")?;

    shelves
        .iter()
        .find(|shelf| shelf["location"] == location)
        .and_then(|shelf| shelf["items"].as_array())
        .with_context(|| format!("No shelf '{}' in listing", location))
}

/// Assert the item names of one shelf, in order.
pub fn assert_shelf_names(json: &Value, location: &str, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = shelf_items(json, location)?
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();

    if names != expected {
        bail!(
            "Shelf {}: expected {:?}, got {:?}",
            location,
            expected,
            names
        );
    }
    Ok(())
}

pub fn assert_total(json: &Value, expected: u64) -> Result<()> {
    let total = json["content"]["total"]
        .as_u64()
        .context("Expected 'content.total' in JSON")?;
    if total != expected {
        bail!("Expected {} items, got {}", expected, total);
    }
    Ok(())
}

/// Find one item anywhere in the listing by name.
pub fn find_item<'a>(json: &'a Value, name: &str) -> Result<&'a Value> {
    json["content"]["shelves"]
        .as_array()
        .context("Expected 'content.shelves' array in JSON")?
        .iter()
        .filter_map(|shelf| shelf["items"].as_array())
        .flatten()
        .find(|item| item["name"] == name)
        .with_context(|| format!("No item named '{}'", name))
}
