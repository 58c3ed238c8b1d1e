use chrono::NaiveDate;
use larder_types::{Item, Location};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::expiry::{Expiry, Urgency};

/// One item together with its classification for the current pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfEntry {
    #[serde(flatten)]
    pub item: Item,
    #[serde(flatten)]
    pub expiry: Expiry,
}

/// Items grouped by location, soonest expiry first.
///
/// Always holds exactly one (possibly empty) shelf per [`Location`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Shelves {
    shelves: BTreeMap<Location, Vec<ShelfEntry>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UrgencyCounts {
    pub expired: usize,
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
}

impl Shelves {
    fn empty() -> Self {
        Self {
            shelves: Location::ALL.iter().map(|loc| (*loc, Vec::new())).collect(),
        }
    }

    pub fn get(&self, location: Location) -> &[ShelfEntry] {
        self.shelves
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Shelves in display order (Fridge, Freezer, Pantry).
    pub fn iter(&self) -> impl Iterator<Item = (Location, &[ShelfEntry])> {
        self.shelves
            .iter()
            .map(|(loc, entries)| (*loc, entries.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.shelves.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn count_by_urgency(&self) -> UrgencyCounts {
        let mut counts = UrgencyCounts::default();
        for entry in self.shelves.values().flatten() {
            match entry.expiry.urgency {
                Urgency::Gray => counts.expired += 1,
                Urgency::Red => counts.red += 1,
                Urgency::Yellow => counts.yellow += 1,
                Urgency::Green => counts.green += 1,
            }
        }
        counts
    }

    /// Restrict the presentation to one location; the other shelves stay
    /// present but empty.
    pub fn only(mut self, location: Location) -> Self {
        for (loc, entries) in self.shelves.iter_mut() {
            if *loc != location {
                entries.clear();
            }
        }
        self
    }
}

/// Group `items` by location and sort each shelf by days until expiry.
///
/// Every item is classified against the same `today`. Sorting is stable, so
/// items expiring on the same day keep their input order. Nothing is
/// cached: call again after every mutation.
pub fn present(items: &[Item], today: NaiveDate) -> Shelves {
    let mut shelves = Shelves::empty();

    for item in items {
        let entry = ShelfEntry {
            expiry: Expiry::classify(item.date, today),
            item: item.clone(),
        };
        shelves
            .shelves
            .entry(item.location)
            .or_default()
            .push(entry);
    }

    for entries in shelves.shelves.values_mut() {
        entries.sort_by_key(|entry| entry.expiry.days_until);
    }

    shelves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use larder_types::ItemId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn item(id: &str, location: Location, days: i64) -> Item {
        Item::new(
            ItemId::new(id),
            id.to_uppercase(),
            location,
            today() + Duration::days(days),
        )
    }

    fn ids(entries: &[ShelfEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.item.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_has_all_locations() {
        let shelves = present(&[], today());
        let locations: Vec<Location> = shelves.iter().map(|(loc, _)| loc).collect();
        assert_eq!(locations, Location::ALL.to_vec());
        assert!(shelves.is_empty());
    }

    #[test]
    fn test_groups_by_location() {
        let items = vec![
            item("milk", Location::Fridge, 1),
            item("peas", Location::Freezer, 90),
            item("rice", Location::Pantry, 200),
            item("eggs", Location::Fridge, 10),
        ];
        let shelves = present(&items, today());

        assert_eq!(ids(shelves.get(Location::Fridge)), vec!["milk", "eggs"]);
        assert_eq!(ids(shelves.get(Location::Freezer)), vec!["peas"]);
        assert_eq!(ids(shelves.get(Location::Pantry)), vec!["rice"]);
        assert_eq!(shelves.total(), 4);
    }

    #[test]
    fn test_expired_sort_first() {
        let items = vec![
            item("fresh", Location::Fridge, 5),
            item("old", Location::Fridge, -3),
            item("today", Location::Fridge, 0),
            item("older", Location::Fridge, -10),
        ];
        let shelves = present(&items, today());
        assert_eq!(
            ids(shelves.get(Location::Fridge)),
            vec!["older", "old", "today", "fresh"]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            item("b", Location::Pantry, 2),
            item("a", Location::Pantry, 2),
            item("c", Location::Pantry, 1),
            item("d", Location::Pantry, 2),
        ];
        let shelves = present(&items, today());
        assert_eq!(ids(shelves.get(Location::Pantry)), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_adjacent_entries_are_ordered() {
        let offsets = [13, -2, 0, 6, 6, 1, -40, 3, 7, 2];
        let items: Vec<Item> = offsets
            .iter()
            .enumerate()
            .map(|(i, days)| item(&format!("i{}", i), Location::ALL[i % 3], *days))
            .collect();
        let shelves = present(&items, today());

        for (_, entries) in shelves.iter() {
            for pair in entries.windows(2) {
                assert!(pair[0].expiry.days_until <= pair[1].expiry.days_until);
            }
        }
        assert_eq!(shelves.total(), offsets.len());
    }

    #[test]
    fn test_milk_expiring_tomorrow() {
        let items = vec![item("milk", Location::Fridge, 1)];
        let shelves = present(&items, today());

        let fridge = shelves.get(Location::Fridge);
        assert_eq!(fridge.len(), 1);
        assert_eq!(fridge[0].expiry.status, "Expires tomorrow!");
        assert_eq!(fridge[0].expiry.urgency, Urgency::Red);
    }

    #[test]
    fn test_count_by_urgency() {
        let items = vec![
            item("a", Location::Fridge, -1),
            item("b", Location::Fridge, 0),
            item("c", Location::Freezer, 4),
            item("d", Location::Pantry, 30),
            item("e", Location::Pantry, 31),
        ];
        let counts = present(&items, today()).count_by_urgency();
        assert_eq!(
            counts,
            UrgencyCounts {
                expired: 1,
                red: 1,
                yellow: 1,
                green: 2,
            }
        );
    }

    #[test]
    fn test_only_keeps_every_key() {
        let items = vec![
            item("a", Location::Fridge, 1),
            item("b", Location::Pantry, 1),
        ];
        let shelves = present(&items, today()).only(Location::Pantry);
        assert!(shelves.get(Location::Fridge).is_empty());
        assert_eq!(ids(shelves.get(Location::Pantry)), vec!["b"]);
        assert_eq!(shelves.iter().count(), 3);
    }
}
