use chrono::NaiveDate;
use larder_engine::Shelves;
use larder_types::format_date;
use std::path::Path;

use super::item::present_item;
use crate::presentation::view_models::{
    CommandResultViewModel, ExportResultViewModel, Guidance, ShelfViewModel, ShelvesViewModel,
    StatusBadge,
};

pub fn present_shelves(shelves: &Shelves, today: NaiveDate) -> ShelvesViewModel {
    ShelvesViewModel {
        today: format_date(today),
        total: shelves.total(),
        counts: shelves.count_by_urgency(),
        shelves: shelves
            .iter()
            .map(|(location, entries)| ShelfViewModel {
                location: location.to_string(),
                items: entries.iter().map(present_item).collect(),
            })
            .collect(),
    }
}

/// Wrap a listing with a summary badge and next-step hints.
pub fn present_listing(view_model: ShelvesViewModel) -> CommandResultViewModel<ShelvesViewModel> {
    let counts = view_model.counts;
    let total = view_model.total;

    let mut result = CommandResultViewModel::new(view_model);

    if total == 0 {
        return result
            .with_badge(StatusBadge::info("Nothing tracked yet"))
            .with_suggestion(
                Guidance::new("Add your first item")
                    .with_command("larder add \"Milk\" --date tomorrow"),
            );
    }

    let label = if counts.expired > 0 {
        format!("{} item(s), {} expired", total, counts.expired)
    } else {
        format!("{} item(s)", total)
    };
    result = if counts.expired > 0 || counts.red > 0 {
        result.with_badge(StatusBadge::warning(label))
    } else {
        result.with_badge(StatusBadge::success(label))
    };

    if counts.expired > 0 {
        result = result.with_suggestion(
            Guidance::new("Remove expired items once they are thrown out")
                .with_command("larder rm <ID>"),
        );
    }

    result
}

pub fn present_export_result(
    format: &str,
    path: &Path,
    items: usize,
) -> CommandResultViewModel<ExportResultViewModel> {
    CommandResultViewModel::new(ExportResultViewModel {
        format: format.to_string(),
        path: path.display().to_string(),
        items,
    })
    .with_badge(StatusBadge::success(format!("Exported {} item(s)", items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use larder_engine::present;
    use larder_types::{Item, ItemId, Location};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn item(id: &str, location: Location, days: i64) -> Item {
        Item::new(ItemId::new(id), id, location, today() + Duration::days(days))
    }

    #[test]
    fn test_shelves_in_display_order() {
        let shelves = present(
            &[
                item("rice", Location::Pantry, 200),
                item("milk", Location::Fridge, 1),
            ],
            today(),
        );

        let vm = present_shelves(&shelves, today());
        let locations: Vec<_> = vm.shelves.iter().map(|s| s.location.as_str()).collect();
        assert_eq!(locations, vec!["Fridge", "Freezer", "Pantry"]);
        assert_eq!(vm.total, 2);
        assert_eq!(vm.today, "2026-10-18");
    }

    #[test]
    fn test_empty_listing_suggests_add() {
        let vm = present_shelves(&present(&[], today()), today());
        let result = present_listing(vm);

        assert_eq!(result.badge.unwrap().label, "Nothing tracked yet");
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_expired_items_raise_warning_badge() {
        let shelves = present(&[item("peas", Location::Freezer, -2)], today());
        let result = present_listing(present_shelves(&shelves, today()));

        let badge = result.badge.unwrap();
        assert_eq!(badge.label, "1 item(s), 1 expired");
        assert_eq!(
            badge.level,
            crate::presentation::view_models::StatusLevel::Warning
        );
    }
}
