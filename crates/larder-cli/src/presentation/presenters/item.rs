use chrono::NaiveDate;
use larder_engine::{Expiry, ShelfEntry};
use larder_types::{Item, format_date};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ItemAction, ItemChangeViewModel, ItemViewModel,
    StatusBadge,
};

pub fn present_item(entry: &ShelfEntry) -> ItemViewModel {
    ItemViewModel {
        id: entry.item.id.to_string(),
        short_id: entry.item.id.short().to_string(),
        name: entry.item.name.clone(),
        location: entry.item.location.to_string(),
        date: format_date(entry.item.date),
        days_until: entry.expiry.days_until,
        urgency: entry.expiry.urgency,
        status: entry.expiry.status.clone(),
    }
}

pub fn present_item_change(
    action: ItemAction,
    item: Item,
    today: NaiveDate,
) -> CommandResultViewModel<ItemChangeViewModel> {
    let label = match action {
        ItemAction::Added => format!("Added to {}", item.location),
        ItemAction::Updated => "Item updated".to_string(),
        ItemAction::Removed => format!("Removed from {}", item.location),
    };

    let entry = ShelfEntry {
        expiry: Expiry::classify(item.date, today),
        item,
    };
    let expired = entry.expiry.days_until < 0;

    let mut result = CommandResultViewModel::new(ItemChangeViewModel {
        action,
        item: present_item(&entry),
    })
    .with_badge(StatusBadge::success(label));

    if expired && action != ItemAction::Removed {
        result = result.with_suggestion(
            Guidance::new("This item has already expired")
                .with_command(format!("larder rm {}", entry.item.id.short())),
        );
    }

    result
}
