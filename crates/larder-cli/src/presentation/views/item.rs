use std::fmt;

use super::paint;
use crate::presentation::formatters::{sanitize, truncate};
use crate::presentation::view_models::{
    CreateView, ItemAction, ItemChangeViewModel, ItemViewModel, ViewOptions,
};

const NAME_WIDTH: usize = 24;

/// One listing row: short id, name, date and status.
pub struct ItemLine<'a> {
    item: &'a ItemViewModel,
    options: ViewOptions,
}

impl<'a> ItemLine<'a> {
    pub fn new(item: &'a ItemViewModel, options: ViewOptions) -> Self {
        Self { item, options }
    }
}

impl<'a> fmt::Display for ItemLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = truncate(&sanitize(&self.item.name), NAME_WIDTH);
        // Ids from a shared sync document are as untrusted as names.
        let short_id = sanitize(&self.item.short_id);
        // Pad before painting; ANSI codes would break the width math.
        let row = format!(
            "{:<8}  {:<width$}  {}  {}",
            short_id,
            name,
            self.item.date,
            self.item.status,
            width = NAME_WIDTH
        );
        write!(f, "{}", paint(&row, self.item.urgency, self.options.color))
    }
}

impl CreateView for ItemChangeViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ItemChangeView {
            data: self,
            options,
        })
    }
}

struct ItemChangeView<'a> {
    data: &'a ItemChangeViewModel,
    options: ViewOptions,
}

impl<'a> fmt::Display for ItemChangeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = &self.data.item;
        writeln!(f, "  {}", ItemLine::new(item, self.options))?;
        if self.data.action != ItemAction::Removed {
            writeln!(
                f,
                "  id: {}  location: {}",
                sanitize(&item.id),
                item.location
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_engine::Urgency;

    fn milk(name: &str) -> ItemViewModel {
        ItemViewModel {
            id: "0c1d2e3f-4a5b".to_string(),
            short_id: "0c1d2e3f".to_string(),
            name: name.to_string(),
            location: "Fridge".to_string(),
            date: "2026-10-19".to_string(),
            days_until: 1,
            urgency: Urgency::Red,
            status: "Expires tomorrow!".to_string(),
        }
    }

    #[test]
    fn test_item_line_layout() {
        let item = milk("Milk");
        let line = ItemLine::new(&item, ViewOptions::default()).to_string();
        assert_eq!(
            line,
            "0c1d2e3f  Milk                      2026-10-19  Expires tomorrow!"
        );
    }

    #[test]
    fn test_item_line_neutralizes_control_characters() {
        let item = milk("Milk\x1b[31m");
        let line = ItemLine::new(&item, ViewOptions::default()).to_string();
        assert!(!line.contains('\x1b'));
        assert!(line.contains("Milk\\u{1b}[31m"));
    }

    #[test]
    fn test_ids_are_neutralized_too() {
        let mut item = milk("Milk");
        item.id = "evil\x1b]0;pwned\x07-1".to_string();
        item.short_id = "evil\x1b]0".to_string();
        let result = ItemChangeViewModel {
            action: ItemAction::Added,
            item,
        };

        let text = result.create_view(ViewOptions::default()).to_string();
        assert!(!text.contains('\x1b'));
        assert!(!text.contains('\x07'));
        assert!(text.contains("id: evil\\u{1b}]0;pwned\\u{7}-1"));
    }
}
