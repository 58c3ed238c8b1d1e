use std::fmt;

use super::{ItemLine, heading};
use crate::presentation::view_models::{CreateView, ShelvesViewModel, ViewOptions};

impl CreateView for ShelvesViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ShelvesView::new(self, options))
    }
}

pub struct ShelvesView<'a> {
    data: &'a ShelvesViewModel,
    options: ViewOptions,
}

impl<'a> ShelvesView<'a> {
    pub fn new(data: &'a ShelvesViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ShelvesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, shelf) in self.data.shelves.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let title = format!("{} ({})", shelf.location, shelf.items.len());
            writeln!(f, "{}", heading(&title, self.options.color))?;

            if shelf.items.is_empty() {
                writeln!(f, "  (empty)")?;
                continue;
            }
            for item in &shelf.items {
                writeln!(f, "  {}", ItemLine::new(item, self.options))?;
            }
        }
        Ok(())
    }
}
