use std::fmt;

use crate::presentation::view_models::{CreateView, InitResultViewModel, ViewOptions};

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitResultView { data: self })
    }
}

struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(
            f,
            "  {} ({})",
            self.data.config_path, self.data.config_status
        )?;
        writeln!(f, "\nStorage:")?;
        writeln!(f, "  Backend: {}", self.data.backend)?;
        writeln!(f, "  Ready at {}", self.data.storage_path)?;
        writeln!(f, "  {} item(s) tracked", self.data.item_count)?;
        Ok(())
    }
}
