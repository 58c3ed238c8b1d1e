use std::fmt;

use crate::presentation::view_models::{CreateView, ExportResultViewModel, ViewOptions};

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportResultView { data: self })
    }
}

struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {} to {}", self.data.format, self.data.path)
    }
}
