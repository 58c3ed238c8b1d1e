use std::fmt;

use crate::presentation::formatters::sanitize;
use crate::presentation::view_models::{CreateView, NoticeViewModel, ViewOptions};

impl CreateView for NoticeViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(NoticeView { data: self })
    }
}

struct NoticeView<'a> {
    data: &'a NoticeViewModel,
}

impl<'a> fmt::Display for NoticeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", sanitize(&self.data.message))
    }
}
