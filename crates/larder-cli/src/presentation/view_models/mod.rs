pub mod common;
pub mod init;
pub mod item;
pub mod result;
pub mod shelves;

pub use common::{Guidance, NoticeViewModel, OutputFormat, StatusBadge, StatusLevel};
pub use init::InitResultViewModel;
pub use item::{ItemAction, ItemChangeViewModel, ItemViewModel};
pub use result::CommandResultViewModel;
pub use shelves::{ExportResultViewModel, ShelfViewModel, ShelvesViewModel};

use std::fmt;

/// Text rendering options. JSON output ignores them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub color: bool,
}

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a>;
}
