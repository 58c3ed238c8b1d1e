use larder_engine::UrgencyCounts;
use serde::Serialize;

use super::item::ItemViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct ShelfViewModel {
    pub location: String,
    pub items: Vec<ItemViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShelvesViewModel {
    /// Reference date of this presentation pass.
    pub today: String,
    pub total: usize,
    pub counts: UrgencyCounts,
    pub shelves: Vec<ShelfViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResultViewModel {
    pub format: String,
    pub path: String,
    pub items: usize,
}
