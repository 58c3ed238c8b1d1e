use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub config_path: String,
    /// "created" or "overwritten"
    pub config_status: String,
    pub backend: String,
    pub storage_path: String,
    pub item_count: usize,
}
