use larder_engine::Urgency;
use serde::Serialize;

/// One classified item as shown in listings and command results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemViewModel {
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub location: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub days_until: i64,
    pub urgency: Urgency,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemAction {
    Added,
    Updated,
    Removed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemChangeViewModel {
    pub action: ItemAction,
    pub item: ItemViewModel,
}
