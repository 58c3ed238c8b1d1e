// Engine module - Core interpretation logic (expiry classification, shelf grouping)
// This layer sits between domain types and CLI presentation

pub mod expiry;
pub mod shelves;

pub use expiry::{Expiry, Urgency, days_until, status_text, today_local, urgency};
pub use shelves::{ShelfEntry, Shelves, UrgencyCounts, present};
