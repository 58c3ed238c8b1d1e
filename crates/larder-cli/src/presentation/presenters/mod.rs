mod init;
mod item;
mod notice;
mod shelves;

pub use init::present_init_result;
pub use item::{present_item, present_item_change};
pub use notice::{present_not_found, present_notice};
pub use shelves::{present_export_result, present_listing, present_shelves};
