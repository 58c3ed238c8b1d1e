pub mod export;
pub mod text;

pub use export::{escape_html, to_csv, to_html, to_json};
pub use text::{sanitize, truncate};
