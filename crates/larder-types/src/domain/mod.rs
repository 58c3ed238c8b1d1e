mod fields;
mod item;
mod location;

pub use fields::{ItemFields, ValidationError};
pub use item::{Item, ItemId};
pub use location::Location;
