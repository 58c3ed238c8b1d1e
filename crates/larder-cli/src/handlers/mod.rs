pub mod add;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod rm;
pub mod ui;
pub mod watch;

use anyhow::Result;
use larder_runtime::Larder;
use larder_types::ItemId;

/// Outcome of looking up a user-supplied id or prefix.
pub(crate) enum Lookup {
    Found(ItemId),
    Missing,
}

/// Resolve `query` against the store. A missing item is an expected
/// outcome; an ambiguous prefix is an error.
pub(crate) fn lookup(larder: &Larder, query: &str) -> Result<Lookup> {
    match larder.controller().store().resolve(query) {
        Ok(id) => Ok(Lookup::Found(id)),
        Err(err) if err.is_not_found() => {
            tracing::warn!(query, "no item matches");
            Ok(Lookup::Missing)
        }
        Err(err) => Err(err.into()),
    }
}
