use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (increment when changing table definitions and add a step
// to `migrate`)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Unlike a rebuildable cache, this database is the only copy of the
// user's items, so an unknown version is refused instead of dropped.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(Error::Unavailable(format!(
            "database schema version {} is newer than supported version {}",
            current_version, SCHEMA_VERSION
        )));
    }

    migrate(conn, current_version)?;
    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn migrate(conn: &Connection, from_version: i32) -> Result<()> {
    if from_version < 1 {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                location TEXT NOT NULL,
                date TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_items_location ON items(location);
            "#,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sets_version() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let version: i32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO items (id, name, location, date) VALUES ('a', 'Milk', 'Fridge', '2026-10-19')",
            [],
        )
        .unwrap();

        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_newer_version_is_refused() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("PRAGMA user_version = 99", []).unwrap();

        let err = init_schema(&conn).unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
    }
}
