use larder_types::{Item, ItemId, Location, format_date, parse_date};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{Backend, schema};
use crate::Result;

/// On-device storage in a single SQLite file.
pub struct LocalBackend {
    conn: Connection,
    path: Option<PathBuf>,
}

impl LocalBackend {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        debug!(path = %db_path.display(), "opened local item database");

        Ok(Self {
            conn,
            path: Some(db_path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Backend for LocalBackend {
    fn name(&self) -> &'static str {
        "local"
    }

    fn read_all(&self) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, location, date
            FROM items
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        let mut items = Vec::with_capacity(rows.len());
        for (id, name, location, date) in rows {
            let location = match location.parse::<Location>() {
                Ok(location) => location,
                Err(err) => {
                    warn!(id = %id, "skipping stored item: {}", err);
                    continue;
                }
            };
            let date = match parse_date(&date) {
                Ok(date) => date,
                Err(err) => {
                    warn!(id = %id, "skipping stored item: {}", err);
                    continue;
                }
            };
            items.push(Item::new(ItemId::new(id), name, location, date));
        }

        Ok(items)
    }

    fn write_one(&mut self, item: &Item) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO items (id, name, location, date)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                name = ?2,
                location = ?3,
                date = ?4
            "#,
            params![
                item.id.as_str(),
                &item.name,
                item.location.as_str(),
                format_date(item.date)
            ],
        )?;
        debug!(id = %item.id, "wrote item to local database");

        Ok(())
    }

    fn delete_one(&mut self, id: &ItemId) -> Result<()> {
        self.conn
            .execute("DELETE FROM items WHERE id = ?1", [id.as_str()])?;
        debug!(id = %id, "deleted item from local database");
        Ok(())
    }
}
