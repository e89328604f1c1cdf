//! A SQLite-backed implementation of the key-value store.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};

use crate::{Error, store::KeyValueStore};

/// The on-device store, backed by a single SQLite table.
///
/// The connection lives behind an `Arc<Mutex<_>>` so the store can be shared
/// between screen controllers; critical sections are a single statement
/// each.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the store at `path`.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the database cannot be opened or the
    /// table cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let connection = Connection::open(path)?;

        Self::from_connection(connection)
    }

    /// Create a store over an existing connection.
    ///
    /// Useful for tests, which use an in-memory database.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the table cannot be created.
    pub fn from_connection(connection: Connection) -> Result<Self, Error> {
        create_store_table(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let connection = self.connection.lock().unwrap();

        let value = connection
            .query_row("SELECT value FROM kv WHERE key = :key", &[(":key", key)], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }
}

/// Create the key-value table.
///
/// # Errors
/// This function will return an error if there is an SQL error.
fn create_store_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::store::{KeyValueStore, SqliteStore};

    fn test_store() -> SqliteStore {
        let connection = Connection::open_in_memory().expect("could not open in-memory database");

        SqliteStore::from_connection(connection).expect("could not create store")
    }

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let store = test_store();

        let got = store.get("@carteira:transactions_user:nobody").await.unwrap();

        assert_eq!(got, None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = test_store();

        store.set("foo", "[1,2,3]").await.unwrap();
        let got = store.get("foo").await.unwrap();

        assert_eq!(got, Some("[1,2,3]".to_owned()));
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = test_store();

        store.set("foo", "old").await.unwrap();
        store.set("foo", "new").await.unwrap();
        let got = store.get("foo").await.unwrap();

        assert_eq!(got, Some("new".to_owned()));
    }
}
