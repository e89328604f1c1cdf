//! Contains the trait and implementations for the on-device key-value store.
//!
//! Everything the app persists goes through [KeyValueStore]: a persistent
//! key to string mapping with asynchronous get/set, matching the storage
//! contract of the mobile shells this core is embedded in.

mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::Error;

/// A persistent key to string mapping.
///
/// Operations are asynchronous but are never issued in parallel by this
/// crate; the only ordering guarantee is that the last completed write wins.
/// Writes replace the whole value for a key, there is no partial update.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if the key has never
    /// been written.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the underlying store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the underlying store cannot be
    /// written.
    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
