//! Reading and writing the per-user transaction list.
//!
//! The whole list lives as one JSON blob under the session's storage key.
//! Appending is a read-modify-write of that blob: not atomic across
//! processes, but the app is effectively single-writer. The last completed
//! write wins.

use crate::{Error, record::Record, session::Session, store::KeyValueStore};

/// Read the full transaction list for the session's user.
///
/// A key that has never been written yields an empty list. A blob that no
/// longer parses also yields an empty list: the screen must keep working, so
/// the malformed data is logged and treated as absent rather than crashing.
///
/// # Errors
/// Returns an [Error::Storage] if the store cannot be read.
pub async fn load_records<S>(store: &S, session: &Session) -> Result<Vec<Record>, Error>
where
    S: KeyValueStore + ?Sized,
{
    let key = session.storage_key();

    let Some(raw) = store.get(&key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(error) => {
            tracing::warn!("discarding malformed transaction list under {key}: {error}");
            Ok(Vec::new())
        }
    }
}

/// Prepend `record` to the stored list and write the whole list back.
///
/// The newest record always sits at the front of the list; no other ordering
/// is maintained. There is no retry on failure, the caller surfaces the
/// error and the user re-triggers the operation.
///
/// # Errors
/// Returns an [Error::Storage] if the store cannot be read or written, or an
/// [Error::Parse] if the updated list cannot be encoded.
pub async fn append_record<S>(store: &S, session: &Session, record: Record) -> Result<(), Error>
where
    S: KeyValueStore + ?Sized,
{
    let mut records = load_records(store, session).await?;
    records.insert(0, record);

    let encoded = serde_json::to_string(&records)?;
    store.set(&session.storage_key(), &encoded).await?;

    tracing::info!(
        "wrote {} record(s) for user {}",
        records.len(),
        session.user().id
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        ledger::{append_record, load_records},
        record::{Record, TransactionType},
        session::{Session, User},
        store::{KeyValueStore, SqliteStore},
    };

    fn test_store() -> SqliteStore {
        let connection = Connection::open_in_memory().expect("could not open in-memory database");

        SqliteStore::from_connection(connection).expect("could not create store")
    }

    fn test_session() -> Session {
        Session::sign_in(User {
            id: "user-1".to_owned(),
            name: "Felipe".to_owned(),
            email: "felipe@example.com".to_owned(),
            photo: None,
        })
    }

    fn test_record(name: &str) -> Record {
        Record {
            id: format!("id-{name}"),
            name: name.to_owned(),
            amount: 10.0,
            transaction_type: TransactionType::Expense,
            category: "food".to_owned(),
            date: datetime!(2024-01-10 12:00 UTC),
        }
    }

    #[tokio::test]
    async fn load_returns_empty_list_for_new_user() {
        let store = test_store();
        let session = test_session();

        let records = load_records(&store, &session).await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn append_prepends_and_grows_list_by_one() {
        let store = test_store();
        let session = test_session();

        append_record(&store, &session, test_record("first")).await.unwrap();
        append_record(&store, &session, test_record("second")).await.unwrap();

        let records = load_records(&store, &session).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], test_record("second"));
        assert_eq!(records[1], test_record("first"));
    }

    #[tokio::test]
    async fn lists_are_isolated_per_user() {
        let store = test_store();
        let session = test_session();
        let other = Session::sign_in(User {
            id: "user-2".to_owned(),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            photo: None,
        });

        append_record(&store, &session, test_record("mine")).await.unwrap();

        let records = load_records(&store, &other).await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn malformed_blob_is_treated_as_empty() {
        let store = test_store();
        let session = test_session();

        store.set(&session.storage_key(), "{not json").await.unwrap();

        let records = load_records(&store, &session).await.unwrap();

        assert!(records.is_empty());
    }
}
