//! Builds the dashboard view: highlight cards plus the transaction list.
//!
//! This module only assembles display-ready data; rendering and lifecycle
//! belong to the caller. [load] is an explicit refresh, call it again
//! whenever the screen should re-read the store.

use crate::{
    Error,
    aggregate::{self, LastTransaction},
    category, format, ledger,
    record::{Record, TransactionType},
    session::Session,
    store::KeyValueStore,
};

/// One aggregate summary card: formatted amount plus a caption describing
/// the most recent activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCard {
    /// The formatted total, e.g. `R$ 1.000,00`.
    pub amount: String,
    /// The last-activity caption, e.g. `Última entrada dia 05 de março`.
    pub caption: String,
}

/// One row of the dashboard's transaction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    /// The record's id, for list keying.
    pub id: String,
    /// The record's label.
    pub name: String,
    /// The formatted amount, e.g. `R$ 59,90`.
    pub amount: String,
    /// Income or expense, for row styling.
    pub transaction_type: TransactionType,
    /// The category's display name, or the raw key if it is not in the
    /// fixed list.
    pub category: String,
    /// The record date as `DD/MM/YY`.
    pub date: String,
}

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// The income highlight card.
    pub income: HighlightCard,
    /// The expense highlight card.
    pub expense: HighlightCard,
    /// The net total card.
    pub total: HighlightCard,
    /// All records, newest first.
    pub rows: Vec<RecordRow>,
}

/// Load the user's records and build the dashboard view.
///
/// # Errors
/// Returns an [Error::Storage] if the store cannot be read, or an
/// [Error::InvalidAmount] if a stored record carries a non-finite amount.
pub async fn load<S>(store: &S, session: &Session) -> Result<DashboardView, Error>
where
    S: KeyValueStore + ?Sized,
{
    let records = ledger::load_records(store, session).await?;
    let highlights = aggregate::summarize(&records)?;

    tracing::info!(
        "dashboard loaded {} record(s) for user {}",
        records.len(),
        session.user().id
    );

    Ok(DashboardView {
        income: HighlightCard {
            amount: format::format_currency(highlights.income_total),
            caption: last_caption("Última entrada dia", highlights.last_income),
        },
        expense: HighlightCard {
            amount: format::format_currency(highlights.expense_total),
            caption: last_caption("Última saída dia", highlights.last_expense),
        },
        total: HighlightCard {
            amount: format::format_currency(highlights.net_total),
            caption: period_caption(highlights.last_expense),
        },
        rows: records.iter().map(row).collect(),
    })
}

fn last_caption(prefix: &str, last: LastTransaction) -> String {
    match last {
        LastTransaction::Never => "Não há transações".to_owned(),
        LastTransaction::On(date) => format!("{prefix} {}", format::format_day_month(date)),
    }
}

/// The total card describes the covered period, from the 1st to the most
/// recent expense.
fn period_caption(last_expense: LastTransaction) -> String {
    match last_expense {
        LastTransaction::Never => "Não há transações".to_owned(),
        LastTransaction::On(date) => format!("01 à {}", format::format_day_month(date)),
    }
}

fn row(record: &Record) -> RecordRow {
    let category = category::find(&record.category)
        .map(|category| category.name.to_owned())
        .unwrap_or_else(|| record.category.clone());

    RecordRow {
        id: record.id.clone(),
        name: record.name.clone(),
        amount: format::format_currency(record.amount),
        transaction_type: record.transaction_type,
        category,
        date: format::format_short_date(record.date.date()),
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        dashboard,
        ledger::append_record,
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

    fn test_record(
        name: &str,
        amount: f64,
        transaction_type: TransactionType,
        category: &str,
        date: time::OffsetDateTime,
    ) -> Record {
        Record {
            id: format!("id-{name}"),
            name: name.to_owned(),
            amount,
            transaction_type,
            category: category.to_owned(),
            date,
        }
    }

    #[tokio::test]
    async fn dashboard_formats_highlights_and_rows() {
        let store = test_store();
        let session = test_session();
        append_record(
            &store,
            &session,
            test_record("Salário", 1000.0, TransactionType::Income, "salary", datetime!(2024-01-05 9:00 UTC)),
        )
        .await
        .unwrap();
        append_record(
            &store,
            &session,
            test_record("Pizza", 300.0, TransactionType::Expense, "food", datetime!(2024-01-10 20:00 UTC)),
        )
        .await
        .unwrap();

        let view = dashboard::load(&store, &session).await.unwrap();

        assert_eq!(view.income.amount, "R$ 1.000,00");
        assert_eq!(view.income.caption, "Última entrada dia 05 de janeiro");
        assert_eq!(view.expense.amount, "R$ 300,00");
        assert_eq!(view.expense.caption, "Última saída dia 10 de janeiro");
        assert_eq!(view.total.amount, "R$ 700,00");
        assert_eq!(view.total.caption, "01 à 10 de janeiro");

        assert_eq!(view.rows.len(), 2);
        // Newest first.
        assert_eq!(view.rows[0].name, "Pizza");
        assert_eq!(view.rows[0].amount, "R$ 300,00");
        assert_eq!(view.rows[0].category, "Alimentação");
        assert_eq!(view.rows[0].date, "10/01/24");
    }

    #[tokio::test]
    async fn empty_store_yields_zero_cards_and_no_rows() {
        let store = test_store();
        let session = test_session();

        let view = dashboard::load(&store, &session).await.unwrap();

        assert_eq!(view.income.amount, "R$ 0,00");
        assert_eq!(view.income.caption, "Não há transações");
        assert_eq!(view.expense.caption, "Não há transações");
        assert_eq!(view.total.amount, "R$ 0,00");
        assert!(view.rows.is_empty());
    }

    #[tokio::test]
    async fn corrupted_blob_loads_as_empty_dashboard() {
        let store = test_store();
        let session = test_session();
        store.set(&session.storage_key(), "\"oops").await.unwrap();

        let view = dashboard::load(&store, &session).await.unwrap();

        assert_eq!(view.total.amount, "R$ 0,00");
        assert!(view.rows.is_empty());
    }

    #[tokio::test]
    async fn unknown_category_keys_fall_back_to_the_raw_key() {
        let store = test_store();
        let session = test_session();
        append_record(
            &store,
            &session,
            test_record("???", 10.0, TransactionType::Expense, "mystery", datetime!(2024-01-10 20:00 UTC)),
        )
        .await
        .unwrap();

        let view = dashboard::load(&store, &session).await.unwrap();

        assert_eq!(view.rows[0].category, "mystery");
    }
}
