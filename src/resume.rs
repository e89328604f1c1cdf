//! Builds the resume view: per-category expense totals for one month.
//!
//! Like the dashboard, this module only assembles display-ready data. The
//! month navigator steps one month at a time via [next_month] and
//! [previous_month]; [load] is an explicit refresh for the selected month.

use time::Month;

use crate::{Error, aggregate, format, session::Session, store::KeyValueStore};

/// One category's row in the month summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    /// The category's display name.
    pub name: &'static str,
    /// The category's chart color.
    pub color: &'static str,
    /// Total spent in this category over the month.
    pub total: f64,
    /// The total formatted as currency, e.g. `R$ 300,00`.
    pub total_formatted: String,
    /// Share of the month's expenses, whole percent.
    pub percent: u8,
}

/// The month summary shown on the resume screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// The navigator label, e.g. `março, 2024`.
    pub label: String,
    /// Per-category totals, in the fixed list's display order. Empty when
    /// the month has no expenses.
    pub entries: Vec<CategoryEntry>,
}

/// Load the user's records and build the summary for `month`/`year`.
///
/// # Errors
/// Returns an [Error::Storage] if the store cannot be read, or an
/// [Error::InvalidAmount] if a stored record carries a non-finite amount.
pub async fn load<S>(
    store: &S,
    session: &Session,
    month: Month,
    year: i32,
) -> Result<MonthSummary, Error>
where
    S: KeyValueStore + ?Sized,
{
    let records = crate::ledger::load_records(store, session).await?;
    let breakdown = aggregate::month_breakdown(&records, month, year)?;

    Ok(MonthSummary {
        label: format::format_month_year(month, year),
        entries: breakdown
            .into_iter()
            .map(|spend| CategoryEntry {
                name: spend.name,
                color: spend.color,
                total: spend.total,
                total_formatted: format::format_currency(spend.total),
                percent: spend.percent,
            })
            .collect(),
    })
}

/// The month after `month`/`year`, wrapping into the next year after
/// December.
pub fn next_month(month: Month, year: i32) -> (Month, i32) {
    match month {
        Month::December => (Month::January, year + 1),
        other => (other.next(), year),
    }
}

/// The month before `month`/`year`, wrapping into the previous year before
/// January.
pub fn previous_month(month: Month, year: i32) -> (Month, i32) {
    match month {
        Month::January => (Month::December, year - 1),
        other => (other.previous(), year),
    }
}
