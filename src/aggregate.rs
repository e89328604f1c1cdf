//! Pure aggregation over a user's transaction list.
//!
//! Everything here takes a slice of records and computes display-ready
//! numbers: per-type totals, the most recent activity per type, and the
//! per-category expense breakdown for a month. No storage, no side effects.

use time::{Date, Month};

use crate::{
    Error, category,
    record::{Record, TransactionType},
};

/// The most recent activity of one transaction type.
///
/// An explicit variant for "no records of this type" instead of a sentinel
/// date, so callers cannot mistake the empty case for a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastTransaction {
    /// No record of this type exists.
    Never,
    /// The date of the most recent record of this type.
    ///
    /// When several records share the maximum date, any of them may have
    /// supplied it; only the date is reported.
    On(Date),
}

/// The aggregate summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlights {
    /// Sum of all income amounts.
    pub income_total: f64,
    /// Sum of all expense amounts.
    pub expense_total: f64,
    /// `income_total - expense_total`, exactly.
    pub net_total: f64,
    /// Date of the most recent income record.
    pub last_income: LastTransaction,
    /// Date of the most recent expense record.
    pub last_expense: LastTransaction,
}

/// One category's share of a month's expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    /// The category's stable key.
    pub key: &'static str,
    /// The category's display name.
    pub name: &'static str,
    /// The category's chart color.
    pub color: &'static str,
    /// Total spent in this category over the month.
    pub total: f64,
    /// Share of the month's expense total, rounded to the nearest whole
    /// percent.
    pub percent: u8,
}

/// Compute the dashboard highlight figures for `records`.
///
/// # Errors
/// Returns an [Error::InvalidAmount] if any record carries a non-finite
/// amount; a bad record must not silently contribute zero to a total.
pub fn summarize(records: &[Record]) -> Result<Highlights, Error> {
    let mut income_total = 0.0;
    let mut expense_total = 0.0;
    let mut last_income = LastTransaction::Never;
    let mut last_expense = LastTransaction::Never;

    for record in records {
        check_amount(record)?;

        match record.transaction_type {
            TransactionType::Income => {
                income_total += record.amount;
                last_income = later_of(last_income, record.date.date());
            }
            TransactionType::Expense => {
                expense_total += record.amount;
                last_expense = later_of(last_expense, record.date.date());
            }
        }
    }

    Ok(Highlights {
        income_total,
        expense_total,
        net_total: income_total - expense_total,
        last_income,
        last_expense,
    })
}

/// Sum the expenses of `month`/`year` per fixed-list category.
///
/// Categories with no matching expenses are omitted, so an empty month (or a
/// month whose expense total is zero) yields an empty vector and no
/// percentage math runs. Expenses whose category key is not in the fixed
/// list contribute to the period total but get no entry of their own, which
/// is why the returned percentages may sum to less than 100.
///
/// # Errors
/// Returns an [Error::InvalidAmount] if a matching record carries a
/// non-finite amount.
pub fn month_breakdown(
    records: &[Record],
    month: Month,
    year: i32,
) -> Result<Vec<CategorySpend>, Error> {
    let expenses: Vec<&Record> = records
        .iter()
        .filter(|record| {
            record.transaction_type == TransactionType::Expense
                && record.date.month() == month
                && record.date.year() == year
        })
        .collect();

    let mut period_total = 0.0;
    for expense in &expenses {
        check_amount(expense)?;
        period_total += expense.amount;
    }

    if period_total == 0.0 {
        return Ok(Vec::new());
    }

    let mut breakdown = Vec::new();

    for category in category::all() {
        let total: f64 = expenses
            .iter()
            .filter(|expense| expense.category == category.key)
            .map(|expense| expense.amount)
            .sum();

        if total > 0.0 {
            breakdown.push(CategorySpend {
                key: category.key,
                name: category.name,
                color: category.color,
                total,
                percent: (total / period_total * 100.0).round() as u8,
            });
        }
    }

    Ok(breakdown)
}

fn check_amount(record: &Record) -> Result<(), Error> {
    if record.amount.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidAmount(record.id.clone()))
    }
}

fn later_of(current: LastTransaction, date: Date) -> LastTransaction {
    match current {
        LastTransaction::On(existing) if existing >= date => current,
        _ => LastTransaction::On(date),
    }
}
