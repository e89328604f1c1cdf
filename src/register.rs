//! The register screen's form validation and submit operation.
//!
//! Validation happens entirely before any write: a rejected form never
//! touches the store. A successful submit builds a [Record] with a fresh
//! UUID and the current timestamp and appends it through the ledger.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    Error, ValidationError,
    category::{self, Category, PLACEHOLDER_CATEGORY_KEY},
    ledger,
    record::{Record, TransactionType},
    session::Session,
    store::KeyValueStore,
};

/// The raw state of the register form.
///
/// `amount` stays a string until validation; the numeric keyboard on the
/// original form produced `.` decimals but users paste `,` decimals too, so
/// both parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    /// Free-text label for the new record.
    pub name: String,
    /// The amount as typed.
    pub amount: String,
    /// The selected type, or `None` before the user picks one.
    pub transaction_type: Option<TransactionType>,
    /// The selected category key; starts as the placeholder entry.
    pub category: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            transaction_type: None,
            category: PLACEHOLDER_CATEGORY_KEY.to_owned(),
        }
    }
}

impl RegisterForm {
    /// Validate the form and build the record it describes.
    ///
    /// The record gets a freshly generated UUID v4 id and the current
    /// timestamp.
    ///
    /// # Errors
    /// Returns the first failing check, in field order:
    /// [ValidationError::NameRequired], [ValidationError::AmountInvalid],
    /// [ValidationError::AmountNotPositive], [ValidationError::TypeRequired]
    /// or [ValidationError::CategoryRequired].
    pub fn validate(&self) -> Result<Record, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let amount = parse_amount(&self.amount)?;

        let Some(transaction_type) = self.transaction_type else {
            return Err(ValidationError::TypeRequired);
        };

        if self.category == PLACEHOLDER_CATEGORY_KEY {
            return Err(ValidationError::CategoryRequired);
        }

        Ok(Record {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            amount,
            transaction_type,
            category: self.category.clone(),
            date: OffsetDateTime::now_utc(),
        })
    }
}

/// Validate `form` and append the resulting record to the user's list.
///
/// On any validation failure no write occurs and the failure reason is
/// returned for display.
///
/// # Errors
/// Returns an [Error::Validation] if the form is rejected, or an
/// [Error::Storage] if the ledger write fails.
pub async fn submit<S>(store: &S, session: &Session, form: &RegisterForm) -> Result<Record, Error>
where
    S: KeyValueStore + ?Sized,
{
    let record = form.validate()?;

    ledger::append_record(store, session, record.clone()).await?;
    tracing::info!("registered record {} for user {}", record.id, session.user().id);

    Ok(record)
}

/// The fixed category list shown by the category-select modal.
pub fn category_options() -> &'static [Category] {
    category::all()
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let normalized = raw.trim().replace(',', ".");

    let amount: f64 = normalized
        .parse()
        .map_err(|_| ValidationError::AmountInvalid)?;

    if !amount.is_finite() {
        return Err(ValidationError::AmountInvalid);
    }

    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }

    Ok(amount)
}
