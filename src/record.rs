//! Defines the core data model for income and expense records.

use serde::{Deserialize, Deserializer, Serialize, de};
use time::OffsetDateTime;

/// Whether money came in or went out.
///
/// These are the only two values that are ever produced. The wire names
/// (`"up"`/`"down"`) match the JSON blobs written by earlier versions of the
/// app, so existing data keeps loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money earned.
    #[serde(rename = "up")]
    Income,
    /// Money spent.
    #[serde(rename = "down")]
    Expense,
}

/// One user-entered income or expense entry.
///
/// Records are immutable once stored: there is no update or delete path,
/// only a full-list rewrite when a new record is appended. New records are
/// created through [crate::register::RegisterForm].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, a UUID v4 generated at creation time.
    pub id: String,
    /// Free-text label for the entry.
    pub name: String,
    /// The amount of money, always positive at creation.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// Whether this entry is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Key into the fixed category list, see [crate::category::all].
    ///
    /// Not validated against that list at storage time.
    pub category: String,
    /// When the record was created.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// Accept amounts stored either as a JSON number or as a decimal string.
///
/// Earlier versions of the app wrote the raw form field, so both shapes
/// exist in the wild. Anything else is a parse error.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct AmountVisitor;

    impl de::Visitor<'_> for AmountVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or a decimal string")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}
