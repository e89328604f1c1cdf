//! Defines the app level error type and the registration validation errors.

/// The errors that may occur in the application.
///
/// Nothing here is fatal to the process: every error is caught at the screen
/// boundary and surfaced as a user-visible message.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The register form was rejected before any write happened.
    ///
    /// The user can fix the form and retry.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A read or write against the local store failed.
    ///
    /// There is no automatic retry, the operation must be manually
    /// re-triggered by the user.
    #[error("the local store could not be read or written: {0}")]
    Storage(rusqlite::Error),

    /// The stored transaction list could not be decoded.
    ///
    /// The ledger treats this as an empty list rather than crashing a
    /// screen, see [crate::ledger::load_records].
    #[error("the stored transaction list is malformed: {0}")]
    Parse(String),

    /// A record carried a non-finite amount (NaN or infinity).
    ///
    /// The aggregator fails fast instead of silently summing such values as
    /// zero. The string names the offending record.
    #[error("record {0} has a non-numeric amount")]
    InvalidAmount(String),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Error::Storage(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Parse(error.to_string())
    }
}

/// The ways the register form can be rejected.
///
/// Display strings are the user-facing pt-BR alert messages. Each variant
/// also has a stable machine-readable code, see [ValidationError::code].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name field was empty.
    #[error("Nome é obrigatório")]
    NameRequired,

    /// The amount field did not parse as a number.
    #[error("Informe um valor numérico")]
    AmountInvalid,

    /// The amount parsed but was zero or negative.
    #[error("O valor não pode ser negativo")]
    AmountNotPositive,

    /// Neither income nor expense was selected.
    #[error("Selecione o tipo da transação")]
    TypeRequired,

    /// The category was still the placeholder ("Categoria") entry.
    #[error("Selecione uma categoria")]
    CategoryRequired,
}

impl ValidationError {
    /// A stable machine-readable code for the failure reason.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name_required",
            ValidationError::AmountInvalid => "amount_invalid",
            ValidationError::AmountNotPositive => "amount_not_positive",
            ValidationError::TypeRequired => "type_required",
            ValidationError::CategoryRequired => "category_required",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ValidationError;

    #[test]
    fn codes_are_stable() {
        let cases = [
            (ValidationError::NameRequired, "name_required"),
            (ValidationError::AmountInvalid, "amount_invalid"),
            (ValidationError::AmountNotPositive, "amount_not_positive"),
            (ValidationError::TypeRequired, "type_required"),
            (ValidationError::CategoryRequired, "category_required"),
        ];

        for (error, want) in cases {
            assert_eq!(error.code(), want);
        }
    }
}
