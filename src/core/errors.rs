use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum SettleUpError {
    /// Participant id is empty or whitespace only
    #[error("Participant id is required")]
    EmptyParticipantId,

    /// Participant paid a negative amount
    #[error("Participant {0} has a negative amount paid")]
    NegativeAmount(String),

    /// Participant amount is NaN or infinite
    #[error("Participant {0} has a non-finite amount paid")]
    NonFiniteAmount(String),

    /// The same id appears twice in one calculation
    #[error("Participant {0} appears more than once")]
    DuplicateParticipant(String),

    /// Cannot record a payment from a user to themselves
    #[error("Cannot create settlement to self")]
    SelfSettlement,

    /// Payment amount is zero or negative
    #[error("Invalid settlement amount")]
    InvalidSettlementAmount,

    /// Group has no recorded activity
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// Nothing to chart
    #[error("No balances available")]
    NoBalancesAvailable,

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl SettleUpError {
    pub fn invalid_input(field: &str, title: &str, description: impl Into<String>) -> Self {
        SettleUpError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.to_string(),
                description: description.into(),
            },
        )
    }
}
