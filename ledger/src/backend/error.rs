//! Error types surfaced to callers of the ledger backend.

use crate::backend::domain::validation::TransactionValidationError;

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Input was rejected; nothing was changed
    #[error("Invalid transaction: {0}")]
    Validation(#[from] TransactionValidationError),

    /// Reading or writing the persisted collection failed
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),

    #[error("No data to export")]
    NothingToExport,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LedgerError {
    pub fn validation(&self) -> Option<&TransactionValidationError> {
        match self {
            LedgerError::Validation(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, LedgerError::Persistence(_))
    }
}
