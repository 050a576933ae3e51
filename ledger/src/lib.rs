//! Personal budget ledger: a persisted collection of income and expense
//! transactions with totals, per-category and per-month aggregates, monthly
//! reports and CSV export.

pub mod backend;

pub use backend::{Backend, LedgerConfig, LedgerError, LedgerResult, StorageFormat};
