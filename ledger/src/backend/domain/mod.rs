//! # Domain Module
//!
//! Contains the ledger logic: validating input, keeping the transaction
//! collection, aggregating it and shaping reports. Nothing here knows which
//! storage format is in use.
//!
//! ## Module Organization
//!
//! - **validation**: Raw form parsing and record checks
//! - **transaction_service**: The store; owns the collection and persists it after every change
//! - **summary_service**: Pure aggregations (totals, per-category, per-month)
//! - **report_service**: Monthly reports, text rendering and CSV rows
//! - **export_service**: Writing CSV rows to a file or any writer
//!
//! ## Business Rules
//!
//! - Every field but the description is required
//! - Type is exactly `Income` or `Expense`
//! - Dates are `YYYY-MM-DD`; months are matched by plain string prefix
//! - Balance is always income minus expense

pub mod export_service;
pub mod report_service;
pub mod summary_service;
pub mod transaction_service;
pub mod validation;

pub use export_service::ExportService;
pub use report_service::ReportService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
pub use validation::TransactionValidationError;
