//! # JSON Storage Module
//!
//! Reference storage format: the whole collection lives in a single JSON
//! document (by default `budget_data.json` in the data directory).
//!
//! ## File Format
//!
//! ```json
//! [
//!     {
//!         "date": "2024-01-05",
//!         "category": "Food",
//!         "type": "Expense",
//!         "amount": 20.0,
//!         "description": "lunch"
//!     }
//! ]
//! ```

pub mod transaction_repository;

pub use transaction_repository::JsonTransactionRepository;
