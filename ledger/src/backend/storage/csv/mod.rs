//! # CSV Storage Module
//!
//! Alternative file format for the transaction collection, readable by
//! spreadsheet tools. The domain logic is storage-agnostic: this repository
//! satisfies the same `TransactionStorage` contract as the JSON one.
//!
//! ## File Format
//!
//! ```csv
//! date,category,type,amount,description
//! 2024-01-05,Food,Expense,20.0,lunch
//! 2024-01-10,Salary,Income,1000.0,
//! ```

pub mod transaction_repository;

pub use transaction_repository::CsvTransactionRepository;
