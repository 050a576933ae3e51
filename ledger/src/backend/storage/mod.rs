//! # Storage Module
//!
//! Handles persistence of the transaction collection.
//!
//! The domain layer only sees the `TransactionStorage` trait; the concrete
//! backend is chosen when the `Backend` is assembled.
//!
//! ## Implementations
//!
//! - **JSON** (`json`): reference format, one pretty-printed array per file
//! - **CSV** (`csv`): same five fields, one row per transaction
//! - **Memory** (`memory`): in-process buffer for tests and previews
//!
//! Every write replaces the whole file. There is no temp-file swap, so a crash
//! in the middle of a write can lose data.

pub mod connection;
pub mod csv;
pub mod json;
pub mod memory;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use connection::FileConnection;
pub use self::csv::CsvTransactionRepository;
pub use json::JsonTransactionRepository;
pub use memory::MemoryTransactionRepository;
pub use traits::TransactionStorage;
