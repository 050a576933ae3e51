//! Test utilities for filesystem-backed storage tests
//!
//! `TestEnvironment` keeps a temporary directory alive for the duration of a
//! test and removes it on drop, even if the test panics.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use anyhow::Result;
use shared::{Transaction, TransactionType};
use super::connection::FileConnection;

/// RAII test environment that cleans up its directory on drop
pub struct TestEnvironment {
    /// Kept alive so the directory is not removed before the test ends
    _temp_dir: TempDir,
    pub connection: FileConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = FileConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn new_with_prefix(prefix: &str) -> Result<Self> {
        let temp_dir = TempDir::with_prefix(prefix)?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = FileConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("BUDGET_LEDGER_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// A small mixed collection used across storage and service tests
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("2024-01-05", "Food", TransactionType::Expense, 20.0, "lunch"),
        Transaction::new("2024-01-10", "Salary", TransactionType::Income, 1000.0, ""),
        Transaction::new("2024-02-01", "Rent", TransactionType::Expense, 700.5, "February, \"flat\""),
        Transaction::new("2024-02-03", "Food", TransactionType::Expense, 0.1, "coffee"),
    ]
}
