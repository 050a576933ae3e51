use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use shared::Transaction;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::backend::storage::connection::FileConnection;
use crate::backend::storage::traits::TransactionStorage;

/// JSON-file transaction repository
#[derive(Debug, Clone)]
pub struct JsonTransactionRepository {
    file_path: PathBuf,
}

impl JsonTransactionRepository {
    /// Create a repository for `file_name` inside the connection's data directory
    pub fn new(connection: &FileConnection, file_name: &str) -> Self {
        Self {
            file_path: connection.data_file_path(file_name),
        }
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl TransactionStorage for JsonTransactionRepository {
    fn read_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        if !self.file_path.exists() {
            info!("No data file at {}, starting empty", self.file_path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let transactions: Vec<Transaction> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid transaction data in {}", self.file_path.display()))?;

        debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            self.file_path.display()
        );
        Ok(Some(transactions))
    }

    fn write_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Failed to open {} for writing", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        transactions.serialize(&mut serializer)?;
        writer.flush()?;

        debug!(
            "Saved {} transactions to {}",
            transactions.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
