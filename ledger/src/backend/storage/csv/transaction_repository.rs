use anyhow::{bail, Context, Result};
use csv::{Reader, WriterBuilder};
use log::{debug, info};
use shared::Transaction;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::backend::storage::connection::FileConnection;
use crate::backend::storage::traits::TransactionStorage;

const STORAGE_HEADER: [&str; 5] = ["date", "category", "type", "amount", "description"];

/// CSV-file transaction repository
#[derive(Debug, Clone)]
pub struct CsvTransactionRepository {
    file_path: PathBuf,
}

impl CsvTransactionRepository {
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

impl TransactionStorage for CsvTransactionRepository {
    fn read_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        if !self.file_path.exists() {
            info!("No data file at {}, starting empty", self.file_path.display());
            return Ok(None);
        }

        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut transactions = Vec::new();
        for (index, result) in csv_reader.deserialize::<Transaction>().enumerate() {
            let transaction = result.with_context(|| {
                format!(
                    "Invalid transaction on row {} of {}",
                    index + 1,
                    self.file_path.display()
                )
            })?;
            if !transaction.amount.is_finite() {
                bail!(
                    "Non-numeric amount {} on row {} of {}",
                    transaction.amount,
                    index + 1,
                    self.file_path.display()
                );
            }
            transactions.push(transaction);
        }

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

        // Header is written by hand so an empty collection still gets one
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        csv_writer.write_record(STORAGE_HEADER)?;

        for transaction in transactions {
            csv_writer.serialize(transaction)?;
        }

        csv_writer.flush()?;
        debug!(
            "Saved {} transactions to {}",
            transactions.len(),
            self.file_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::{sample_transactions, TestEnvironment};
    use shared::TransactionType;
    use std::fs;

    fn setup_test_repo() -> Result<(CsvTransactionRepository, TestEnvironment)> {
        let env = TestEnvironment::new_with_prefix("csv_repo")?;
        let repo = CsvTransactionRepository::new(&env.connection, "budget_data.csv");
        Ok((repo, env))
    }

    #[test]
    fn test_missing_file_reads_as_none() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        assert!(repo.read_transactions()?.is_none());
        Ok(())
    }

    #[test]
    fn test_write_then_read_round_trip() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;
        let transactions = sample_transactions();

        repo.write_transactions(&transactions)?;

        assert_eq!(repo.read_transactions()?, Some(transactions));
        Ok(())
    }

    #[test]
    fn test_header_and_quoting() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;
        repo.write_transactions(&sample_transactions())?;

        let content = fs::read_to_string(repo.file_path())?;
        let mut lines = content.lines();

        assert_eq!(lines.next(), Some("date,category,type,amount,description"));
        assert_eq!(lines.next(), Some("2024-01-05,Food,Expense,20.0,lunch"));
        assert_eq!(lines.next(), Some("2024-01-10,Salary,Income,1000.0,"));
        assert_eq!(
            lines.next(),
            Some("2024-02-01,Rent,Expense,700.5,\"February, \"\"flat\"\"\"")
        );
        Ok(())
    }

    #[test]
    fn test_empty_collection_keeps_header() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        repo.write_transactions(&[])?;

        assert_eq!(repo.read_transactions()?, Some(vec![]));
        assert_eq!(
            fs::read_to_string(repo.file_path())?.trim_end(),
            "date,category,type,amount,description"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_type_column_is_an_error() -> Result<()> {
        let (repo, env) = setup_test_repo()?;
        fs::write(
            env.base_directory().join("budget_data.csv"),
            "date,category,type,amount,description\n2024-01-01,Food,Savings,3,\n",
        )?;

        assert!(repo.read_transactions().is_err());
        Ok(())
    }

    #[test]
    fn test_non_finite_amounts_are_an_error() -> Result<()> {
        let (repo, env) = setup_test_repo()?;
        for amount in ["NaN", "inf", "-inf"] {
            fs::write(
                env.base_directory().join("budget_data.csv"),
                format!("date,category,type,amount,description\n2024-01-01,Food,Expense,{},\n", amount),
            )?;

            let err = repo.read_transactions().unwrap_err();
            assert!(err.to_string().contains("row 1"), "{}: {}", amount, err);
        }
        Ok(())
    }

    #[test]
    fn test_reads_integer_amounts() -> Result<()> {
        let (repo, env) = setup_test_repo()?;
        fs::write(
            env.base_directory().join("budget_data.csv"),
            "date,category,type,amount,description\n2024-01-01,Pay,Income,300,bonus\n",
        )?;

        let loaded = repo.read_transactions()?.expect("file exists");

        assert_eq!(
            loaded,
            vec![Transaction::new("2024-01-01", "Pay", TransactionType::Income, 300.0, "bonus")]
        );
        Ok(())
    }
}
