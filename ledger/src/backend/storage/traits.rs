//! # Storage Traits
//!
//! This module defines the persistence contract the domain layer depends on,
//! so that storage backends (JSON file, CSV file, memory) can be swapped
//! without touching the ledger logic.

use anyhow::Result;
use shared::Transaction;

/// Trait defining the interface for persisting the transaction collection
///
/// The collection is always read and written as a whole. A `write` followed by
/// a `read` must reproduce the same sequence: same order, same field values,
/// amounts comparing equal.
pub trait TransactionStorage: Send + Sync {
    /// Read the persisted collection
    /// Returns `None` when nothing has been persisted yet
    fn read_transactions(&self) -> Result<Option<Vec<Transaction>>>;

    /// Replace the persisted collection with `transactions`
    fn write_transactions(&self, transactions: &[Transaction]) -> Result<()>;
}

impl<S: TransactionStorage + ?Sized> TransactionStorage for Box<S> {
    fn read_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        (**self).read_transactions()
    }

    fn write_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        (**self).write_transactions(transactions)
    }
}
