//! Transaction store for the budget ledger.
//!
//! `TransactionService` owns the in-memory collection and keeps the storage
//! backend in sync: every mutation writes the whole collection before
//! returning.
//!
//! ## Deleting duplicates
//!
//! Transactions carry no identity of their own. `remove` matches on all five
//! fields, so removing one of several identical transactions removes every
//! one of them.
//!
//! ## Failed writes
//!
//! If persisting fails after `add` or `remove`, the in-memory change is kept
//! and the error is returned. Memory and disk then differ until the next
//! successful `save`.

use log::{debug, error, info, warn};
use shared::{Transaction, TransactionForm};

use crate::backend::domain::validation::{parse_transaction_form, validate_transaction};
use crate::backend::error::LedgerResult;
use crate::backend::storage::TransactionStorage;

pub struct TransactionService<S: TransactionStorage> {
    storage: S,
    transactions: Vec<Transaction>,
}

impl<S: TransactionStorage> TransactionService<S> {
    /// Create a service with an empty collection. Nothing is read yet.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            transactions: Vec::new(),
        }
    }

    /// Create a service and load whatever the storage holds
    pub fn open(storage: S) -> LedgerResult<Self> {
        let mut service = Self::new(storage);
        service.load()?;
        Ok(service)
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// Missing storage is a first run and yields an empty collection. On
    /// error the in-memory collection is left as it was.
    pub fn load(&mut self) -> LedgerResult<&[Transaction]> {
        let loaded = self.storage.read_transactions()?.unwrap_or_default();

        for (index, transaction) in loaded.iter().enumerate() {
            if let Err(e) = validate_transaction(transaction) {
                warn!("Persisted transaction #{} is not valid ({}), keeping it as-is", index, e);
            }
        }

        info!("Loaded {} transactions", loaded.len());
        self.transactions = loaded;
        Ok(&self.transactions)
    }

    /// Write the whole collection, overwriting what was persisted before
    pub fn save(&self) -> LedgerResult<()> {
        self.storage
            .write_transactions(&self.transactions)
            .map_err(|e| {
                error!("Failed to persist {} transactions: {:#}", self.transactions.len(), e);
                e
            })?;
        debug!("Persisted {} transactions", self.transactions.len());
        Ok(())
    }

    /// Validate raw input, append the resulting transaction and persist.
    ///
    /// Validation happens before anything is touched, so a rejected form
    /// leaves both memory and storage unchanged.
    pub fn add(&mut self, form: &TransactionForm) -> LedgerResult<Transaction> {
        let transaction = parse_transaction_form(form)?;
        self.append(transaction.clone())?;
        Ok(transaction)
    }

    /// Append an already-built transaction after checking it
    pub fn add_transaction(&mut self, transaction: Transaction) -> LedgerResult<()> {
        validate_transaction(&transaction)?;
        self.append(transaction)
    }

    fn append(&mut self, transaction: Transaction) -> LedgerResult<()> {
        info!(
            "Adding {} of {} in '{}' on {}",
            transaction.transaction_type, transaction.amount, transaction.category, transaction.date
        );
        self.transactions.push(transaction);
        self.save()
    }

    /// Remove every transaction equal to `matcher` in all fields, then persist.
    ///
    /// Returns how many were removed.
    pub fn remove(&mut self, matcher: &Transaction) -> LedgerResult<usize> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t != matcher);
        let removed = before - self.transactions.len();

        match removed {
            0 => info!("No transaction matched {:?}", matcher),
            1 => info!("Removed 1 transaction"),
            n => info!("Removed {} identical transactions", n),
        }

        self.save()?;
        Ok(removed)
    }

    /// The current collection in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions satisfying `predicate`, in insertion order
    pub fn filter<P>(&self, predicate: P) -> Vec<Transaction>
    where
        P: Fn(&Transaction) -> bool,
    {
        self.transactions
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }

    /// Transactions whose date starts with `month` (e.g. `2024-01`)
    pub fn for_month(&self, month: &str) -> Vec<Transaction> {
        self.filter(|t| t.is_in_month(month))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
