//! In-process storage backend.
//!
//! Clones share the same buffer, so a test can hand one clone to the service
//! and inspect or sabotage the "persisted" state through another.

use anyhow::{anyhow, Result};
use shared::Transaction;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::traits::TransactionStorage;

#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionRepository {
    persisted: Arc<Mutex<Option<Vec<Transaction>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryTransactionRepository {
    /// Empty repository with nothing persisted
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `transactions`
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            persisted: Arc::new(Mutex::new(Some(transactions))),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every following write fail until switched off again
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of what is currently persisted
    pub fn persisted(&self) -> Option<Vec<Transaction>> {
        self.persisted
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl TransactionStorage for MemoryTransactionRepository {
    fn read_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        let guard = self
            .persisted
            .lock()
            .map_err(|_| anyhow!("Memory storage lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("Simulated write failure"));
        }
        let mut guard = self
            .persisted
            .lock()
            .map_err(|_| anyhow!("Memory storage lock poisoned"))?;
        *guard = Some(transactions.to_vec());
        Ok(())
    }
}
