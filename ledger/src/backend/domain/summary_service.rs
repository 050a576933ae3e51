//! Aggregation over transaction collections.
//!
//! All functions are pure: they take any iterable of transaction references
//! (a slice, a `Vec`, a filtered iterator) and never touch storage.

use shared::{CategoryTotals, MonthlyTotals, Summary, Transaction, TransactionType};

/// Stateless totals, category sums and month buckets
pub struct SummaryService;

impl SummaryService {
    /// Sum of amounts of the given type; 0 for no input
    pub fn total_by_type<'a, I>(transactions: I, transaction_type: TransactionType) -> f64
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .filter(|t| t.transaction_type == transaction_type)
            .map(|t| t.amount)
            .sum()
    }

    /// Income, expense and `balance = income - expense`
    pub fn summary<'a, I>(transactions: I) -> Summary
    where
        I: IntoIterator<Item = &'a Transaction>,
        I::IntoIter: Clone,
    {
        let iter = transactions.into_iter();
        let income = Self::total_by_type(iter.clone(), TransactionType::Income);
        let expense = Self::total_by_type(iter, TransactionType::Expense);
        Summary {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Expense amounts summed per category, in first-seen order.
    ///
    /// Income transactions are ignored, so a category that only ever
    /// received income does not appear.
    pub fn by_category<'a, I>(transactions: I) -> CategoryTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = CategoryTotals::new();
        for transaction in transactions
            .into_iter()
            .filter(|t| t.transaction_type == TransactionType::Expense)
        {
            totals.add(&transaction.category, transaction.amount);
        }
        totals
    }

    /// Income and expense per `YYYY-MM` month key, in first-seen order
    pub fn by_month<'a, I>(transactions: I) -> MonthlyTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut months = MonthlyTotals::new();
        for transaction in transactions {
            months
                .bucket_mut(transaction.month_key())
                .add(transaction.transaction_type, transaction.amount);
        }
        months
    }
}
