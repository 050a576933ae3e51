use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column headers for CSV export, in field order
pub const CSV_HEADER: [&str; 5] = ["Date", "Category", "Type", "Amount", "Description"];

/// A single income or expense entry
///
/// Serialized with exactly the keys `date`, `category`, `type`, `amount` and
/// `description`. Equality is structural over all five fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    /// Free-text label, case-sensitive aggregation key
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount without currency unit
    pub amount: f64,
    /// Optional note, empty when not given
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        transaction_type: TransactionType,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            transaction_type,
            amount,
            description: description.into(),
        }
    }

    /// The `YYYY-MM` prefix of the date.
    ///
    /// Dates shorter than seven characters (only possible for data that was
    /// persisted without validation) are returned whole.
    pub fn month_key(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }

    /// True when the date starts with the given month prefix (exact, case-sensitive)
    pub fn is_in_month(&self, month: &str) -> bool {
        self.date.starts_with(month)
    }
}

/// Kind of transaction; no other values are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(TransactionType::Income),
            "Expense" => Ok(TransactionType::Expense),
            other => Err(UnknownTransactionType(other.to_string())),
        }
    }
}

/// Returned when a string is not exactly `Income` or `Expense`
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownTransactionType(pub String);

impl fmt::Display for UnknownTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown transaction type '{}' (expected Income or Expense)", self.0)
    }
}

impl std::error::Error for UnknownTransactionType {}

/// Raw field values as typed by the user, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub date: String,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: String,
    pub description: String,
}

/// Income, expense and their difference over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Income and expense sums for one month bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthTotals {
    pub income: f64,
    pub expense: f64,
}

impl MonthTotals {
    pub fn add(&mut self, transaction_type: TransactionType, amount: f64) {
        match transaction_type {
            TransactionType::Income => self.income += amount,
            TransactionType::Expense => self.expense += amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Expense sums per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a category, appending the category when first seen
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// `YYYY-MM`
    pub month: String,
    pub totals: MonthTotals,
}

/// Income/expense per month, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    buckets: Vec<MonthBucket>,
}

impl MonthlyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for a month, created empty when first seen
    pub fn bucket_mut(&mut self, month: &str) -> &mut MonthTotals {
        let index = match self.buckets.iter().position(|b| b.month == month) {
            Some(index) => index,
            None => {
                self.buckets.push(MonthBucket {
                    month: month.to_string(),
                    totals: MonthTotals::default(),
                });
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index].totals
    }

    pub fn get(&self, month: &str) -> Option<MonthTotals> {
        self.buckets
            .iter()
            .find(|b| b.month == month)
            .map(|b| b.totals)
    }

    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.month.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Summary plus line items for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: String,
    pub summary: Summary,
    /// Matching transactions in insertion order
    pub transactions: Vec<Transaction>,
}

/// Result of asking for a monthly report.
///
/// `NoData` is a normal outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportOutcome {
    Report(MonthlyReport),
    NoData { month: String },
}

impl ReportOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ReportOutcome::NoData { .. })
    }

    pub fn report(&self) -> Option<&MonthlyReport> {
        match self {
            ReportOutcome::Report(report) => Some(report),
            ReportOutcome::NoData { .. } => None,
        }
    }
}

/// Outcome of writing a CSV export to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub file_path: String,
    pub transaction_count: usize,
}
