//! Monthly reports and export rows.
//!
//! Builds the structures the presentation layer renders: a per-month report
//! (or a no-data marker), plain-text renderings of reports and dashboard
//! summaries, and the row sequence used for CSV export.

use shared::{MonthlyReport, ReportOutcome, Summary, Transaction, CSV_HEADER};

use crate::backend::domain::summary_service::SummaryService;

pub const NO_DATA_MESSAGE: &str = "No data for this month.";

/// Amount as a float literal: `20.0`, `700.5`. Shortest text that reads back equal.
pub fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}

#[derive(Debug, Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Report for every transaction whose date starts with `month`.
    ///
    /// The prefix is matched verbatim; `month` is not checked for format.
    /// An empty match is `ReportOutcome::NoData`, not an error. A blank
    /// month matches nothing.
    pub fn monthly_report(&self, transactions: &[Transaction], month: &str) -> ReportOutcome {
        if month.trim().is_empty() {
            return ReportOutcome::NoData {
                month: month.to_string(),
            };
        }

        let matching: Vec<Transaction> = transactions
            .iter()
            .filter(|t| t.is_in_month(month))
            .cloned()
            .collect();

        if matching.is_empty() {
            return ReportOutcome::NoData {
                month: month.to_string(),
            };
        }

        ReportOutcome::Report(MonthlyReport {
            month: month.to_string(),
            summary: SummaryService::summary(&matching),
            transactions: matching,
        })
    }

    /// Header row followed by one row per transaction, in order
    pub fn to_csv_rows(&self, transactions: &[Transaction]) -> Vec<Vec<String>> {
        let header: Vec<String> = CSV_HEADER.iter().map(|h| h.to_string()).collect();
        std::iter::once(header)
            .chain(transactions.iter().map(Self::csv_row))
            .collect()
    }

    fn csv_row(transaction: &Transaction) -> Vec<String> {
        vec![
            transaction.date.clone(),
            transaction.category.clone(),
            transaction.transaction_type.to_string(),
            format_amount(transaction.amount),
            transaction.description.clone(),
        ]
    }

    /// Plain-text rendering of a report outcome
    pub fn render_report(&self, outcome: &ReportOutcome) -> String {
        let report = match outcome {
            ReportOutcome::NoData { .. } => return NO_DATA_MESSAGE.to_string(),
            ReportOutcome::Report(report) => report,
        };

        let mut text = format!("Report for {}\n", report.month);
        text.push_str(&self.render_summary(&report.summary));
        text.push_str("\nTransactions:\n");
        for transaction in &report.transactions {
            text.push_str(&format!(
                "{} - {} - {} - {} - {}\n",
                transaction.date,
                transaction.category,
                transaction.transaction_type,
                format_amount(transaction.amount),
                transaction.description
            ));
        }
        text
    }

    /// Dashboard-style totals with two decimals
    pub fn render_summary(&self, summary: &Summary) -> String {
        format!(
            "Total Income: {:.2}\nTotal Expenses: {:.2}\nBalance: {:.2}\n",
            summary.income, summary.expense, summary.balance
        )
    }
}
