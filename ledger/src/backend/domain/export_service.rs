//! Export service for the budget ledger.
//!
//! Writes the rows produced by `ReportService::to_csv_rows` to a CSV sink:
//! any `io::Write`, or a file chosen by the user. Header text and column
//! order are fixed for spreadsheet interoperability.

use anyhow::Context;
use chrono::Local;
use csv::Writer;
use log::{error, info};
use shared::{ExportSummary, Transaction};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::backend::domain::report_service::ReportService;
use crate::backend::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Default)]
pub struct ExportService {
    report_service: ReportService,
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            report_service: ReportService::new(),
        }
    }

    /// Write header and rows to `writer`. Returns the number of transactions written.
    pub fn write_csv<W: Write>(&self, transactions: &[Transaction], writer: W) -> LedgerResult<usize> {
        let mut csv_writer = Writer::from_writer(writer);
        for row in self.report_service.to_csv_rows(transactions) {
            csv_writer
                .write_record(&row)
                .context("Failed to write CSV row")?;
        }
        csv_writer.flush().context("Failed to flush CSV output")?;
        Ok(transactions.len())
    }

    /// CSV export as an in-memory string
    pub fn export_csv_string(&self, transactions: &[Transaction]) -> LedgerResult<String> {
        let mut buffer = Vec::new();
        self.write_csv(transactions, &mut buffer)?;
        String::from_utf8(buffer)
            .context("CSV output was not valid UTF-8")
            .map_err(LedgerError::from)
    }

    /// Export to a file.
    ///
    /// `target` may name a file or an existing directory; a directory (or no
    /// target at all) gets a dated default file name, and no target means the
    /// user's documents folder. An empty collection is refused.
    pub fn export_to_path(
        &self,
        transactions: &[Transaction],
        target: Option<&str>,
    ) -> LedgerResult<ExportSummary> {
        if transactions.is_empty() {
            info!("EXPORT: Nothing to export");
            return Err(LedgerError::NothingToExport);
        }

        let file_path = self.resolve_target(target)?;

        if let Some(parent_dir) = file_path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                fs::create_dir_all(parent_dir)
                    .with_context(|| format!("Failed to create export directory {:?}", parent_dir))?;
            }
        }

        let file = fs::File::create(&file_path).map_err(|e| {
            error!("EXPORT: Failed to create export file {:?}: {}", file_path, e);
            anyhow::Error::new(e).context(format!("Failed to write export file {:?}", file_path))
        })?;
        let count = self.write_csv(transactions, file)?;

        let file_path = file_path.to_string_lossy().to_string();
        info!("EXPORT: Exported {} transactions to {}", count, file_path);
        Ok(ExportSummary {
            file_path,
            transaction_count: count,
        })
    }

    fn resolve_target(&self, target: Option<&str>) -> LedgerResult<PathBuf> {
        let cleaned = target
            .map(|t| self.sanitize_path(t))
            .filter(|t| !t.is_empty());

        let path = match cleaned {
            Some(path) => PathBuf::from(path),
            None => dirs::document_dir()
                .or_else(dirs::home_dir)
                .ok_or_else(|| LedgerError::Config("Could not determine default export directory".to_string()))?,
        };

        if path.is_dir() {
            Ok(path.join(Self::default_file_name()))
        } else {
            Ok(path)
        }
    }

    /// `budget_export_<YYYYMMDD>.csv` for today
    pub fn default_file_name() -> String {
        format!("budget_export_{}.csv", Local::now().format("%Y%m%d"))
    }

    /// Basic path sanitization for user-typed paths
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
        }

        cleaned = cleaned.replace("\\ ", " ");

        while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
            cleaned.pop();
        }

        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}
