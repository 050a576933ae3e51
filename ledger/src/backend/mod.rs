//! # Backend Module
//!
//! All non-UI logic of the budget ledger. Any front end (the bundled text
//! binary, a GUI, a test harness) talks to the `Backend` and never to files.
//!
//! ## Architecture
//!
//! ```text
//! UI (text binary, GUI)
//!     ↓
//! Backend (service wiring, config)
//!     ↓
//! Domain (store, aggregations, reports, export)
//!     ↓
//! Storage (JSON / CSV / memory adapters)
//! ```
//!
//! All operations are synchronous and single-threaded.

use log::info;
use shared::{CategoryTotals, ExportSummary, MonthlyTotals, ReportOutcome, Summary};

pub mod config;
pub mod domain;
pub mod error;
pub mod storage;

pub use config::{LedgerConfig, StorageFormat};
pub use error::{LedgerError, LedgerResult};

use domain::{ExportService, ReportService, SummaryService, TransactionService};
use storage::{CsvTransactionRepository, FileConnection, JsonTransactionRepository, TransactionStorage};

/// Main backend struct that wires the store to its storage and the reporting services
pub struct Backend {
    pub transaction_service: TransactionService<Box<dyn TransactionStorage>>,
    pub report_service: ReportService,
    pub export_service: ExportService,
    config: LedgerConfig,
}

impl Backend {
    /// Open the data file described by `config` and load it
    pub fn new(config: LedgerConfig) -> LedgerResult<Self> {
        let connection = FileConnection::new(&config.data_directory)?;
        let file_name = config.data_file_name();

        let storage: Box<dyn TransactionStorage> = match config.storage_format {
            StorageFormat::Json => Box::new(JsonTransactionRepository::new(&connection, &file_name)),
            StorageFormat::Csv => Box::new(CsvTransactionRepository::new(&connection, &file_name)),
        };
        info!(
            "Opening {:?} ledger at {}",
            config.storage_format,
            connection.data_file_path(&file_name).display()
        );

        Self::with_storage(config, storage)
    }

    /// Backend over an arbitrary storage adapter
    pub fn with_storage(config: LedgerConfig, storage: Box<dyn TransactionStorage>) -> LedgerResult<Self> {
        Ok(Self {
            transaction_service: TransactionService::open(storage)?,
            report_service: ReportService::new(),
            export_service: ExportService::new(),
            config,
        })
    }

    /// Backend for the default data directory and its config file
    pub fn from_environment() -> LedgerResult<Self> {
        Self::new(LedgerConfig::from_environment()?)
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Totals over the whole ledger
    pub fn summary(&self) -> Summary {
        SummaryService::summary(self.transaction_service.all())
    }

    pub fn expenses_by_category(&self) -> CategoryTotals {
        SummaryService::by_category(self.transaction_service.all())
    }

    pub fn totals_by_month(&self) -> MonthlyTotals {
        SummaryService::by_month(self.transaction_service.all())
    }

    pub fn monthly_report(&self, month: &str) -> ReportOutcome {
        self.report_service
            .monthly_report(self.transaction_service.all(), month)
    }

    /// Export the whole ledger as CSV to `target` (file or directory)
    pub fn export(&self, target: Option<&str>) -> LedgerResult<ExportSummary> {
        self.export_service
            .export_to_path(self.transaction_service.all(), target)
    }
}
