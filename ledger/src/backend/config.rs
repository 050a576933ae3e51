//! # Ledger Configuration
//!
//! Optional YAML file `ledger_config.yaml` at the root of the data directory
//! that picks the storage format and the data file name.
//!
//! ```yaml
//! storage_format: csv
//! data_file: household.csv
//! ```
//!
//! Both keys are optional. Without the file the ledger uses
//! `budget_data.json` in JSON format.

use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::error::{LedgerError, LedgerResult};

pub const CONFIG_FILE_NAME: &str = "ledger_config.yaml";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_LEDGER_DIR";

const DEFAULT_DATA_FILE_STEM: &str = "budget_data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Csv,
}

impl StorageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            StorageFormat::Json => "json",
            StorageFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Where the data file lives; taken from the environment, never from YAML
    #[serde(skip)]
    pub data_directory: PathBuf,
    /// File name inside the data directory; defaults to `budget_data.<ext>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
    #[serde(default)]
    pub storage_format: StorageFormat,
}

impl LedgerConfig {
    /// Defaults rooted at `data_directory`
    pub fn with_directory<P: AsRef<Path>>(data_directory: P) -> Self {
        Self {
            data_directory: data_directory.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Read `ledger_config.yaml` from `data_directory`, falling back to
    /// defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(data_directory: P) -> LedgerResult<Self> {
        let data_directory = data_directory.as_ref();
        let config_path = data_directory.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            debug!("No {} in {:?}, using defaults", CONFIG_FILE_NAME, data_directory);
            return Ok(Self::with_directory(data_directory));
        }

        let yaml_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {:?}", config_path))?;
        let mut config: LedgerConfig = serde_yaml::from_str(&yaml_content)
            .map_err(|e| LedgerError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.data_directory = data_directory.to_path_buf();

        if let Some(name) = &config.data_file {
            if name.trim().is_empty() || Path::new(name).components().count() != 1 {
                return Err(LedgerError::Config(format!(
                    "data_file must be a plain file name, got '{}'",
                    name
                )));
            }
        }

        info!(
            "Loaded config from {:?}: {:?} storage in {}",
            config_path,
            config.storage_format,
            config.data_file_name()
        );
        Ok(config)
    }

    /// Load from the default data directory
    pub fn from_environment() -> LedgerResult<Self> {
        let directory = default_data_directory().ok_or_else(|| {
            LedgerError::Config("Could not determine a data directory".to_string())
        })?;
        Self::load_or_default(directory)
    }

    /// Write this config as `ledger_config.yaml` in its data directory
    pub fn save(&self) -> LedgerResult<()> {
        fs::create_dir_all(&self.data_directory)
            .with_context(|| format!("Failed to create {:?}", self.data_directory))?;
        let yaml_content = serde_yaml::to_string(self)
            .map_err(|e| LedgerError::Config(e.to_string()))?;
        let config_path = self.data_directory.join(CONFIG_FILE_NAME);
        fs::write(&config_path, yaml_content)
            .with_context(|| format!("Failed to write {:?}", config_path))?;
        debug!("Saved config to {:?}", config_path);
        Ok(())
    }

    pub fn data_file_name(&self) -> String {
        match &self.data_file {
            Some(name) => name.clone(),
            None => format!("{}.{}", DEFAULT_DATA_FILE_STEM, self.storage_format.extension()),
        }
    }
}

/// `$BUDGET_LEDGER_DIR`, else `<Documents>/Budget Ledger`, else the home directory
pub fn default_data_directory() -> Option<PathBuf> {
    data_directory_from(std::env::var_os(DATA_DIR_ENV))
}

fn data_directory_from(env_value: Option<OsString>) -> Option<PathBuf> {
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }
    dirs::document_dir()
        .map(|docs| docs.join("Budget Ledger"))
        .or_else(dirs::home_dir)
        .or_else(|| Some(PathBuf::from(".")))
}
