use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// FileConnection owns the data directory and resolves data file paths inside it
#[derive(Debug, Clone)]
pub struct FileConnection {
    base_directory: PathBuf,
}

impl FileConnection {
    /// Create a new connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Path of a data file inside the base directory
    pub fn data_file_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("a").join("b");

        let connection = FileConnection::new(&nested)?;

        assert!(nested.is_dir());
        assert_eq!(connection.base_directory(), nested.as_path());
        assert_eq!(
            connection.data_file_path("budget_data.json"),
            nested.join("budget_data.json")
        );
        Ok(())
    }

    #[test]
    fn test_new_keeps_existing_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let data_file = temp_dir.path().join("budget_data.json");
        fs::write(&data_file, "[]")?;

        let connection = FileConnection::new(temp_dir.path())?;

        assert_eq!(connection.data_file_path("budget_data.json"), data_file);
        assert_eq!(fs::read_to_string(&data_file)?, "[]");
        Ok(())
    }
}
