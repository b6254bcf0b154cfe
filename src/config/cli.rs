use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Filesystem adapter for the `Storage` port. Relative paths resolve against
/// `base`; absolute paths are used as-is, so the CLI can point at inputs
/// anywhere while outputs land under the configured directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base: PathBuf,
}

impl LocalStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.base.join(path))?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories_and_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage
            .write_file("output/quote.csv", b"Item Type,Item Number,Price,Details")
            .await
            .unwrap();

        let read_back = storage.read_file("output/quote.csv").await.unwrap();
        assert_eq!(read_back, b"Item Type,Item Number,Price,Details");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(storage.read_file("pricing_data.csv").await.is_err());
    }

    #[tokio::test]
    async fn test_absolute_path_bypasses_base() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new("some/unused/base");

        let path = temp_dir.path().join("rates.csv");
        std::fs::write(&path, b"Finish,Category,Price_per_sqft").unwrap();

        let data = storage.read_file(path.to_str().unwrap()).await.unwrap();
        assert_eq!(data, b"Finish,Category,Price_per_sqft");
    }
}
