//! Local filesystem dataset source.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::sources::DatasetSource;

/// Dataset stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn fetch(&self) -> Result<String> {
        log::info!("Reading dataset from {}", self.display);
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, r#"{"posts":[]}"#).unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch().await.unwrap(), r#"{"posts":[]}"#);
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(source.fetch().await.is_err());
    }
}
