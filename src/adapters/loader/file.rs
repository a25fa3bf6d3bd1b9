//! # File Loader
//!
//! Loads configuration records from a JSON file on disk.
//!
//! The only I/O in the crate happens here. A missing or unreadable file is
//! reported as `FileNotFound`; invalid JSON as `Parse`.

use super::normalize;
use crate::core::ConfigRecord;
use crate::ports::{Load, LoadError, LoadResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Loader over a JSON configuration file.
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    /// Wrap a file path as a loader source. The file is not touched until
    /// `load` is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Load for FileLoader {
    fn load(&self) -> LoadResult<Vec<ConfigRecord>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|_| LoadError::FileNotFound(self.path.clone()))?;

        let value: Value = serde_json::from_str(&content)?;
        let records = normalize(&value)?;

        log::debug!(
            "loaded {} record(s) from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_loader_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "type": "ScriptAsset", "url": "app.js", "handle": "app" }}]"#
        )
        .unwrap();

        let loader = FileLoader::new(file.path());
        let records = loader.load().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get_str("handle"), Some("app"));
    }

    #[test]
    fn test_file_loader_missing_file() {
        let loader = FileLoader::new("/definitely/not/here.json");

        let result = loader.load();

        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_file_loader_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let loader = FileLoader::new(file.path());
        let result = loader.load();

        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_file_loader_matches_array_loader() {
        let text = r#"{ "backend": [ { "type": "StyleAsset", "url": "admin.css", "handle": "admin" } ] }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{text}").unwrap();

        let from_file = FileLoader::new(file.path()).load().unwrap();
        let from_value = crate::adapters::loader::ArrayLoader::new(
            serde_json::from_str(text).unwrap(),
        )
        .load()
        .unwrap();

        assert_eq!(from_file, from_value);
    }
}
