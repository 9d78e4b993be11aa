//! File-based key-value backend.
//!
//! Each key is stored as a `{key}.json` file under a base directory, so the
//! data directory stays inspectable and individual collections can be backed
//! up or deleted by hand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{error, warn};

use super::traits::KeyValueBackend;

/// Backend persisting every key as a file under a base directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    base_directory: PathBuf,
}

impl FileBackend {
    /// Create a new file backend rooted at `base_directory`.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Base directory holding the key files.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let path = self.key_path(key);
        // Write to a temp file first so a failed write leaves the old value intact.
        let tmp_path = self.base_directory.join(format!("{}.json.tmp", key));
        if let Err(e) = fs::write(&tmp_path, value) {
            error!("Failed to write {}: {}", tmp_path.display(), e);
            return false;
        }
        if let Err(e) = fs::rename(&tmp_path, &path) {
            error!("Failed to replace {}: {}", path.display(), e);
            let _ = fs::remove_file(&tmp_path);
            return false;
        }
        true
    }

    fn remove(&self, key: &str) -> bool {
        let path = self.key_path(key);
        if !path.exists() {
            return false;
        }
        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to remove {}: {}", path.display(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path()).unwrap();

        assert!(backend.get("prices").is_none());
        assert!(backend.set("prices", "{\"a\":1}"));
        assert_eq!(backend.get("prices").as_deref(), Some("{\"a\":1}"));
        assert!(temp_dir.path().join("prices.json").exists());

        assert!(backend.remove("prices"));
        assert!(backend.get("prices").is_none());
    }

    #[test]
    fn test_creates_missing_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("recycling");
        let backend = FileBackend::new(&nested).unwrap();

        assert!(nested.exists());
        assert!(backend.set("counters", "{}"));
        assert!(nested.join("counters.json").exists());
    }
}
