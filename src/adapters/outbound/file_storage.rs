use crate::common::{DomainError, DomainResult};
use crate::domains::path_tracking::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key-value storage on the local filesystem: one `<key>.json` file per key
/// inside `base`. Writes go through a temporary file and a rename so a crash
/// never leaves a half-written value behind.
pub struct FileKeyValueStore {
    base: PathBuf,
}

impl FileKeyValueStore {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{}.json", key))
    }

    fn storage_error(key: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Storage {
            key: key.to_string(),
            reason: e.to_string(),
        }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        match fs::read_to_string(self.file_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::storage_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        fs::create_dir_all(&self.base).map_err(|e| Self::storage_error(key, e))?;
        let target = self.file_path(key);
        let tmp = self.base.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value).map_err(|e| Self::storage_error(key, e))?;
        fs::rename(&tmp, &target).map_err(|e| Self::storage_error(key, e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::storage_error(key, e)),
        }
    }
}
