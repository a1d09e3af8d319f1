//! File-backed `KeyValueStore`.
//!
//! Each key maps to `<root>/<key>.json`. Writes go to a temporary sibling
//! and are renamed into place, so a crash mid-write leaves either the old
//! or the new value, never a truncated one.

use std::fs::{self, File};
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use creatorlink_core::error::DomainError;
use creatorlink_core::storage::KeyValueStore;
use tracing::debug;

/// A durable store rooted at a directory. The directory is the storage
/// scope: two stores with different roots share nothing.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the directory cannot be
    /// created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| io_error(&root, &e))?;
        debug!(root = %root.display(), "opened file store");
        Ok(Self { root })
    }

    /// Returns the directory backing this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(DomainError::Infrastructure(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(path: &Path, err: &std::io::Error) -> DomainError {
    DomainError::Infrastructure(format!("{}: {err}", path.display()))
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), DomainError> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("record");
    let tmp = path.with_file_name(format!(".{file_name}.tmp.{}", std::process::id()));
    {
        let mut file = File::create(&tmp).map_err(|e| io_error(&tmp, &e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| io_error(&tmp, &e))?;
        file.sync_all().map_err(|e| io_error(&tmp, &e))?;
    }
    fs::rename(&tmp, path).map_err(|e| io_error(path, &e))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, &e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        write_atomic(&path, value)
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, &e)),
        }
    }
}
