use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError, validate_key};

/// Key-value store keeping one `<key>.json` file per key in a data directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so an
/// interrupted write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub const EXTENSION: &'static str = "json";

    /// Opens a store over an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        validate_data_dir(&root)?;
        Ok(Self { root })
    }

    /// Opens a store, creating the directory (and its parents) if needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Self::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        Ok(Self::relative_path(key)?.to_path(&self.root))
    }

    fn relative_path(key: &str) -> Result<RelativePathBuf, StorageError> {
        validate_key(key)?;
        Ok(RelativePath::new(key).with_extension(Self::EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn validate_data_dir(path: &Path) -> Result<(), StorageError> {
    if !path.exists() || !path.is_dir() {
        return Err(StorageError::InvalidDataDir(path.to_path_buf()));
    }

    Ok(())
}
