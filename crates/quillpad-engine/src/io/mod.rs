//! # Storage
//!
//! The key-value collaborator the article store persists through, and two
//! implementations of it: [`MemoryStore`] and the file-backed [`FileStore`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage quota exceeded: {needed} bytes needed, capacity is {capacity}")]
    QuotaExceeded { needed: usize, capacity: usize },
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("Invalid data directory: {0}")]
    InvalidDataDir(PathBuf),
    #[error("Failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A text key-value store holding whole serialized values under fixed keys.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing is.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Keys are plain names: ASCII letters, digits, `-` and `_`.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("blogArticles", true)]
    #[case("drafts-2024_v1", true)]
    #[case("", false)]
    #[case("../escape", false)]
    #[case("with space", false)]
    fn key_validation(#[case] key: &str, #[case] valid: bool) {
        assert_eq!(validate_key(key).is_ok(), valid);
    }
}
