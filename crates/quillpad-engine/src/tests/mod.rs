use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary data directory
pub fn create_test_data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a raw stored value the way a previous session would have left it
pub fn create_test_file(data_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = data_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
