use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary content directory for tests
pub fn create_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a post file with content inside a test content directory
pub fn create_post_file(content_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
