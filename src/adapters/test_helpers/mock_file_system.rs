//! Mock filesystem for testing
//!
//! Provides an in-memory file store with basic operations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::ports::{FileSystem, FileSystemError};

/// Mock filesystem for testing
pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    home_dir: PathBuf,
    force_error: Mutex<Option<FileSystemError>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            home_dir: PathBuf::from("/home/testuser"),
            force_error: Mutex::new(None),
        }
    }

    /// Add a file to the mock filesystem
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.files.lock().unwrap().contains_key(path.as_ref())
    }

    /// Inject an error to be returned on the next operation
    pub fn inject_error(&self, error: FileSystemError) {
        *self.force_error.lock().unwrap() = Some(error);
    }

    fn check_error(&self) -> Result<(), FileSystemError> {
        if let Some(err) = self.force_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn home_dir(&self) -> Result<PathBuf, FileSystemError> {
        self.check_error()?;
        Ok(self.home_dir.clone())
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>, FileSystemError> {
        self.check_error()?;
        Ok(self.files.lock().unwrap().get(path).cloned())
    }

    fn create_new(&self, path: &Path) -> Result<bool, FileSystemError> {
        self.check_error()?;

        let mut files = self.files.lock().unwrap();
        if files.contains_key(path) {
            return Ok(false);
        }
        files.insert(path.to_path_buf(), String::new());
        Ok(true)
    }

    fn remove(&self, path: &Path) -> Result<(), FileSystemError> {
        self.check_error()?;

        self.files.lock().unwrap().remove(path).map(|_| ()).ok_or_else(|| {
            FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File not found",
            ))
        })
    }
}
