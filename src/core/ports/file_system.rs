use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),
}

pub trait FileSystem: Send + Sync {
    /// Get the home directory path
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The absolute path to the user's home directory
    /// * `Err` - If the home directory cannot be determined
    fn home_dir(&self) -> Result<PathBuf, FileSystemError>;

    /// Read a whole file as UTF-8
    ///
    /// # Returns
    /// * `Ok(Some(content))` - The file content
    /// * `Ok(None)` - The file does not exist
    /// * `Err` - The file exists but cannot be read
    fn read_to_string(&self, path: &Path) -> Result<Option<String>, FileSystemError>;

    /// Create an empty file, failing if anything already exists at `path`
    ///
    /// # Returns
    /// * `Ok(true)` - The file was created
    /// * `Ok(false)` - Something already exists at `path`
    /// * `Err` - The file cannot be created
    fn create_new(&self, path: &Path) -> Result<bool, FileSystemError>;

    /// Remove a file
    fn remove(&self, path: &Path) -> Result<(), FileSystemError>;
}
