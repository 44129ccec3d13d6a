use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf, absolute};

use crate::core::ports::{FileSystem, FileSystemError};

#[derive(Debug)]
pub struct UnixFs;

impl UnixFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnixFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for UnixFs {
    fn home_dir(&self) -> Result<PathBuf, FileSystemError> {
        dirs::home_dir()
            .and_then(|path| absolute(&path).ok())
            .ok_or_else(|| FileSystemError::PathError("Home directory not found".into()))
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>, FileSystemError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_new(&self, path: &Path) -> Result<bool, FileSystemError> {
        match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::remove_file(path)?;
        Ok(())
    }
}
