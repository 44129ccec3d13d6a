use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::ports::{FileSystem, FileSystemError};

pub const LOCK_FILE_NAME: &str = "bugflow.lock";

/// Exclusive lock on a working tree for the duration of one transition
///
/// The lock is a file inside the git directory created with create-new
/// semantics, so two processes cannot both hold it. It is removed on drop.
pub struct WorkflowLock {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl WorkflowLock {
    /// Try to take the lock for the repository whose git directory is `git_dir`
    ///
    /// # Returns
    /// * `Ok(Some(lock))` - The lock is held until the guard drops
    /// * `Ok(None)` - Another transition holds the lock
    /// * `Err` - The lock file could not be created
    pub fn acquire(fs: Arc<dyn FileSystem>, git_dir: &Path) -> Result<Option<Self>, FileSystemError> {
        let path = Self::path_for(git_dir);

        if !fs.create_new(&path)? {
            return Ok(None);
        }

        tracing::debug!(lock = %path.display(), "acquired workflow lock");
        Ok(Some(Self { fs, path }))
    }

    /// Location of the lock file for the repository whose git directory is `git_dir`
    pub fn path_for(git_dir: &Path) -> PathBuf {
        git_dir.join(LOCK_FILE_NAME)
    }
}

impl Drop for WorkflowLock {
    fn drop(&mut self) {
        match self.fs.remove(&self.path) {
            Ok(()) => tracing::debug!(lock = %self.path.display(), "released workflow lock"),
            Err(e) => {
                tracing::warn!(lock = %self.path.display(), error = %e, "failed to release workflow lock");
            }
        }
    }
}

impl std::fmt::Debug for WorkflowLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowLock").field("path", &self.path).finish()
    }
}
