use thiserror::Error;

use crate::configs::ConfigError;
use crate::core::RejectionKind;
use crate::core::ports::{FileSystemError, GitError, InteractionError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("Interaction error: {0}")]
    Interaction(#[from] InteractionError),

    #[error("{0}")]
    Rejected(#[from] RejectionKind),

    #[error("Another bugflow command is running on this repository (lock: {lock})")]
    Busy { lock: String },

    #[error("Unknown action code: {0} (expected 0 = fix, 1 = promote)")]
    UnknownAction(u8),

    #[error("Operation cancelled by user")]
    UserCancelled,
}
