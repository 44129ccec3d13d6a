pub mod browser;
pub mod file_system;
pub mod git_repository;
pub mod user_interaction;

pub use browser::{Browser, BrowserError};
pub use file_system::{FileSystem, FileSystemError};
pub use git_repository::{GitError, GitRepository, WorkingTreeStatus};
pub use user_interaction::{InteractionError, UserInteraction};
