use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Failed to execute git command: {0}")]
    Execution(String),

    #[error("Git command failed with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },

    #[error("Failed to parse git output: {0}")]
    Parse(String),
}

/// Branch and cleanliness as reported by `git status`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    /// `None` on a detached HEAD
    pub branch: Option<String>,
    pub is_clean: bool,
}

pub trait GitRepository: Send + Sync {
    /// Absolute path of the `.git` directory of the current repository
    fn git_dir(&self) -> Result<PathBuf, GitError>;

    fn status(&self) -> Result<WorkingTreeStatus, GitError>;

    /// Raw `git remote -v` listing, `None` when no remote is configured
    fn remotes(&self) -> Result<Option<String>, GitError>;

    fn local_branch_exists(&self, branch: &str) -> Result<bool, GitError>;

    /// Whether `remote` has a remote-tracking ref for `branch`
    fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool, GitError>;

    /// Switch to an existing branch
    fn checkout(&self, branch: &str) -> Result<(), GitError>;

    /// Create `branch` at `start_point` and switch to it
    fn create_branch(&self, branch: &str, start_point: &str) -> Result<(), GitError>;

    /// Create `branch` from the remote-tracking ref `upstream`, set it as the
    /// upstream of the new branch and switch to it
    fn track_branch(&self, branch: &str, upstream: &str) -> Result<(), GitError>;
}
