//! Mock Git repository for testing
//!
//! Simulates a single working tree: current branch, local branches,
//! cleanliness and remotes, and records every mutation.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::core::ports::{GitError, GitRepository, WorkingTreeStatus};

/// Mutation recorded by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOperation {
    Checkout(String),
    CreateBranch { branch: String, start_point: String },
    TrackBranch { branch: String, upstream: String },
}

/// Mock Git repository for testing
pub struct MockGitRepository {
    git_dir: PathBuf,
    current_branch: Mutex<Option<String>>,
    is_clean: Mutex<bool>,
    remotes: Mutex<Option<String>>,
    local_branches: Mutex<Vec<String>>,
    remote_branches: Mutex<Vec<String>>,
    operations: Mutex<Vec<GitOperation>>,
    force_error: Mutex<Option<GitError>>,
    fail_switch: Mutex<bool>,
}

impl MockGitRepository {
    pub fn new() -> Self {
        Self {
            git_dir: PathBuf::from("/work/repo/.git"),
            current_branch: Mutex::new(None),
            is_clean: Mutex::new(true),
            remotes: Mutex::new(None),
            local_branches: Mutex::new(Vec::new()),
            remote_branches: Mutex::new(Vec::new()),
            operations: Mutex::new(Vec::new()),
            force_error: Mutex::new(None),
            fail_switch: Mutex::new(false),
        }
    }

    pub fn git_dir_path(&self) -> PathBuf {
        self.git_dir.clone()
    }

    /// Check out `branch`, adding it to the local branches
    pub fn set_current_branch(&self, branch: impl Into<String>) {
        let branch = branch.into();
        self.add_local_branch(branch.clone());
        *self.current_branch.lock().unwrap() = Some(branch);
    }

    pub fn get_current_branch(&self) -> Option<String> {
        self.current_branch.lock().unwrap().clone()
    }

    pub fn set_clean(&self, is_clean: bool) {
        *self.is_clean.lock().unwrap() = is_clean;
    }

    /// Set the raw `git remote -v` listing
    pub fn set_remotes(&self, remotes: impl Into<String>) {
        *self.remotes.lock().unwrap() = Some(remotes.into());
    }

    /// Add a local branch
    pub fn add_local_branch(&self, branch: impl Into<String>) {
        let branch = branch.into();
        let mut branches = self.local_branches.lock().unwrap();
        if !branches.contains(&branch) {
            branches.push(branch);
        }
    }

    /// Add a remote-tracking branch, e.g. `origin/payments/test_3`
    pub fn add_remote_branch(&self, remote: &str, branch: &str) {
        self.remote_branches
            .lock()
            .unwrap()
            .push(format!("{remote}/{branch}"));
    }

    /// Inject an error to be returned on the next operation
    pub fn inject_error(&self, error: GitError) {
        *self.force_error.lock().unwrap() = Some(error);
    }

    /// Make every following checkout and branch creation fail
    pub fn fail_on_switch(&self) {
        *self.fail_switch.lock().unwrap() = true;
    }

    fn check_switch(&self) -> Result<(), GitError> {
        if *self.fail_switch.lock().unwrap() {
            return Err(GitError::Failed {
                status: 1,
                stderr: "error: Your local changes would be overwritten by checkout".into(),
            });
        }
        Ok(())
    }

    /// Get the recorded mutations (for assertions)
    pub fn get_operations(&self) -> Vec<GitOperation> {
        self.operations.lock().unwrap().clone()
    }

    fn check_error(&self) -> Result<(), GitError> {
        if let Some(err) = self.force_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }

    fn branch_exists(&self, branch: &str) -> bool {
        self.local_branches
            .lock()
            .unwrap()
            .iter()
            .any(|b| b == branch)
    }
}

impl Default for MockGitRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRepository for MockGitRepository {
    fn git_dir(&self) -> Result<PathBuf, GitError> {
        self.check_error()?;
        Ok(self.git_dir.clone())
    }

    fn status(&self) -> Result<WorkingTreeStatus, GitError> {
        self.check_error()?;

        Ok(WorkingTreeStatus {
            branch: self.current_branch.lock().unwrap().clone(),
            is_clean: *self.is_clean.lock().unwrap(),
        })
    }

    fn remotes(&self) -> Result<Option<String>, GitError> {
        self.check_error()?;
        Ok(self.remotes.lock().unwrap().clone())
    }

    fn local_branch_exists(&self, branch: &str) -> Result<bool, GitError> {
        self.check_error()?;
        Ok(self.branch_exists(branch))
    }

    fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool, GitError> {
        self.check_error()?;

        let upstream = format!("{remote}/{branch}");
        Ok(self.remote_branches.lock().unwrap().contains(&upstream))
    }

    fn checkout(&self, branch: &str) -> Result<(), GitError> {
        self.check_error()?;
        self.check_switch()?;

        if !self.branch_exists(branch) {
            return Err(GitError::Failed {
                status: 1,
                stderr: format!("error: pathspec '{branch}' did not match any file(s) known to git"),
            });
        }

        self.operations
            .lock()
            .unwrap()
            .push(GitOperation::Checkout(branch.to_string()));
        *self.current_branch.lock().unwrap() = Some(branch.to_string());

        Ok(())
    }

    fn create_branch(&self, branch: &str, start_point: &str) -> Result<(), GitError> {
        self.check_error()?;
        self.check_switch()?;

        if self.branch_exists(branch) {
            return Err(GitError::Failed {
                status: 128,
                stderr: format!("fatal: a branch named '{branch}' already exists"),
            });
        }

        self.operations.lock().unwrap().push(GitOperation::CreateBranch {
            branch: branch.to_string(),
            start_point: start_point.to_string(),
        });
        self.add_local_branch(branch);
        *self.current_branch.lock().unwrap() = Some(branch.to_string());

        Ok(())
    }

    fn track_branch(&self, branch: &str, upstream: &str) -> Result<(), GitError> {
        self.check_error()?;
        self.check_switch()?;

        if !self.remote_branches.lock().unwrap().iter().any(|b| b == upstream) {
            return Err(GitError::Failed {
                status: 128,
                stderr: format!("fatal: '{upstream}' is not a commit"),
            });
        }

        self.operations.lock().unwrap().push(GitOperation::TrackBranch {
            branch: branch.to_string(),
            upstream: upstream.to_string(),
        });
        self.add_local_branch(branch);
        *self.current_branch.lock().unwrap() = Some(branch.to_string());

        Ok(())
    }
}
