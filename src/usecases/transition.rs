use std::sync::Arc;

use crate::configs::Config;
use crate::core::ports::{Browser, FileSystem, GitRepository, UserInteraction};
use crate::core::{
    BranchWorkflow, RepositoryStatus, TransitionRequest, TransitionResult, WorkflowLock,
};
use crate::errors::AppError;

/// How the merge request page is handled after a promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserPolicy {
    /// Open the page at all (the URL is printed either way)
    pub open: bool,
    /// Skip the confirmation question
    pub assume_yes: bool,
}

/// What a successful transition did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub branch: String,
    pub merge_request_url: Option<String>,
}

/// Runs one transition: lock, snapshot, decide and check out, then offer the
/// merge request with the lock released
pub struct TransitionExecutor {
    git: Arc<dyn GitRepository>,
    fs: Arc<dyn FileSystem>,
    ui: Arc<dyn UserInteraction>,
    browser: Arc<dyn Browser>,
    workflow: BranchWorkflow,
    remote: String,
    browser_policy: BrowserPolicy,
}

impl TransitionExecutor {
    pub fn new(
        git: Arc<dyn GitRepository>,
        fs: Arc<dyn FileSystem>,
        ui: Arc<dyn UserInteraction>,
        browser: Arc<dyn Browser>,
        config: &Config,
        assume_yes: bool,
    ) -> Self {
        Self {
            git,
            fs,
            ui,
            browser,
            workflow: BranchWorkflow::new(config.merge_request_settings()),
            remote: config.remote.clone(),
            browser_policy: BrowserPolicy {
                open: config.open_browser,
                assume_yes,
            },
        }
    }

    pub fn run(&self, request: &TransitionRequest) -> Result<TransitionOutcome, AppError> {
        let (branch, merge_request_url) = self.switch_branch(request)?;

        if let Some(url) = &merge_request_url {
            self.offer_merge_request(url)?;
        }

        Ok(TransitionOutcome {
            branch,
            merge_request_url,
        })
    }

    /// Decide and check out under the workflow lock
    ///
    /// The lock is released before returning, so the merge request prompt
    /// runs without it.
    fn switch_branch(
        &self,
        request: &TransitionRequest,
    ) -> Result<(String, Option<String>), AppError> {
        let git_dir = self.git.git_dir()?;
        let Some(_lock) = WorkflowLock::acquire(Arc::clone(&self.fs), &git_dir)? else {
            return Err(AppError::Busy {
                lock: WorkflowLock::path_for(&git_dir).display().to_string(),
            });
        };

        let status = self.snapshot()?;
        let result = self.workflow.decide(&status, request);
        tracing::info!(?request, ?result, "decided transition");

        let (branch, url) = match result {
            TransitionResult::Rejected { reason } => return Err(reason.into()),
            TransitionResult::Checkout { branch_name } => (branch_name, None),
            TransitionResult::OpenMergeRequest {
                url,
                checkout_branch_name,
            } => (checkout_branch_name, Some(url)),
        };

        match request {
            TransitionRequest::StartFix { .. } => {
                self.branch_off(&branch, status.current_branch.as_deref())?;
            }
            TransitionRequest::PromoteToTest => self.return_to(&branch)?,
        }
        self.ui.print(&format!("Switched to branch: {branch}"));

        Ok((branch, url))
    }

    /// Capture the repository state once, before deciding
    fn snapshot(&self) -> Result<RepositoryStatus, AppError> {
        let working_tree = self.git.status()?;
        let remote_url = self.git.remotes()?;

        tracing::debug!(
            branch = ?working_tree.branch,
            clean = working_tree.is_clean,
            has_remotes = remote_url.is_some(),
            "repository snapshot"
        );

        Ok(RepositoryStatus {
            current_branch: working_tree.branch,
            is_clean: working_tree.is_clean,
            remote_url,
        })
    }

    /// Switch to the fix branch `branch`, creating it from `start_point` when missing
    fn branch_off(&self, branch: &str, start_point: Option<&str>) -> Result<(), AppError> {
        match start_point {
            Some(start) if !self.git.local_branch_exists(branch)? => {
                tracing::info!(%branch, %start, "creating branch");
                self.git.create_branch(branch, start)?;
            }
            _ => {
                tracing::info!(%branch, "checking out branch");
                self.git.checkout(branch)?;
            }
        }

        Ok(())
    }

    /// Switch back to the test branch `branch`
    ///
    /// A test branch known only on the configured remote is created from the
    /// remote-tracking ref with upstream tracking. It is never created from
    /// the fix branch.
    fn return_to(&self, branch: &str) -> Result<(), AppError> {
        if !self.git.local_branch_exists(branch)?
            && self.git.remote_branch_exists(&self.remote, branch)?
        {
            let upstream = format!("{}/{branch}", self.remote);
            tracing::info!(%branch, %upstream, "tracking remote branch");
            self.git.track_branch(branch, &upstream)?;
        } else {
            tracing::info!(%branch, "checking out branch");
            self.git.checkout(branch)?;
        }

        Ok(())
    }

    fn offer_merge_request(&self, url: &str) -> Result<(), AppError> {
        self.ui.print(&format!("Merge request: {url}"));

        if !self.browser_policy.open {
            return Ok(());
        }

        if !self.browser_policy.assume_yes && !self.ui.confirm("Open the merge request page?")? {
            return Ok(());
        }

        if let Err(e) = self.browser.open(url) {
            tracing::warn!(error = %e, "could not open browser");
            self.ui.print_error(&format!("Warning: {e}"));
        }

        Ok(())
    }
}
