//! Test/fix branch transitions
//!
//! Pure decision logic: given a snapshot of the repository and the action the
//! user asked for, decide which branch to check out and whether a merge request
//! should be opened. Nothing here touches git, the terminal or the network.

use std::fmt;

use thiserror::Error;

use crate::core::branch_name::BranchName;
use crate::core::merge_request::MergeRequestSettings;

/// Why a transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectionKind {
    #[error("Invalid bug id: only digits are allowed")]
    InvalidBugId,

    #[error("The working tree has uncommitted changes, commit or stash them first")]
    DirtyWorkingTree,

    #[error("Not on a test branch (expected {{product}}/test_{{version}})")]
    NotOnTestBranch,

    #[error("Not on a fix branch (expected {{product}}/fix_{{version}}_{{bug}})")]
    NotOnFixBranch,

    #[error("No current branch (detached HEAD?)")]
    NoCurrentBranch,
}

/// A bug id that passed [`validate_bug_id`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugId(String);

impl BugId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate user input as a bug id
///
/// Only ASCII digits are accepted. Missing and empty input are rejected.
///
/// # Errors
/// Returns [`RejectionKind::InvalidBugId`] when the input is missing, empty
/// or contains anything other than digits.
pub fn validate_bug_id(input: Option<&str>) -> Result<BugId, RejectionKind> {
    match input {
        Some(value) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(BugId(value.to_string()))
        }
        _ => Err(RejectionKind::InvalidBugId),
    }
}

/// Snapshot of the repository taken by the caller before deciding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStatus {
    pub current_branch: Option<String>,
    /// No staged, unstaged or untracked changes
    pub is_clean: bool,
    /// Raw `git remote -v` listing
    pub remote_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Branch off the current test branch to fix a bug
    StartFix { bug_id: BugId },
    /// Go back to the test branch and propose the fix for merging
    PromoteToTest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionResult {
    Checkout {
        branch_name: String,
    },
    OpenMergeRequest {
        url: String,
        checkout_branch_name: String,
    },
    Rejected {
        reason: RejectionKind,
    },
}

impl TransitionResult {
    fn rejected(reason: RejectionKind) -> Self {
        Self::Rejected { reason }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BranchWorkflow {
    settings: MergeRequestSettings,
}

impl BranchWorkflow {
    pub fn new(settings: MergeRequestSettings) -> Self {
        Self { settings }
    }

    pub fn decide(&self, status: &RepositoryStatus, request: &TransitionRequest) -> TransitionResult {
        if !status.is_clean {
            return TransitionResult::rejected(RejectionKind::DirtyWorkingTree);
        }

        match request {
            TransitionRequest::StartFix { bug_id } => Self::start_fix(status, bug_id),
            TransitionRequest::PromoteToTest => self.promote_to_test(status),
        }
    }

    fn start_fix(status: &RepositoryStatus, bug_id: &BugId) -> TransitionResult {
        let branch = BranchName::parse(status.current_branch.as_deref());

        if !branch.is_test() {
            return TransitionResult::rejected(RejectionKind::NotOnTestBranch);
        }

        TransitionResult::Checkout {
            branch_name: branch.fix_branch(bug_id.as_str()),
        }
    }

    fn promote_to_test(&self, status: &RepositoryStatus) -> TransitionResult {
        let Some(current) = status.current_branch.as_deref() else {
            return TransitionResult::rejected(RejectionKind::NoCurrentBranch);
        };

        let branch = BranchName::parse(Some(current));

        if !branch.is_fix() {
            return TransitionResult::rejected(RejectionKind::NotOnFixBranch);
        }

        let target = branch.test_branch();

        let url = status
            .remote_url
            .as_deref()
            .and_then(|remotes| self.settings.new_merge_request_url(remotes, current, &target));

        match url {
            Some(url) => TransitionResult::OpenMergeRequest {
                url,
                checkout_branch_name: target,
            },
            None => TransitionResult::Checkout {
                branch_name: target,
            },
        }
    }
}
