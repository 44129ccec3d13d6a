pub mod ports;

pub mod branch_name;
pub use branch_name::BranchName;

pub mod merge_request;
pub use merge_request::MergeRequestSettings;

pub mod workflow;
pub use workflow::{
    BranchWorkflow, BugId, RejectionKind, RepositoryStatus, TransitionRequest, TransitionResult,
    validate_bug_id,
};

pub mod workflow_lock;
pub use workflow_lock::WorkflowLock;
