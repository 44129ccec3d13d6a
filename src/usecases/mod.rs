pub mod action;
pub mod show_branch;
pub mod start_fix;
pub mod transition;

pub use action::Action;
pub use promote_to_test::PromoteToTestUseCase;
pub use show_branch::ShowBranchUseCase;
pub use start_fix::StartFixUseCase;
