use std::sync::Arc;

use crate::core::BranchName;
use crate::core::ports::{GitRepository, UserInteraction};
use crate::errors::AppError;

pub struct ShowBranchUseCase {
    git: Arc<dyn GitRepository>,
    ui: Arc<dyn UserInteraction>,
}

impl ShowBranchUseCase {
    pub fn new(git: Arc<dyn GitRepository>, ui: Arc<dyn UserInteraction>) -> Self {
        Self { git, ui }
    }

    /// Print the current branch, its parts and the next step of the workflow
    pub fn execute(&self) -> Result<(), AppError> {
        let status = self.git.status()?;

        let Some(raw) = status.branch else {
            self.ui.print("(no branch)");
            return Ok(());
        };

        let display = raw.replacen("origin/", "", 1);
        let branch = BranchName::parse(Some(&display));

        self.ui.print(&display);
        self.ui.print(&format!("  product: {}", branch.product));
        self.ui.print(&format!("  kind:    {}", branch.kind));
        self.ui.print(&format!("  version: {}", branch.version));

        if !status.is_clean {
            self.ui.print("  (uncommitted changes)");
        }

        if branch.is_test() {
            self.ui.print("Next: bugflow fix <BUG_ID>");
        } else if branch.is_fix() {
            self.ui.print("Next: bugflow promote");
        }

        Ok(())
    }
}
