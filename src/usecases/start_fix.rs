use std::sync::Arc;

use crate::configs::Config;
use crate::core::ports::{Browser, FileSystem, GitRepository, UserInteraction};
use crate::core::{TransitionRequest, validate_bug_id};
use crate::errors::AppError;
use crate::usecases::transition::TransitionExecutor;

/// Branch `{product}/fix_{version}_{bug}` off the current test branch
pub struct StartFixUseCase {
    ui: Arc<dyn UserInteraction>,
    executor: TransitionExecutor,
}

impl StartFixUseCase {
    pub fn new(
        git: Arc<dyn GitRepository>,
        fs: Arc<dyn FileSystem>,
        ui: Arc<dyn UserInteraction>,
        browser: Arc<dyn Browser>,
        config: &Config,
    ) -> Self {
        let executor = TransitionExecutor::new(git, fs, Arc::clone(&ui), browser, config, false);
        Self { ui, executor }
    }

    /// Returns the name of the fix branch now checked out
    ///
    /// The bug id is asked for when not given.
    pub fn execute(&self, bug_id: Option<&str>) -> Result<String, AppError> {
        let input = match bug_id {
            Some(value) => value.to_string(),
            None => self.ui.prompt("Bug id")?.ok_or(AppError::UserCancelled)?,
        };

        let bug_id = validate_bug_id(Some(&input))?;
        let outcome = self
            .executor
            .run(&TransitionRequest::StartFix { bug_id })?;

        Ok(outcome.branch)
    }
}
