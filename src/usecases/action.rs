use crate::errors::AppError;

/// Workflow actions addressed by number
///
/// | code | action                                     |
/// |------|--------------------------------------------|
/// | 0    | start a fix branch (asks for the bug id)   |
/// | 1    | promote to the test branch, merge request  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartFix,
    PromoteToTest,
}

impl TryFrom<u8> for Action {
    type Error = AppError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Action::StartFix),
            1 => Ok(Action::PromoteToTest),
            other => Err(AppError::UnknownAction(other)),
        }
    }
}
