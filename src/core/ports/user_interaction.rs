use std::io;
use thiserror::Error;

/// Errors that can occur during user interaction
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Interface for user interaction operations
///
/// This trait abstracts user interaction in CLI applications, allowing for
/// different implementations (e.g., terminal, mock for testing).
pub trait UserInteraction: Send + Sync {
    /// Prompts the user for confirmation
    ///
    /// # Arguments
    /// * `message` - The confirmation message to display (e.g., "Create merge request?")
    ///
    /// # Returns
    /// * `Ok(true)` - User confirmed (yes)
    /// * `Ok(false)` - User declined (no)
    /// * `Err` - Failed to read user input
    fn confirm(&self, message: &str) -> Result<bool, InteractionError>;

    /// Prompts the user for a line of free text
    ///
    /// # Returns
    /// * `Ok(Some(text))` - The entered line without its line ending
    /// * `Ok(None)` - Input was closed before anything was entered
    /// * `Err` - Failed to read user input
    fn prompt(&self, message: &str) -> Result<Option<String>, InteractionError>;

    /// Prints a message to the user
    fn print(&self, message: &str);

    /// Prints an error message to the user
    fn print_error(&self, message: &str);
}
