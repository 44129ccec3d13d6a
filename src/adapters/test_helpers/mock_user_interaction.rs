//! Mock user interaction for testing
//!
//! Provides a mock implementation of user interaction for testing.

use std::sync::Mutex;

use crate::core::ports::{InteractionError, UserInteraction};

/// Mock user interaction for testing
pub struct MockUserInteraction {
    confirm_responses: Mutex<Vec<bool>>,
    prompt_responses: Mutex<Vec<Option<String>>>,
    printed_messages: Mutex<Vec<String>>,
    error_messages: Mutex<Vec<String>>,
    asked: Mutex<Vec<String>>,
}

impl UserInteraction for MockUserInteraction {
    fn confirm(&self, message: &str) -> Result<bool, InteractionError> {
        self.asked.lock().unwrap().push(message.to_string());

        let mut responses = self.confirm_responses.lock().unwrap();
        Ok(responses.pop().unwrap_or(false))
    }

    fn prompt(&self, message: &str) -> Result<Option<String>, InteractionError> {
        self.asked.lock().unwrap().push(message.to_string());

        let mut responses = self.prompt_responses.lock().unwrap();
        Ok(responses.pop().flatten())
    }

    fn print(&self, message: &str) {
        self.printed_messages
            .lock()
            .unwrap()
            .push(message.to_string());
    }

    fn print_error(&self, message: &str) {
        self.error_messages.lock().unwrap().push(message.to_string());
    }
}

impl MockUserInteraction {
    pub fn new() -> Self {
        Self {
            confirm_responses: Mutex::new(Vec::new()),
            prompt_responses: Mutex::new(Vec::new()),
            printed_messages: Mutex::new(Vec::new()),
            error_messages: Mutex::new(Vec::new()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Set the next confirm response
    pub fn set_confirm(&self, response: bool) {
        self.confirm_responses.lock().unwrap().push(response);
    }

    /// Set the next prompt response (`None` simulates closed input)
    pub fn set_prompt(&self, response: Option<&str>) {
        self.prompt_responses
            .lock()
            .unwrap()
            .push(response.map(str::to_string));
    }

    /// Get printed messages (for assertions)
    pub fn get_printed_messages(&self) -> Vec<String> {
        self.printed_messages.lock().unwrap().clone()
    }

    /// Get error messages (for assertions)
    pub fn get_error_messages(&self) -> Vec<String> {
        self.error_messages.lock().unwrap().clone()
    }

    /// Get the confirm/prompt questions asked so far
    pub fn get_asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    /// Check if a message was printed
    pub fn has_printed(&self, expected: &str) -> bool {
        self.printed_messages
            .lock()
            .unwrap()
            .iter()
            .any(|msg| msg.contains(expected))
    }
}

impl Default for MockUserInteraction {
    fn default() -> Self {
        Self::new()
    }
}
