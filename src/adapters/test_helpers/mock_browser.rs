//! Mock browser for testing

use std::sync::Mutex;

use crate::core::ports::{Browser, BrowserError};

/// Mock browser that records every URL it is asked to open
pub struct MockBrowser {
    opened: Mutex<Vec<String>>,
    fail: Mutex<bool>,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: Mutex::new(false),
        }
    }

    /// Make every following `open` call fail
    pub fn fail_on_open(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Get opened URLs (for assertions)
    pub fn get_opened_urls(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Default for MockBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser for MockBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        if *self.fail.lock().unwrap() {
            return Err(BrowserError::Open {
                url: url.to_string(),
                reason: "no browser available".into(),
            });
        }

        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
