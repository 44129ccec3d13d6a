use crate::core::ports::{Browser, BrowserError};

/// Opens URLs with the platform's default handler (`xdg-open`, `open`, `start`)
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        tracing::debug!(%url, "opening browser");

        open::that(url).map_err(|e| BrowserError::Open {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
