#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Failed to open {url}: {reason}")]
    Open { url: String, reason: String },
}

/// Opens web pages outside the terminal
pub trait Browser: Send + Sync {
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}
