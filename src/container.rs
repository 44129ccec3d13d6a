use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{GitCli, SystemBrowser, TerminalInteraction, UnixFs};
use crate::core::ports::{Browser, FileSystem, GitRepository, UserInteraction};

pub struct AppContainer {
    pub git: Arc<dyn GitRepository>,
    pub fs: Arc<dyn FileSystem>,
    pub ui: Arc<dyn UserInteraction>,
    pub browser: Arc<dyn Browser>,
}

impl AppContainer {
    pub fn new(work_dir: Option<PathBuf>) -> Self {
        Self {
            git: Arc::new(GitCli::new(work_dir)),
            fs: Arc::new(UnixFs::new()),
            ui: Arc::new(TerminalInteraction::new()),
            browser: Arc::new(SystemBrowser::new()),
        }
    }
}
