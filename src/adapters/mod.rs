pub mod git_cli;
pub mod system_browser;
pub mod terminal_interaction;
pub mod unix_fs;


pub use git_cli::GitCli;
pub use system_browser::SystemBrowser;
pub use terminal_interaction::TerminalInteraction;
pub use unix_fs::UnixFs;
