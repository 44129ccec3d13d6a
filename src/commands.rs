use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::configs::Config;
use crate::container::AppContainer;
use crate::errors::AppError;
use crate::usecases::{Action, PromoteToTestUseCase, ShowBranchUseCase, StartFixUseCase};

#[derive(Debug, Parser)]
#[command(name = "bugflow", about = "Test/fix branch workflow helper", long_about = None)]
pub struct Cli {
    #[arg(short = 'C', global = true, value_name = "PATH")]
    #[arg(help = "Run as if started in PATH")]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn execute() -> Result<(), AppError> {
        let args = Cli::parse();
        let container = AppContainer::new(args.repo.clone());

        match &args.command {
            Some(Commands::Status) => {
                ShowBranchUseCase::new(container.git, container.ui).execute()
            }
            Some(Commands::Fix { bug_id }) => start_fix(&container, bug_id.as_deref()),
            Some(Commands::Promote { yes, no_browser }) => promote(&container, *yes, *no_browser),
            Some(Commands::Action { code }) => match Action::try_from(*code)? {
                Action::StartFix => start_fix(&container, None),
                Action::PromoteToTest => promote(&container, false, false),
            },
            None => {
                Cli::command()
                    .print_help()
                    .expect("Failed to execute command: Something went wrong...");
                Ok(())
            }
        }
    }
}

fn start_fix(container: &AppContainer, bug_id: Option<&str>) -> Result<(), AppError> {
    let config = Config::load(container.fs.clone())?;

    StartFixUseCase::new(
        container.git.clone(),
        container.fs.clone(),
        container.ui.clone(),
        container.browser.clone(),
        &config,
    )
    .execute(bug_id)?;

    Ok(())
}

fn promote(container: &AppContainer, yes: bool, no_browser: bool) -> Result<(), AppError> {
    let mut config = Config::load(container.fs.clone())?;
    if no_browser {
        config.open_browser = false;
    }

    PromoteToTestUseCase::new(
        container.git.clone(),
        container.fs.clone(),
        container.ui.clone(),
        container.browser.clone(),
        &config,
        yes,
    )
    .execute()?;

    Ok(())
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show the current branch and its test/fix parts")]
    Status,

    #[command(about = "Create a fix branch from the current test branch")]
    Fix {
        #[arg(help = "Bug id, digits only (asked for when omitted)")]
        bug_id: Option<String>,
    },

    #[command(about = "Check out the test branch and open a merge request for the fix")]
    Promote {
        #[arg(short, long)]
        #[arg(help = "Open the merge request page without asking")]
        yes: bool,

        #[arg(long)]
        #[arg(help = "Only print the merge request URL")]
        no_browser: bool,
    },

    #[command(about = "Run a workflow action by code (0 = fix, 1 = promote)")]
    Action {
        #[arg(help = "Action code")]
        code: u8,
    },
}
