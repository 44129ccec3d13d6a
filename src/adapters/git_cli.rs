use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::core::ports::{GitError, GitRepository, WorkingTreeStatus};

pub struct GitCli {
    work_dir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current directory, or in `work_dir` when given (`git -C`)
    pub fn new(work_dir: Option<PathBuf>) -> Self {
        Self { work_dir }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        if let Some(dir) = &self.work_dir {
            command.arg("-C").arg(dir);
        }
        command.args(args);
        command
    }

    fn run_command(&self, args: &[&str]) -> Result<String, GitError> {
        tracing::trace!(args = %args.join(" "), "running git");

        match self.command(args).output() {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);

                Ok(stdout.trim().to_string())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);

                Err(GitError::Failed {
                    status: output.status.code().unwrap_or(-1),
                    stderr: stderr.trim().to_string(),
                })
            }

            Err(error) => {
                let message = format!("Failed to execute git {}: {}", args.join(" "), error);

                Err(GitError::Execution(message))
            }
        }
    }

    fn run_command_inherit(&self, args: &[&str]) -> Result<(), GitError> {
        tracing::trace!(args = %args.join(" "), "running git");

        match self
            .command(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
        {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(GitError::Failed {
                status: status.code().unwrap_or(-1),
                stderr: format!("git {} failed", args.join(" ")),
            }),
            Err(error) => {
                let message = format!("Failed to execute git {}: {}", args.join(" "), error);

                Err(GitError::Execution(message))
            }
        }
    }

    fn ref_exists(&self, ref_name: &str) -> Result<bool, GitError> {
        match self.run_command(&["rev-parse", "--verify", "--quiet", ref_name]) {
            Ok(_) => Ok(true),
            Err(GitError::Failed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Parse `git status --porcelain=v2 --branch` output
///
/// Header lines start with `#`; every other line is a changed, unmerged or
/// untracked entry and makes the tree dirty.
fn parse_porcelain_status(output: &str) -> Result<WorkingTreeStatus, GitError> {
    let mut head = None;
    let mut is_clean = true;

    for line in output.lines().filter(|line| !line.is_empty()) {
        if let Some(header) = line.strip_prefix("# ") {
            if let Some(name) = header.strip_prefix("branch.head ") {
                head = Some(name.trim().to_string());
            }
        } else {
            is_clean = false;
        }
    }

    let head = head.ok_or_else(|| {
        GitError::Parse("git status did not report branch.head".to_string())
    })?;

    let branch = if head == "(detached)" { None } else { Some(head) };

    Ok(WorkingTreeStatus { branch, is_clean })
}

impl GitRepository for GitCli {
    fn git_dir(&self) -> Result<PathBuf, GitError> {
        let output = self.run_command(&["rev-parse", "--absolute-git-dir"])?;

        if output.is_empty() {
            return Err(GitError::Parse(
                "Could not determine git directory".to_string(),
            ));
        }

        Ok(PathBuf::from(output))
    }

    fn status(&self) -> Result<WorkingTreeStatus, GitError> {
        let output = self.run_command(&["status", "--porcelain=v2", "--branch"])?;
        parse_porcelain_status(&output)
    }

    fn remotes(&self) -> Result<Option<String>, GitError> {
        let output = self.run_command(&["remote", "-v"])?;

        if output.is_empty() {
            return Ok(None);
        }

        Ok(Some(output))
    }

    fn local_branch_exists(&self, branch: &str) -> Result<bool, GitError> {
        self.ref_exists(&format!("refs/heads/{branch}"))
    }

    fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool, GitError> {
        self.ref_exists(&format!("refs/remotes/{remote}/{branch}"))
    }

    fn checkout(&self, branch: &str) -> Result<(), GitError> {
        self.run_command_inherit(&["checkout", branch])
    }

    fn create_branch(&self, branch: &str, start_point: &str) -> Result<(), GitError> {
        self.run_command_inherit(&["checkout", "-b", branch, start_point])
    }

    fn track_branch(&self, branch: &str, upstream: &str) -> Result<(), GitError> {
        self.run_command_inherit(&["checkout", "--track", "-b", branch, upstream])
    }
}
