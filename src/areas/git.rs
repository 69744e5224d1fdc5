//! Process boundary to the git executable
//!
//! Probes never spawn processes themselves; they go through a [`GitRunner`].
//! [`GitCli`] is the real implementation, tests drive probes with scripted runners.

use derive_new::new;
use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

const GIT_METADATA_DIR: &str = ".git";

/// Where a probed repository keeps its metadata and its working tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    git_dir: PathBuf,
    work_tree: PathBuf,
}

impl RepoLocation {
    pub fn new(work_tree: &Path) -> Self {
        RepoLocation {
            git_dir: work_tree.join(GIT_METADATA_DIR),
            work_tree: work_tree.to_path_buf(),
        }
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }
}

/// Captured result of one git invocation that managed to run
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl GitOutput {
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        GitOutput::new(stdout.into(), String::new(), true)
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        GitOutput::new(String::new(), stderr.into(), false)
    }
}

pub trait GitRunner: Send + Sync + 'static {
    /// Run `git <args>` against `repo`. An `Err` means git could not be run at
    /// all (missing binary, timeout); a non-zero exit is reported through
    /// [`GitOutput::success`].
    fn run(
        &self,
        repo: &RepoLocation,
        args: &[&str],
    ) -> impl Future<Output = io::Result<GitOutput>> + Send;
}

#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    timeout: Option<Duration>,
}

impl Default for GitCli {
    fn default() -> Self {
        GitCli::new("git", None)
    }
}

impl GitCli {
    pub fn new(program: impl Into<OsString>, timeout: Option<Duration>) -> Self {
        GitCli {
            program: program.into(),
            timeout,
        }
    }

    fn command(&self, repo: &RepoLocation, args: &[&str]) -> Command {
        let mut git_dir = OsString::from("--git-dir=");
        git_dir.push(repo.git_dir());
        let mut work_tree = OsString::from("--work-tree=");
        work_tree.push(repo.work_tree());

        let mut command = Command::new(&self.program);
        command
            .arg("--no-pager")
            .arg(git_dir)
            .arg(work_tree)
            .args(args)
            // status markers are matched against the English messages
            .env("LC_ALL", "C")
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true);
        command
    }
}

impl GitRunner for GitCli {
    async fn run(&self, repo: &RepoLocation, args: &[&str]) -> io::Result<GitOutput> {
        debug!(repo = %repo.work_tree().display(), args = ?args, "running git");

        let mut command = self.command(repo, args);
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("git {} timed out after {:?}", args.join(" "), limit),
                    )
                })??,
            None => command.output().await?,
        };

        Ok(GitOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}
