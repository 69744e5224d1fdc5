//! Status probe
//!
//! Classifies a single directory by walking a short decision sequence of git
//! invocations. Each step either settles the state or hands over to the next:
//!
//! 1. no `.git` metadata      -> `NoVersionControl`
//! 2. `status` not clean      -> `Dirty`
//! 3. `remote -v` empty       -> `NoRemote`
//! 4. `fetch` failed          -> `FetchFailed`
//! 5. `status` after fetching -> `BranchAhead`, `BranchBehind` or `Ok`
//!
//! In dirty-only mode, directories outside version control and clean
//! repositories are dropped, and steps 3 to 5 never run.

use crate::areas::git::{GitOutput, GitRunner, RepoLocation};
use crate::areas::workspace::WorkspaceEntry;
use crate::artifacts::entry::entry::{Entry, EntryMetadata};
use crate::artifacts::entry::state::EntryState;
use crate::artifacts::scan::options::ProbeOptions;
use anyhow::Context;
use regex::Regex;
use std::path::PathBuf;
use tracing::debug;

const CLEAN_REGEX: &str = "nothing to commit";
const FETCH_FATAL_REGEX: &str = "^fatal";
const BRANCH_AHEAD_REGEX: &str = "branch is ahead of";
const BRANCH_BEHIND_REGEX: &str = "branch is behind";

const LAST_COMMIT_ARGS: [&str; 3] = ["log", "--format=format:%h - %s", "-1"];

/// Compiled markers matched against git's English output
#[derive(Debug, Clone)]
pub struct StatusMarkers {
    clean: Regex,
    fetch_fatal: Regex,
    branch_ahead: Regex,
    branch_behind: Regex,
}

impl StatusMarkers {
    pub fn new() -> anyhow::Result<Self> {
        Ok(StatusMarkers {
            clean: Regex::new(CLEAN_REGEX)?,
            fetch_fatal: Regex::new(FETCH_FATAL_REGEX)?,
            branch_ahead: Regex::new(BRANCH_AHEAD_REGEX)?,
            branch_behind: Regex::new(BRANCH_BEHIND_REGEX)?,
        })
    }

    fn is_clean(&self, status: &str) -> bool {
        self.clean.is_match(status.trim())
    }

    fn is_fetch_failure(&self, fetch: &GitOutput) -> bool {
        !fetch.success
            || self.fetch_fatal.is_match(fetch.stdout.trim())
            || self.fetch_fatal.is_match(fetch.stderr.trim())
    }

    fn tracking_state(&self, status: &str) -> EntryState {
        let status = status.trim();
        if self.branch_ahead.is_match(status) {
            EntryState::BranchAhead
        } else if self.branch_behind.is_match(status) {
            EntryState::BranchBehind
        } else {
            EntryState::Ok
        }
    }
}

/// A directory waiting to be probed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub name: String,
    pub path: PathBuf,
    pub metadata: EntryMetadata,
}

impl From<WorkspaceEntry> for ProbeTarget {
    fn from(entry: WorkspaceEntry) -> Self {
        ProbeTarget {
            name: entry.name,
            path: entry.path,
            metadata: entry.metadata,
        }
    }
}

impl ProbeTarget {
    fn into_entry(self, state: EntryState, status_line: String) -> Entry {
        debug!(name = %self.name, state = %state, "classified");
        Entry::directory(self.name, self.metadata, state, status_line)
    }
}

pub struct StatusProbe<'r, R: GitRunner> {
    runner: &'r R,
    markers: &'r StatusMarkers,
    options: ProbeOptions,
}

impl<'r, R: GitRunner> StatusProbe<'r, R> {
    pub fn new(runner: &'r R, markers: &'r StatusMarkers, options: ProbeOptions) -> Self {
        StatusProbe {
            runner,
            markers,
            options,
        }
    }

    /// Classify `target`. `Ok(None)` means the directory is dropped in
    /// dirty-only mode; `Err` means git is unusable and the scan must stop.
    pub async fn run(&self, target: ProbeTarget) -> anyhow::Result<Option<Entry>> {
        let location = RepoLocation::new(&target.path);

        let has_metadata = tokio::fs::try_exists(location.git_dir())
            .await
            .with_context(|| {
                format!(
                    "Failed to check for version control in {}",
                    target.path.display()
                )
            })?;
        if !has_metadata {
            if self.options.dirty_only {
                debug!(name = %target.name, "dropping directory outside version control");
                return Ok(None);
            }
            return Ok(Some(
                target.into_entry(EntryState::NoVersionControl, String::new()),
            ));
        }

        let status_line = self.last_commit(&location).await;

        let status = self.required(&location, &["status"]).await?;
        if !self.markers.is_clean(&status.stdout) {
            return Ok(Some(target.into_entry(EntryState::Dirty, status_line)));
        }
        if self.options.dirty_only {
            debug!(name = %target.name, "dropping clean repository");
            return Ok(None);
        }

        let remotes = self.required(&location, &["remote", "-v"]).await?;
        if remotes.stdout.trim().is_empty() {
            return Ok(Some(target.into_entry(EntryState::NoRemote, status_line)));
        }

        match self.runner.run(&location, &["fetch"]).await {
            Ok(fetch) if !self.markers.is_fetch_failure(&fetch) => {}
            Ok(fetch) => {
                debug!(name = %target.name, stderr = %fetch.stderr.trim(), "fetch failed");
                return Ok(Some(target.into_entry(EntryState::FetchFailed, status_line)));
            }
            Err(e) => {
                debug!(name = %target.name, error = %e, "fetch could not run");
                return Ok(Some(target.into_entry(EntryState::FetchFailed, status_line)));
            }
        }

        let status = self.required(&location, &["status"]).await?;
        let state = self.markers.tracking_state(&status.stdout);

        Ok(Some(target.into_entry(state, status_line)))
    }

    /// Summary of the most recent commit; empty when there is none
    async fn last_commit(&self, location: &RepoLocation) -> String {
        match self.runner.run(location, &LAST_COMMIT_ARGS).await {
            Ok(output) if output.success => output.stdout.trim().to_string(),
            Ok(output) => {
                let repo = location.work_tree().display();
                debug!(repo = %repo, stderr = %output.stderr.trim(), "no last commit");
                String::new()
            }
            Err(e) => {
                debug!(repo = %location.work_tree().display(), error = %e, "no last commit");
                String::new()
            }
        }
    }

    /// Run an invocation the classification cannot do without
    async fn required(&self, location: &RepoLocation, args: &[&str]) -> anyhow::Result<GitOutput> {
        let command = args.join(" ");
        let output = self
            .runner
            .run(location, args)
            .await
            .with_context(|| {
                format!(
                    "Failed to run `git {}` in {}",
                    command,
                    location.work_tree().display()
                )
            })?;

        if !output.success {
            anyhow::bail!(
                "`git {}` failed in {}: {}",
                command,
                location.work_tree().display(),
                output.stderr.trim()
            );
        }

        Ok(output)
    }
}
