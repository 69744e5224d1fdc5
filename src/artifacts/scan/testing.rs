//! Scripted git runner and directory fixtures shared by the scan tests

use crate::areas::git::{GitOutput, GitRunner, RepoLocation};
use crate::artifacts::entry::entry::EntryMetadata;
use crate::artifacts::scan::probe::ProbeTarget;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub type Response = Result<GitOutput, io::ErrorKind>;

#[derive(Debug, Clone)]
pub struct Script {
    log: Response,
    statuses: Vec<Response>,
    remotes: Response,
    fetch: Response,
    max_delay_ms: u64,
}

impl Default for Script {
    fn default() -> Self {
        Script {
            log: Ok(GitOutput::succeeded("abc1234 - Initial commit")),
            statuses: Vec::new(),
            remotes: Ok(GitOutput::succeeded("")),
            fetch: Ok(GitOutput::succeeded("")),
            max_delay_ms: 0,
        }
    }
}

impl Script {
    /// Queue the output of the next `git status`; the last one repeats
    pub fn status(self, stdout: &str) -> Self {
        self.status_result(Ok(GitOutput::succeeded(stdout)))
    }

    pub fn status_result(mut self, response: Response) -> Self {
        self.statuses.push(response);
        self
    }

    pub fn remotes(mut self, stdout: &str) -> Self {
        self.remotes = Ok(GitOutput::succeeded(stdout));
        self
    }

    pub fn fetch(mut self, response: Response) -> Self {
        self.fetch = response;
        self
    }

    pub fn log(mut self, response: Response) -> Self {
        self.log = response;
        self
    }

    /// Delay every invocation by up to `max_delay_ms`, varying per repository
    pub fn jitter(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }
}

#[derive(Debug)]
pub struct ScriptedGit {
    script: Script,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedGit {
    pub fn new(script: Script) -> Self {
        ScriptedGit {
            script,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Subcommands invoked so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, subcommand: &str) -> usize {
        let mut calls = self.calls.lock().expect("calls lock poisoned");
        let previous_statuses = calls.iter().filter(|call| *call == "status").count();
        calls.push(subcommand.to_string());
        previous_statuses
    }

    fn respond(&self, subcommand: &str, previous_statuses: usize) -> Response {
        match subcommand {
            "log" => self.script.log.clone(),
            "status" => match self.script.statuses.len() {
                0 => Ok(GitOutput::succeeded("nothing to commit, working tree clean")),
                len => self.script.statuses[previous_statuses.min(len - 1)].clone(),
            },
            "remote" => self.script.remotes.clone(),
            "fetch" => self.script.fetch.clone(),
            _ => Err(io::ErrorKind::Unsupported),
        }
    }

    fn delay_for(&self, repo: &RepoLocation) -> Duration {
        if self.script.max_delay_ms == 0 {
            return Duration::ZERO;
        }
        let mut hasher = DefaultHasher::new();
        repo.work_tree().hash(&mut hasher);
        Duration::from_millis(hasher.finish() % (self.script.max_delay_ms + 1))
    }
}

impl GitRunner for ScriptedGit {
    async fn run(&self, repo: &RepoLocation, args: &[&str]) -> io::Result<GitOutput> {
        let subcommand = args.first().copied().unwrap_or_default();
        let previous_statuses = self.record(subcommand);

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        tokio::time::sleep(self.delay_for(repo)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.respond(subcommand, previous_statuses)
            .map_err(io::Error::from)
    }
}

fn target(root: &Path, name: &str) -> anyhow::Result<ProbeTarget> {
    let path = root.join(name);
    let metadata = EntryMetadata::try_from(std::fs::metadata(&path)?)?;
    Ok(ProbeTarget {
        name: name.to_string(),
        path,
        metadata,
    })
}

pub fn add_repository(root: &TempDir, name: &str) -> anyhow::Result<ProbeTarget> {
    root.child(name).child(".git").create_dir_all()?;
    target(root.path(), name)
}

pub fn add_plain_directory(root: &TempDir, name: &str) -> anyhow::Result<ProbeTarget> {
    root.child(name).create_dir_all()?;
    target(root.path(), name)
}

pub fn repository(name: &str) -> anyhow::Result<(TempDir, ProbeTarget)> {
    let root = TempDir::new()?;
    let target = add_repository(&root, name)?;
    Ok((root, target))
}

pub fn plain_directory(name: &str) -> anyhow::Result<(TempDir, ProbeTarget)> {
    let root = TempDir::new()?;
    let target = add_plain_directory(&root, name)?;
    Ok((root, target))
}
