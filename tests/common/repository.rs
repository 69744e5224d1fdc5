use crate::common::command::git;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::fixture;
use std::path::{Path, PathBuf};

/// A root to list together with a separate directory holding its upstreams,
/// so the upstreams never show up in the listing
pub struct ListingRoot {
    pub root: TempDir,
    pub remotes: TempDir,
}

impl ListingRoot {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn add_file(&self, name: &str, content: &str) {
        self.root
            .child(name)
            .write_str(content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", name, e));
    }

    pub fn add_plain_directory(&self, name: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
        path
    }

    /// A repository with one commit and no remote
    pub fn add_repository(&self, name: &str) -> PathBuf {
        let path = self.add_plain_directory(name);
        init_with_commit(&path);
        path
    }

    pub fn add_dirty_repository(&self, name: &str) -> PathBuf {
        let path = self.add_repository(name);
        write(&path.join("scratch.txt"), "uncommitted");
        path
    }

    /// A repository tracking an upstream that has exactly its commits
    pub fn add_published_repository(&self, name: &str) -> PathBuf {
        let path = self.add_repository(name);
        let upstream = self.bare_upstream(name);
        publish(&path, &upstream);
        path
    }

    pub fn add_ahead_repository(&self, name: &str) -> PathBuf {
        let path = self.add_published_repository(name);
        commit_file(&path, "ahead.txt", "local work", "Local commit");
        path
    }

    pub fn add_behind_repository(&self, name: &str) -> PathBuf {
        let path = self.add_published_repository(name);
        let upstream = self.remotes.path().join(format!("{name}.git"));
        let other = self.remotes.path().join(format!("{name}-other"));

        git(
            self.remotes.path(),
            &["clone", &upstream.to_string_lossy(), &other.to_string_lossy()],
        );
        commit_file(&other, "remote.txt", "remote work", "Remote commit");
        git(&other, &["push"]);
        path
    }

    /// A repository whose remote points nowhere, so fetching fails
    pub fn add_unreachable_repository(&self, name: &str) -> PathBuf {
        let path = self.add_repository(name);
        let missing = self.remotes.path().join("missing.git");
        git(&path, &["remote", "add", "origin", &missing.to_string_lossy()]);
        path
    }

    fn bare_upstream(&self, name: &str) -> PathBuf {
        let upstream = self.remotes.path().join(format!("{name}.git"));
        git(
            self.remotes.path(),
            &["init", "--bare", &upstream.to_string_lossy()],
        );
        upstream
    }
}

fn write(path: &Path, content: &str) {
    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

fn init_with_commit(path: &Path) {
    git(path, &["init"]);
    commit_file(path, "README.md", "# readme", "Initial commit");
}

pub fn commit_file(repo: &Path, name: &str, content: &str, message: &str) {
    write(&repo.join(name), content);
    git(repo, &["add", name]);
    git(repo, &["commit", "-m", message]);
}

fn publish(repo: &Path, upstream: &Path) {
    git(repo, &["remote", "add", "origin", &upstream.to_string_lossy()]);
    git(repo, &["push", "-u", "origin", "HEAD"]);
}

#[fixture]
pub fn listing_root() -> ListingRoot {
    ListingRoot {
        root: TempDir::new().expect("Failed to create temp dir"),
        remotes: TempDir::new().expect("Failed to create temp dir"),
    }
}

/// One entry per state, plus a file and a hidden directory
#[fixture]
pub fn every_state(listing_root: ListingRoot) -> ListingRoot {
    listing_root.add_published_repository("clean");
    listing_root.add_plain_directory("plain");
    listing_root.add_dirty_repository("dirty");
    listing_root.add_repository("local");
    listing_root.add_unreachable_repository("broken");
    listing_root.add_ahead_repository("ahead");
    listing_root.add_behind_repository("behind");
    listing_root.add_file("notes.txt", "hello");
    listing_root.add_repository(".hidden");
    listing_root
}
