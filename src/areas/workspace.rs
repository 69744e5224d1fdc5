use crate::artifacts::entry::entry::{EntryKind, EntryMetadata};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

const HIDDEN_MARKER: char = '.';

/// One immediate child of the listed root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub metadata: EntryMetadata,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the immediate children of the workspace root in filesystem order.
    ///
    /// Children whose metadata cannot be read are skipped: they were most likely
    /// removed between the directory read and the stat.
    pub fn list_dir(&self, include_hidden: bool) -> anyhow::Result<Vec<WorkspaceEntry>> {
        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        let entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to read directory: {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                include_hidden || !Self::is_hidden(&entry.file_name().to_string_lossy())
            })
            .filter_map(|entry| self.stat_entry(entry.path()))
            .collect::<Vec<_>>();

        Ok(entries)
    }

    fn is_hidden(name: &str) -> bool {
        name.starts_with(HIDDEN_MARKER)
    }

    fn stat_entry(&self, path: PathBuf) -> Option<WorkspaceEntry> {
        let name = path.file_name()?.to_string_lossy().into_owned();

        // follow symlinks, a link to a repository is listed as that repository
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping entry that cannot be stat'ed");
                return None;
            }
        };

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let metadata = match EntryMetadata::try_from(metadata) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping entry without mtime");
                return None;
            }
        };

        Some(WorkspaceEntry {
            name,
            path,
            kind,
            metadata,
        })
    }
}
