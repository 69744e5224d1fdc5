//! Listed entries
//!
//! An entry is one immediate child of the listed root. Files get their state
//! from the enumerator; directories get theirs from a status probe. Metadata is
//! attached when the entry is created and never touched again.

use crate::artifacts::entry::state::EntryState;
use chrono::{DateTime, Local};
use derive_new::new;
use std::fs::Metadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Filesystem metadata captured at enumeration time
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct EntryMetadata {
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl Default for EntryMetadata {
    fn default() -> Self {
        EntryMetadata {
            size: 0,
            modified: DateTime::<Local>::from(std::time::UNIX_EPOCH),
        }
    }
}

impl TryFrom<Metadata> for EntryMetadata {
    type Error = std::io::Error;

    fn try_from(metadata: Metadata) -> Result<Self, Self::Error> {
        Ok(EntryMetadata {
            size: metadata.len(),
            modified: metadata.modified()?.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    kind: EntryKind,
    state: EntryState,
    metadata: EntryMetadata,
    status_line: String,
}

impl Entry {
    pub fn file(name: impl Into<String>, metadata: EntryMetadata) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::File,
            state: EntryState::PlainFile,
            metadata,
            status_line: String::new(),
        }
    }

    pub fn directory(
        name: impl Into<String>,
        metadata: EntryMetadata,
        state: EntryState,
        status_line: impl Into<String>,
    ) -> Self {
        Entry {
            name: name.into(),
            kind: EntryKind::Directory,
            state,
            metadata,
            status_line: status_line.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }
}
