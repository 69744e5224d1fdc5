use colored::{ColoredString, Colorize};

/// Terminal classification of one listed entry.
///
/// Directory states are assigned by a status probe; `PlainFile` is assigned by
/// the enumerator. Once an entry carries a state it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryState {
    Ok,
    NoVersionControl,
    Dirty,
    NoRemote,
    FetchFailed,
    BranchAhead,
    BranchBehind,
    PlainFile,
}

impl EntryState {
    pub const ALL: [EntryState; 8] = [
        EntryState::Ok,
        EntryState::NoVersionControl,
        EntryState::Dirty,
        EntryState::NoRemote,
        EntryState::FetchFailed,
        EntryState::BranchAhead,
        EntryState::BranchBehind,
        EntryState::PlainFile,
    ];

    /// Rank used when sorting by state. Plain files rank after every directory state.
    pub fn priority(&self) -> u8 {
        match self {
            EntryState::Ok => 0,
            EntryState::NoVersionControl => 1,
            EntryState::Dirty => 2,
            EntryState::NoRemote => 3,
            EntryState::FetchFailed => 4,
            EntryState::BranchAhead => 5,
            EntryState::BranchBehind => 6,
            EntryState::PlainFile => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            EntryState::Ok => text.bold(),
            EntryState::PlainFile => text.normal(),
            EntryState::NoVersionControl => text.blue().bold(),
            EntryState::Dirty => text.red().bold(),
            EntryState::NoRemote => text.red().bold().on_blue(),
            EntryState::FetchFailed => text.blue().bold().on_red(),
            EntryState::BranchAhead => text.green().bold().on_yellow(),
            EntryState::BranchBehind => text.red().bold().on_yellow(),
        }
    }
}

impl From<&EntryState> for &'static str {
    fn from(state: &EntryState) -> Self {
        match state {
            EntryState::Ok => "ok",
            EntryState::NoVersionControl => "no_version_control",
            EntryState::Dirty => "dirty",
            EntryState::NoRemote => "no_remote",
            EntryState::FetchFailed => "fetch_failed",
            EntryState::BranchAhead => "branch_ahead",
            EntryState::BranchBehind => "branch_behind",
            EntryState::PlainFile => "file",
        }
    }
}

impl std::fmt::Display for EntryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
