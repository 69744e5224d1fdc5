//! gls: a directory listing that annotates every subdirectory with its git status
//!
//! The crate is organised the same way as the commands it serves:
//!
//! - `areas`: collaborators that touch the outside world (filesystem, git process, output)
//! - `artifacts`: entries, the concurrent status scan, sorting and column layout
//! - `commands`: user-facing operations (listing, grid/detail rendering, color legend)

use clap::ValueEnum;

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Ordering applied to the collected entries before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// Case-insensitive by name
    #[default]
    Name,
    /// By state priority, keeping arrival order within a state
    State,
}

/// How the sorted entries are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayMode {
    /// Multi-column grid sized to the terminal
    #[default]
    Grid,
    /// One entry per line with size, modification time and last commit
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
