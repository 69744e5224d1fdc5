//! Listing commands
//!
//! Each rendering mode is an `impl Listing` block next to the pure function
//! that produces its lines:
//!
//! - `list`: enumerate, scan, sort and dispatch to a renderer
//! - `grid`: multi-column grid sized to the terminal
//! - `detail`: one aligned line per entry with size, time and last commit
//! - `legend`: the state color codes

pub mod detail;
pub mod grid;
pub mod legend;
pub mod list;
