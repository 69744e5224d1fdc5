//! Listing data structures and algorithms
//!
//! - `entry`: listed entries, their states and orderings
//! - `layout`: grid layout and value formatting for rendering
//! - `scan`: concurrent git status probing of directories

pub mod entry;
pub mod layout;
pub mod scan;
