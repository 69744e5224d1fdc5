//! Listed entries and their ordering
//!
//! - `entry`: the entry record, its kind and filesystem metadata
//! - `state`: the closed set of states with priority and color
//! - `sort`: name and state orderings

#[allow(clippy::module_inception)]
pub mod entry;
pub mod sort;
pub mod state;
