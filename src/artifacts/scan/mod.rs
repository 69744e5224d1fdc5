//! Concurrent git status scan
//!
//! - `options`: scan and probe configuration
//! - `probe`: classification of a single directory
//! - `coordinator`: fan-out of probes and fan-in of their entries

pub mod coordinator;
pub mod options;
pub mod probe;

#[cfg(test)]
pub(crate) mod testing;
