//! Collaborators of a listing
//!
//! - `git`: the process boundary to the git executable
//! - `listing`: a listing of one root directory and where it is written
//! - `workspace`: enumeration of the root directory's children

pub mod git;
pub mod listing;
pub mod workspace;
