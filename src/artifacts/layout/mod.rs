//! Output layout
//!
//! - `columns`: grid layout that fits entries into the terminal width
//! - `size`: human-readable sizes and timestamps for the detail list
//! - `terminal`: terminal width resolution

pub mod columns;
pub mod size;
pub mod terminal;
