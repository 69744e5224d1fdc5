use crate::areas::git::GitRunner;
use crate::areas::listing::Listing;
use crate::artifacts::entry::entry::Entry;
use crate::artifacts::layout::columns::{Cell, render_grid};
use std::io::Write;

impl<R: GitRunner> Listing<R> {
    pub fn show_grid(&self, entries: &[Entry], term_width: usize) -> anyhow::Result<()> {
        for line in grid_lines(entries, term_width) {
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}

pub fn grid_lines(entries: &[Entry], term_width: usize) -> Vec<String> {
    let cells = entries
        .iter()
        .map(|entry| Cell::new(entry.name(), entry.state().paint(entry.name()).to_string()))
        .collect::<Vec<_>>();

    render_grid(&cells, term_width)
}
