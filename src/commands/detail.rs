use crate::areas::git::GitRunner;
use crate::areas::listing::Listing;
use crate::artifacts::entry::entry::Entry;
use crate::artifacts::layout::columns::{Cell, GUTTER};
use crate::artifacts::layout::size::{format_timestamp, humanize_size};
use std::io::Write;

impl<R: GitRunner> Listing<R> {
    pub fn show_detail(&self, entries: &[Entry]) -> anyhow::Result<()> {
        for line in detail_lines(entries)? {
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}

/// One line per entry: name, size, modification time and last commit, each
/// column aligned on visible width
pub fn detail_lines(entries: &[Entry]) -> anyhow::Result<Vec<String>> {
    let rows = entries
        .iter()
        .map(|entry| -> anyhow::Result<Vec<Cell>> {
            let size = i64::try_from(entry.metadata().size).unwrap_or(i64::MAX);
            Ok(vec![
                Cell::new(entry.name(), entry.state().paint(entry.name()).to_string()),
                Cell::plain(&humanize_size(size)?),
                Cell::plain(&format_timestamp(&entry.metadata().modified)),
                Cell::plain(entry.status_line()),
            ])
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(align(&rows))
}

fn align(rows: &[Vec<Cell>]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or_default();
    let widths = (0..columns)
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(column).map(Cell::width))
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (column, cell) in row.iter().enumerate() {
                line.push_str(cell.text());
                if column + 1 < row.len() {
                    let padding = widths[column] - cell.width() + GUTTER;
                    line.extend(std::iter::repeat_n(' ', padding));
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}
