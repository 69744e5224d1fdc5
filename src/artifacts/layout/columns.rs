//! Column layout
//!
//! Fits a list of cells into as many columns as the terminal width allows.
//! Cells are filled column by column, like `ls`. The widths used for fitting
//! are display widths of the raw text; the rendered text may carry invisible
//! color escapes, which are accounted for when padding.

use unicode_width::UnicodeWidthStr;

/// Blank columns between two adjacent cells
pub const GUTTER: usize = 2;

/// Text to place in the grid together with its visible width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    /// `raw` is what the user sees, `decorated` is `raw` wrapped in escapes
    pub fn new(raw: &str, decorated: String) -> Self {
        Cell {
            text: decorated,
            width: raw.width(),
        }
    }

    pub fn plain(text: &str) -> Self {
        Cell::new(text, text.to_string())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Write the cell padded to `column_width` visible columns
    fn write_padded(&self, line: &mut String, column_width: usize) {
        line.push_str(&self.text);
        let padding = column_width.saturating_sub(self.width);
        line.extend(std::iter::repeat_n(' ', padding));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    rows: usize,
    widths: Vec<usize>,
}

impl ColumnLayout {
    /// Compute the layout of cells with the given visible `widths` for a
    /// terminal `term_width` columns wide.
    ///
    /// When even a single column does not fit, one column is used anyway and
    /// the output overflows.
    pub fn compute(widths: &[usize], term_width: usize) -> Self {
        if widths.is_empty() {
            return ColumnLayout::default();
        }

        let mut columns = 0;
        let mut used = 0;
        for width in widths {
            used += width + GUTTER;
            if used > term_width {
                break;
            }
            columns += 1;
        }
        let mut columns = columns.max(1);

        loop {
            let rows = widths.len().div_ceil(columns);
            // column-major filling can leave trailing columns empty
            columns = widths.len().div_ceil(rows);

            let column_widths = (0..columns)
                .map(|column| {
                    widths
                        .iter()
                        .skip(column * rows)
                        .take(rows)
                        .copied()
                        .max()
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>();
            let total = column_widths.iter().sum::<usize>() + GUTTER * (columns - 1);

            if total <= term_width || columns == 1 {
                return ColumnLayout {
                    rows,
                    widths: column_widths,
                };
            }
            columns -= 1;
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    /// Render `cells` (the same cells the layout was computed for) into lines
    /// without trailing whitespace.
    pub fn render(&self, cells: &[Cell]) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                let row_cells = (0..self.columns())
                    .filter_map(|column| {
                        cells
                            .get(column * self.rows + row)
                            .map(|cell| (cell, self.widths[column]))
                    })
                    .collect::<Vec<_>>();

                let mut line = String::new();
                if let Some(((last, _), leading)) = row_cells.split_last() {
                    for (cell, width) in leading {
                        cell.write_padded(&mut line, width + GUTTER);
                    }
                    line.push_str(last.text());
                }
                line
            })
            .collect()
    }
}

/// Lay `cells` out for `term_width` and render them
pub fn render_grid(cells: &[Cell], term_width: usize) -> Vec<String> {
    let widths = cells.iter().map(Cell::width).collect::<Vec<_>>();
    ColumnLayout::compute(&widths, term_width).render(cells)
}
