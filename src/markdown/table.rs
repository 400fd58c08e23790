//! Table element with per-column width computation

use super::text::center_text;
use crate::{Error, Result};

/// Markdown table.
///
/// Each column's render width is the maximum cell-string length within that
/// specific column, across the header and all data rows. The header and every
/// cell render centered inside their column's width; a dash separator row sits
/// under the header with `|` preserved at column boundaries.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `columns` is empty.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::InvalidArgument(
                "a table needs at least one column".to_string(),
            ));
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Number of declared columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows added so far.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Append one data row. Rows shorter than the column count render with
    /// empty trailing cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `values` has more entries than there are
    /// columns.
    pub fn add_row(&mut self, values: Vec<String>) -> Result<()> {
        if values.len() > self.columns.len() {
            return Err(Error::InvalidArgument(format!(
                "row has {} values but the table has {} columns",
                values.len(),
                self.columns.len()
            )));
        }
        self.rows.push(values);
        Ok(())
    }

    /// Per-column render width: max cell length within that column across
    /// header + all rows.
    fn column_widths(&self) -> Vec<usize> {
        (0..self.columns.len())
            .map(|i| {
                let header_len = self.columns[i].chars().count();
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .fold(header_len, usize::max)
            })
            .collect()
    }

    fn render_cells(cells: &[&str], widths: &[usize]) -> Result<String> {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            line.push(' ');
            line.push_str(&center_text(cell, *width)?);
            line.push_str(" |");
        }
        Ok(line)
    }

    /// Render the table: header, dash separator, then data rows.
    ///
    /// # Errors
    ///
    /// Centering cannot fail here (widths are computed from the cells
    /// themselves), but the error type is kept for uniformity with the other
    /// elements.
    pub fn render(&self) -> Result<String> {
        let widths = self.column_widths();

        let headers: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        let header_line = Self::render_cells(&headers, &widths)?;

        // Same shape as the header, every non-boundary character dashed out
        let separator: String = header_line
            .chars()
            .map(|c| if c == '|' { '|' } else { '-' })
            .collect();

        let mut lines = vec![header_line, separator];
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(Self::render_cells(&cells, &widths)?);
        }

        Ok(lines.join("\n"))
    }
}
