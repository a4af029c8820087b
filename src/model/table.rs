//! Table block type.

use serde::{Deserialize, Serialize};

/// A table built from a contiguous run of pipe-delimited source lines.
///
/// A table always has a header row; every data row has exactly as many
/// cells as the header. Rows with mismatched cell counts are dropped at
/// construction time rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    /// Header cell text
    pub headers: Vec<String>,

    /// Data rows; each row has `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Create a table with the given header cells and no data rows.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Add a data row if its cell count matches the header.
    ///
    /// Returns `false` (and stores nothing) for ragged rows.
    pub fn push_row(&mut self, cells: Vec<String>) -> bool {
        if cells.len() == self.headers.len() {
            self.rows.push(cells);
            true
        } else {
            false
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Tab-separated plain text representation, header first.
    pub fn plain_text(&self) -> String {
        let mut lines = vec![self.headers.join("\t")];
        lines.extend(self.rows.iter().map(|row| row.join("\t")));
        lines.join("\n")
    }
}
