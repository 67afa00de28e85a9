//! Table structure: a row-major matrix of values with named columns

use crate::table::error::{TableError, TableResult};
use crate::table::staging::{alloc_values, Staged};
use crate::table::Column;
use crate::types::{Value, FIELD_SEPARATOR, RECORD_SEPARATOR, VALUE_SIZE};
use log::debug;

/// In-memory table
///
/// Stores:
/// - data: `n_rows * n_cols` values, row-major (`data[r * n_cols + c]`)
/// - columns: Unique column names in insertion order
///
/// A live table always has at least one row and one column. Every structural
/// mutation builds a complete replacement snapshot first and swaps it in only
/// once it is finished, so a failed call leaves the table exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    data: Vec<Value>,
    columns: Vec<String>,
    n_rows: usize,
    n_cols: usize,
}

impl Table {
    /// Create a one-column table from `values`
    ///
    /// # Errors
    /// * `BadArgument` - `values` is empty, its byte size overflows, or
    ///   `name` is not a valid column name
    /// * `OutOfMemory` - allocation failed
    pub fn from_array(values: &[Value], name: &str) -> TableResult<Self> {
        Self::check_name(name)?;
        if values.is_empty() {
            return Err(TableError::BadArgument(
                "source array must not be empty".to_string(),
            ));
        }
        if values.len().checked_mul(VALUE_SIZE).is_none() {
            return Err(TableError::BadArgument(format!(
                "source array of {} values is too large",
                values.len()
            )));
        }

        let staged = Staged::single_column(values, name)?;
        Ok(Self::from_staged(staged))
    }

    /// Why `name` cannot be a column name, if it cannot
    ///
    /// Names must be non-empty and must not contain the CSV field or record
    /// separators or a carriage return, since the text form has no escaping.
    pub fn invalid_name_reason(name: &str) -> Option<&'static str> {
        if name.is_empty() {
            return Some("empty column name");
        }
        if name.contains([FIELD_SEPARATOR, RECORD_SEPARATOR, '\r']) {
            return Some("column name contains a separator");
        }
        None
    }

    fn check_name(name: &str) -> TableResult<()> {
        match Self::invalid_name_reason(name) {
            Some(reason) => Err(TableError::BadArgument(format!("{}: {:?}", reason, name))),
            None => Ok(()),
        }
    }

    /// Build a table from a fully populated snapshot
    pub(crate) fn from_staged(staged: Staged) -> Self {
        let columns = staged.columns.unwrap_or_default();
        debug_assert_eq!(columns.len(), staged.n_cols);
        debug_assert_eq!(staged.data.len(), staged.n_rows * staged.n_cols);
        Self {
            data: staged.data,
            columns,
            n_rows: staged.n_rows,
            n_cols: staged.n_cols,
        }
    }

    /// Swap in a finished snapshot; the previous buffers are released here
    fn commit(&mut self, staged: Staged) {
        let before = self.shape();
        self.data = staged.data;
        if let Some(columns) = staged.columns {
            self.columns = columns;
        }
        self.n_rows = staged.n_rows;
        self.n_cols = staged.n_cols;
        debug!(
            "table reshaped from {}x{} to {}x{}",
            before.0, before.1, self.n_rows, self.n_cols
        );
    }

    /// Get row count
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Get column count
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Column names in table order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row-major value buffer
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Position of the first column named `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Check if a column named `name` exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Borrowed view of the column named `name`
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        self.column_index(name)
            .map(|idx| Column::new(&self.columns[idx], idx, &self.data, self.n_cols))
    }

    /// Like [`Table::column`], failing with `ColumnNotFound`
    pub(crate) fn require_column(&self, name: &str) -> TableResult<Column<'_>> {
        self.column(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    /// Value at (`row`, `col`), if both are in bounds
    pub fn value(&self, row: usize, col: usize) -> Option<Value> {
        if row >= self.n_rows || col >= self.n_cols {
            return None;
        }
        Some(self.data[row * self.n_cols + col])
    }

    /// Borrowed row slice, if `index` is in bounds
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        if index >= self.n_rows {
            return None;
        }
        let start = index * self.n_cols;
        Some(&self.data[start..start + self.n_cols])
    }

    /// Copy the column named `name`
    ///
    /// # Errors
    /// * `ColumnNotFound` - no such column
    /// * `OutOfMemory` - allocation failed
    pub fn get_column(&self, name: &str) -> TableResult<Vec<Value>> {
        self.require_column(name)?.to_vec()
    }

    /// Append `values` as a new last column
    ///
    /// # Errors
    /// * `RowMismatch` - `values.len() != n_rows`
    /// * `ColumnExists` - a column named `name` is already present
    /// * `BadArgument` - `name` is not a valid column name
    /// * `OutOfMemory` - size overflow or allocation failure; the table is unchanged
    pub fn append_column(&mut self, values: &[Value], name: &str) -> TableResult<()> {
        if values.len() != self.n_rows {
            return Err(TableError::RowMismatch {
                expected: self.n_rows,
                actual: values.len(),
            });
        }
        if self.has_column(name) {
            return Err(TableError::ColumnExists(name.to_string()));
        }
        Self::check_name(name)?;

        let staged = Staged::with_column(self, values, name)?;
        self.commit(staged);
        Ok(())
    }

    /// Remove the column named `name`
    ///
    /// # Errors
    /// * `ColumnNotFound` - no such column
    /// * `LastColumn` - the table has a single column
    /// * `OutOfMemory` - allocation failure; the table is unchanged
    pub fn drop_column(&mut self, name: &str) -> TableResult<()> {
        let ordinal = self
            .column_index(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
        if self.n_cols == 1 {
            return Err(TableError::LastColumn);
        }

        let staged = Staged::without_column(self, ordinal)?;
        self.commit(staged);
        Ok(())
    }

    /// Copy the row at `index`
    ///
    /// # Errors
    /// * `RowNotFound` - `index >= n_rows`
    /// * `OutOfMemory` - allocation failed
    pub fn get_row(&self, index: usize) -> TableResult<Vec<Value>> {
        let row = self.row(index).ok_or(TableError::RowNotFound {
            index,
            n_rows: self.n_rows,
        })?;
        let mut out = alloc_values(row.len())?;
        out.extend_from_slice(row);
        Ok(out)
    }

    /// Append `values` as a new last row
    ///
    /// # Errors
    /// * `ColumnMismatch` - `values.len() != n_cols`
    /// * `OutOfMemory` - size overflow or allocation failure; the table is unchanged
    pub fn append_row(&mut self, values: &[Value]) -> TableResult<()> {
        if values.len() != self.n_cols {
            return Err(TableError::ColumnMismatch {
                expected: self.n_cols,
                actual: values.len(),
            });
        }

        let staged = Staged::with_row(self, values)?;
        self.commit(staged);
        Ok(())
    }

    /// Remove the row at `index`; later rows move up by one
    ///
    /// # Errors
    /// * `RowNotFound` - `index >= n_rows`
    /// * `LastRow` - the table has a single row
    /// * `OutOfMemory` - allocation failure; the table is unchanged
    pub fn drop_row(&mut self, index: usize) -> TableResult<()> {
        if index >= self.n_rows {
            return Err(TableError::RowNotFound {
                index,
                n_rows: self.n_rows,
            });
        }
        if self.n_rows == 1 {
            return Err(TableError::LastRow);
        }

        let staged = Staged::without_row(self, index)?;
        self.commit(staged);
        Ok(())
    }
}
