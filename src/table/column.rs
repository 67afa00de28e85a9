//! Borrowed column view over a row-major table

use crate::table::error::TableResult;
use crate::table::staging::alloc_values;
use crate::types::Value;

/// Column view
///
/// Represents a single column of a table without copying it:
/// - name: Column identifier
/// - ordinal: Position in the table (0-indexed)
/// - values: Strided walk over the row-major buffer
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    name: &'a str,
    ordinal: usize,
    data: &'a [Value],
    stride: usize,
}

impl<'a> Column<'a> {
    /// `data` must be a row-major buffer with `stride` columns and
    /// `ordinal < stride`.
    pub(crate) fn new(name: &'a str, ordinal: usize, data: &'a [Value], stride: usize) -> Self {
        debug_assert!(ordinal < stride);
        Self {
            name,
            ordinal,
            data,
            stride,
        }
    }

    /// Get column name
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Get column ordinal (position in table)
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Number of values (the table's row count)
    pub fn len(&self) -> usize {
        self.data.len() / self.stride
    }

    /// Check if the column has no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `row`, if in bounds
    pub fn get(&self, row: usize) -> Option<Value> {
        if row >= self.len() {
            return None;
        }
        Some(self.data[row * self.stride + self.ordinal])
    }

    /// Values in row order
    pub fn values(self) -> impl Iterator<Item = Value> + 'a {
        self.data[self.ordinal..].iter().step_by(self.stride).copied()
    }

    /// Copy the column into a freshly allocated vector
    pub fn to_vec(self) -> TableResult<Vec<Value>> {
        let mut out = alloc_values(self.len())?;
        out.extend(self.values());
        Ok(out)
    }
}
