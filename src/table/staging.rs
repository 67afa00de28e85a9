//! Staged table buffers
//!
//! Every structural mutation of a [`Table`] goes through this module:
//! - allocate the replacement buffers with fallible reservation
//! - fully populate them from the live table
//! - hand the finished [`Staged`] snapshot to [`Table::commit`]
//!
//! If any allocation fails the snapshot built so far is dropped and the live
//! table is never touched.

use crate::table::error::{TableError, TableResult};
use crate::table::Table;
use crate::types::{Value, VALUE_SIZE};

/// Fully built replacement buffers for a table
///
/// `columns` is `None` when the mutation keeps the current name list
/// (row mutations only swap the data buffer).
#[derive(Debug)]
pub(crate) struct Staged {
    pub(crate) data: Vec<Value>,
    pub(crate) columns: Option<Vec<String>>,
    pub(crate) n_rows: usize,
    pub(crate) n_cols: usize,
}

impl Staged {
    /// Snapshot of a one-column table copied from `values`
    pub(crate) fn single_column(values: &[Value], name: &str) -> TableResult<Self> {
        let mut data = alloc_values(values.len())?;
        data.extend_from_slice(values);

        let mut columns = alloc_names(1)?;
        columns.push(dup_name(name)?);

        Ok(Self {
            data,
            columns: Some(columns),
            n_rows: values.len(),
            n_cols: 1,
        })
    }

    /// Snapshot of `table` with `values` appended as a last column named `name`
    ///
    /// The row stride changes, so every row is rebuilt.
    pub(crate) fn with_column(table: &Table, values: &[Value], name: &str) -> TableResult<Self> {
        let n_rows = table.n_rows();
        let n_cols = table.n_cols();
        let new_cols = n_cols.checked_add(1).ok_or(TableError::OutOfMemory)?;

        let mut data = alloc_values(checked_len(n_rows, new_cols)?)?;
        for (row, &value) in table.data().chunks_exact(n_cols).zip(values) {
            data.extend_from_slice(row);
            data.push(value);
        }

        let mut columns = alloc_names(new_cols)?;
        for existing in table.columns() {
            columns.push(dup_name(existing)?);
        }
        columns.push(dup_name(name)?);

        Ok(Self {
            data,
            columns: Some(columns),
            n_rows,
            n_cols: new_cols,
        })
    }

    /// Snapshot of `table` without the column at `ordinal`
    pub(crate) fn without_column(table: &Table, ordinal: usize) -> TableResult<Self> {
        let n_rows = table.n_rows();
        let n_cols = table.n_cols();
        let new_cols = n_cols - 1;

        let mut data = alloc_values(checked_len(n_rows, new_cols)?)?;
        for row in table.data().chunks_exact(n_cols) {
            data.extend_from_slice(&row[..ordinal]);
            data.extend_from_slice(&row[ordinal + 1..]);
        }

        let mut columns = alloc_names(new_cols)?;
        for (i, existing) in table.columns().iter().enumerate() {
            if i == ordinal {
                continue;
            }
            columns.push(dup_name(existing)?);
        }

        Ok(Self {
            data,
            columns: Some(columns),
            n_rows,
            n_cols: new_cols,
        })
    }

    /// Snapshot of `table` with `row` appended after the last row
    pub(crate) fn with_row(table: &Table, row: &[Value]) -> TableResult<Self> {
        let n_cols = table.n_cols();
        let new_rows = table.n_rows().checked_add(1).ok_or(TableError::OutOfMemory)?;

        let mut data = alloc_values(checked_len(new_rows, n_cols)?)?;
        data.extend_from_slice(table.data());
        data.extend_from_slice(row);

        Ok(Self {
            data,
            columns: None,
            n_rows: new_rows,
            n_cols,
        })
    }

    /// Snapshot of `table` without the row at `index`; later rows shift down
    pub(crate) fn without_row(table: &Table, index: usize) -> TableResult<Self> {
        let n_cols = table.n_cols();
        let new_rows = table.n_rows() - 1;

        let mut data = alloc_values(checked_len(new_rows, n_cols)?)?;
        let split = index * n_cols;
        data.extend_from_slice(&table.data()[..split]);
        data.extend_from_slice(&table.data()[split + n_cols..]);

        Ok(Self {
            data,
            columns: None,
            n_rows: new_rows,
            n_cols,
        })
    }
}

/// Number of values in a `rows x cols` buffer
///
/// Fails with `OutOfMemory` when either the element count or its byte size
/// overflows `usize`.
pub(crate) fn checked_len(rows: usize, cols: usize) -> TableResult<usize> {
    let len = rows.checked_mul(cols).ok_or(TableError::OutOfMemory)?;
    len.checked_mul(VALUE_SIZE).ok_or(TableError::OutOfMemory)?;
    Ok(len)
}

/// Empty value buffer with room for exactly `len` values
pub(crate) fn alloc_values(len: usize) -> TableResult<Vec<Value>> {
    inject_fault()?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    Ok(buf)
}

/// Empty name list with room for exactly `len` names
pub(crate) fn alloc_names(len: usize) -> TableResult<Vec<String>> {
    inject_fault()?;
    let mut names = Vec::new();
    names.try_reserve_exact(len)?;
    Ok(names)
}

/// Owned copy of a column name
pub(crate) fn dup_name(name: &str) -> TableResult<String> {
    inject_fault()?;
    let mut owned = String::new();
    owned.try_reserve_exact(name.len())?;
    owned.push_str(name);
    Ok(owned)
}

#[cfg(test)]
thread_local! {
    static FAIL_AFTER: std::cell::Cell<Option<usize>> = const { std::cell::Cell::new(None) };
}

/// Make the allocation after the next `successes` ones fail with `OutOfMemory`
#[cfg(test)]
pub(crate) fn fail_allocation_after(successes: usize) {
    FAIL_AFTER.with(|f| f.set(Some(successes)));
}

#[cfg(test)]
pub(crate) fn clear_allocation_fault() {
    FAIL_AFTER.with(|f| f.set(None));
}

#[cfg(test)]
fn inject_fault() -> TableResult<()> {
    FAIL_AFTER.with(|f| match f.get() {
        Some(0) => {
            f.set(None);
            Err(TableError::OutOfMemory)
        }
        Some(n) => {
            f.set(Some(n - 1));
            Ok(())
        }
        None => Ok(()),
    })
}

#[cfg(not(test))]
#[inline(always)]
fn inject_fault() -> TableResult<()> {
    Ok(())
}
