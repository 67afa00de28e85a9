//! TableBuilder for fluent table construction
//!
//! Provides a builder pattern for creating multi-column tables with:
//! - Column definition in table order
//! - Validation of row counts and names before the table is returned

use crate::table::error::{TableError, TableResult};
use crate::table::Table;
use crate::types::Value;

/// Builder for constructing Table instances
///
/// # Example
/// ```
/// use framestore::table::TableBuilder;
///
/// let table = TableBuilder::new()
///     .column("id", vec![1.0, 2.0, 3.0])
///     .column("score", vec![0.5, 0.25, 0.125])
///     .build()
///     .unwrap();
/// assert_eq!(table.shape(), (3, 2));
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<(String, Vec<Value>)>,
}

impl TableBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single column
    pub fn column(mut self, name: impl Into<String>, values: impl Into<Vec<Value>>) -> Self {
        self.columns.push((name.into(), values.into()));
        self
    }

    /// Add multiple columns at once
    pub fn columns<N, V>(mut self, columns: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<Vec<Value>>,
    {
        for (name, values) in columns {
            self.columns.push((name.into(), values.into()));
        }
        self
    }

    /// Build the table
    ///
    /// The first column goes through [`Table::from_array`], the rest through
    /// [`Table::append_column`], so the same validation applies.
    pub fn build(self) -> TableResult<Table> {
        let mut columns = self.columns.into_iter();
        let (first_name, first_values) = columns.next().ok_or_else(|| {
            TableError::BadArgument("table needs at least one column".to_string())
        })?;

        let mut table = Table::from_array(&first_values, &first_name)?;
        for (name, values) in columns {
            table.append_column(&values, &name)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ErrorKind;

    #[test]
    fn test_table_builder_basic() {
        let table = TableBuilder::new()
            .column("id", vec![1.0, 2.0])
            .build()
            .unwrap();

        assert_eq!(table.shape(), (2, 1));
        assert_eq!(table.columns(), ["id".to_string()]);
    }

    #[test]
    fn test_table_builder_multiple_columns() {
        let table = TableBuilder::new()
            .column("a", vec![1.0, 2.0])
            .column("b", vec![3.0, 4.0])
            .column("c", vec![5.0, 6.0])
            .build()
            .unwrap();

        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.column_index("c"), Some(2));
        assert_eq!(table.row(1), Some(&[2.0, 4.0, 6.0][..]));
    }

    #[test]
    fn test_table_builder_columns_batch() {
        let table = TableBuilder::new()
            .columns([("x", vec![1.0]), ("y", vec![2.0])])
            .build()
            .unwrap();

        assert_eq!(table.n_cols(), 2);
    }

    #[test]
    fn test_table_builder_empty() {
        let err = TableBuilder::new().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
    }

    #[test]
    fn test_table_builder_rejects_bad_columns() {
        let err = TableBuilder::new()
            .column("a", vec![1.0, 2.0])
            .column("b", vec![1.0])
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RowMismatch);

        let err = TableBuilder::new()
            .column("a", vec![1.0])
            .column("a", vec![2.0])
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnExists);
    }
}
