//! CSV writer

use crate::csv::options::CsvOptions;
use crate::table::error::{TableError, TableResult};
use crate::table::Table;
use crate::types::{FIELD_SEPARATOR, MAX_PRECISION, RECORD_SEPARATOR};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `table` to `path`, formatting every value with `precision` decimals
pub fn write_csv(table: &Table, path: impl AsRef<Path>, precision: usize) -> TableResult<()> {
    write_csv_with(table, path, &CsvOptions::default().with_precision(precision))
}

/// Write `table` to `path` using `options`
///
/// # Errors
/// * `BadArgument` - see [`write_table`]; nothing is created on disk
/// * `Io` - the destination cannot be created or written
pub fn write_csv_with(table: &Table, path: impl AsRef<Path>, options: &CsvOptions) -> TableResult<()> {
    let path = path.as_ref();
    check_writable(table, options.precision)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_table(&mut writer, table, options.precision)?;
    writer.flush()?;

    debug!(
        "wrote {}x{} table to {}",
        table.n_rows(),
        table.n_cols(),
        path.display()
    );
    Ok(())
}

/// Write the CSV text form of `table` to any writer
///
/// Header first, then one line per row. Lines are separated, not
/// terminated: nothing follows the last row.
///
/// # Errors
/// * `BadArgument` - `precision` exceeds [`MAX_PRECISION`] or the table holds
///   a NaN or infinite value; nothing is written
/// * `Io` - the writer failed
pub fn write_table<W: Write>(writer: &mut W, table: &Table, precision: usize) -> TableResult<()> {
    check_writable(table, precision)?;

    for (i, name) in table.columns().iter().enumerate() {
        if i > 0 {
            write!(writer, "{}", FIELD_SEPARATOR)?;
        }
        writer.write_all(name.as_bytes())?;
    }

    for row in table.data().chunks_exact(table.n_cols()) {
        write!(writer, "{}", RECORD_SEPARATOR)?;
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                write!(writer, "{}", FIELD_SEPARATOR)?;
            }
            write!(writer, "{:.*}", precision, value)?;
        }
    }
    Ok(())
}

/// Reject anything the reader could not parse back
fn check_writable(table: &Table, precision: usize) -> TableResult<()> {
    if precision > MAX_PRECISION {
        return Err(TableError::BadArgument(format!(
            "precision {} exceeds {}",
            precision, MAX_PRECISION
        )));
    }
    if let Some(pos) = table.data().iter().position(|v| !v.is_finite()) {
        let (row, col) = (pos / table.n_cols(), pos % table.n_cols());
        return Err(TableError::BadArgument(format!(
            "non-finite value {} at row {} in column {:?}",
            table.data()[pos],
            row,
            table.columns()[col]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableBuilder;

    fn render(table: &Table, precision: usize) -> String {
        let mut out = Vec::new();
        write_table(&mut out, table, precision).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_table_layout() {
        let table = TableBuilder::new()
            .column("foo", vec![1.0, 2.0])
            .column("bar", vec![0.25, 10.0])
            .build()
            .unwrap();

        assert_eq!(render(&table, 2), "foo,bar\n1.00,0.25\n2.00,10.00");
        assert_eq!(render(&table, 0), "foo,bar\n1,0\n2,10");
    }

    #[test]
    fn test_write_table_single_column() {
        let table = Table::from_array(&[3.0], "x").unwrap();
        assert_eq!(render(&table, 1), "x\n3.0");
    }

    #[test]
    fn test_write_table_negative_values() {
        let table = Table::from_array(&[-1.5, -0.0], "x").unwrap();
        assert_eq!(render(&table, 2), "x\n-1.50\n-0.00");
    }

    #[test]
    fn test_write_table_precision_limit() {
        let table = Table::from_array(&[1.0], "x").unwrap();
        assert_eq!(render(&table, MAX_PRECISION).len(), "x\n1.".len() + MAX_PRECISION);

        let mut out = Vec::new();
        let err = write_table(&mut out, &table, 70_000).unwrap_err();
        assert!(matches!(err, TableError::BadArgument(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_table_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let table = TableBuilder::new()
                .column("a", vec![1.0, 2.0])
                .column("b", vec![3.0, bad])
                .build()
                .unwrap();
            let mut out = Vec::new();
            let err = write_table(&mut out, &table, 2).unwrap_err();
            assert!(matches!(err, TableError::BadArgument(ref msg) if msg.contains("row 1")));
            assert!(out.is_empty());
        }
    }
}
