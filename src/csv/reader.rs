//! CSV reader
//!
//! The first line is the header; every following non-empty line is one row.
//! The whole input is staged before the table is created, so a rejected file
//! never yields a partially filled table.

use crate::csv::options::{CsvOptions, NumberFormat};
use crate::table::error::{TableError, TableResult};
use crate::table::staging::{alloc_names, dup_name, Staged};
use crate::table::Table;
use crate::types::{Value, FIELD_SEPARATOR};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a table from the CSV file at `path` with default options
pub fn read_csv(path: impl AsRef<Path>) -> TableResult<Table> {
    read_csv_with(path, &CsvOptions::default())
}

/// Read a table from the CSV file at `path`
///
/// # Errors
/// * `Io` - the file cannot be opened or read, or its content is malformed
/// * `ColumnExists` - the header repeats a column name
/// * `OutOfMemory` - allocation failed
pub fn read_csv_with(path: impl AsRef<Path>, options: &CsvOptions) -> TableResult<Table> {
    let path = path.as_ref();
    let result = File::open(path)
        .map_err(TableError::from)
        .and_then(|file| parse_csv(BufReader::new(file), options.number_format));

    match &result {
        Ok(table) => debug!(
            "read {}x{} table from {}",
            table.n_rows(),
            table.n_cols(),
            path.display()
        ),
        Err(err) => warn!("rejected CSV {}: {}", path.display(), err),
    }
    result
}

/// Parse CSV text from any buffered reader
pub fn parse_csv<R: BufRead>(reader: R, number_format: NumberFormat) -> TableResult<Table> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(TableError::parse(1, "missing header")),
    };
    let columns = parse_header(strip_line_end(&header))?;
    let n_cols = columns.len();

    let mut data: Vec<Value> = Vec::new();
    let mut n_rows = 0;
    // header is line 1
    for (line_no, line) in (2..).zip(lines) {
        let line = line?;
        let line = strip_line_end(&line);
        if line.is_empty() {
            continue;
        }

        let n_fields = line.split(FIELD_SEPARATOR).count();
        if n_fields != n_cols {
            return Err(TableError::parse(
                line_no,
                format!("expected {} fields, found {}", n_cols, n_fields),
            ));
        }

        data.try_reserve(n_cols)?;
        for field in line.split(FIELD_SEPARATOR) {
            let value = parse_number(field, number_format).ok_or_else(|| {
                TableError::parse(line_no, format!("invalid number: {:?}", field))
            })?;
            data.push(value);
        }
        n_rows += 1;
    }

    if n_rows == 0 {
        return Err(TableError::parse(1, "no data rows"));
    }

    Ok(Table::from_staged(Staged {
        data,
        columns: Some(columns),
        n_rows,
        n_cols,
    }))
}

fn strip_line_end(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_header(header: &str) -> TableResult<Vec<String>> {
    let n_cols = header.split(FIELD_SEPARATOR).count();
    let mut columns = alloc_names(n_cols)?;

    for name in header.split(FIELD_SEPARATOR) {
        if let Some(reason) = Table::invalid_name_reason(name) {
            return Err(TableError::parse(1, reason));
        }
        if columns.iter().any(|c| c == name) {
            return Err(TableError::ColumnExists(name.to_string()));
        }
        columns.push(dup_name(name)?);
    }
    Ok(columns)
}

/// Parse one numeric field; `None` when it does not match `format`
pub fn parse_number(field: &str, format: NumberFormat) -> Option<Value> {
    match format {
        NumberFormat::Digits => parse_digits(field),
        NumberFormat::Decimal => parse_decimal(field),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(field: &str) -> Option<Value> {
    if !is_digits(field) {
        return None;
    }
    Some(
        field
            .bytes()
            .fold(0.0, |acc, b| acc * 10.0 + Value::from(b - b'0')),
    )
}

fn parse_decimal(field: &str) -> Option<Value> {
    let unsigned = field.strip_prefix('-').unwrap_or(field);
    let valid = match unsigned.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(unsigned),
    };
    if !valid {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_number("0", NumberFormat::Digits), Some(0.0));
        assert_eq!(parse_number("1234", NumberFormat::Digits), Some(1234.0));
        assert_eq!(parse_number("007", NumberFormat::Digits), Some(7.0));
        assert_eq!(parse_number("", NumberFormat::Digits), None);
        assert_eq!(parse_number("-1", NumberFormat::Digits), None);
        assert_eq!(parse_number("1.5", NumberFormat::Digits), None);
        assert_eq!(parse_number("1e3", NumberFormat::Digits), None);
        assert_eq!(parse_number(" 1", NumberFormat::Digits), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_number("12", NumberFormat::Decimal), Some(12.0));
        assert_eq!(parse_number("1.500000", NumberFormat::Decimal), Some(1.5));
        assert_eq!(parse_number("0.25", NumberFormat::Decimal), Some(0.25));
        assert_eq!(parse_number("1.", NumberFormat::Decimal), None);
        assert_eq!(parse_number(".5", NumberFormat::Decimal), None);
        assert_eq!(parse_number("1.2.3", NumberFormat::Decimal), None);
        assert_eq!(parse_number("+1", NumberFormat::Decimal), None);
        assert_eq!(parse_number("--1.0", NumberFormat::Decimal), None);
        assert_eq!(parse_number("-", NumberFormat::Decimal), None);
        assert_eq!(parse_number("-.5", NumberFormat::Decimal), None);
        assert_eq!(parse_number("1e3", NumberFormat::Decimal), None);
        assert_eq!(parse_number("inf", NumberFormat::Decimal), None);
        assert_eq!(parse_number("NaN", NumberFormat::Decimal), None);
    }

    #[test]
    fn test_parse_decimal_negative() {
        assert_eq!(parse_number("-2.500000", NumberFormat::Decimal), Some(-2.5));
        assert_eq!(parse_number("-7", NumberFormat::Decimal), Some(-7.0));
        let zero = parse_number("-0.000000", NumberFormat::Decimal).unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());
    }

    #[test]
    fn test_parse_csv_from_reader() {
        let input = "a,b\n1,2\n\n3,4\r\n";
        let table = parse_csv(input.as_bytes(), NumberFormat::Digits).unwrap();
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.columns(), ["a".to_string(), "b".to_string()]);
        assert_eq!(table.data(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parse_csv_reports_line() {
        let input = "a,b\n1,2\n3\n";
        let err = parse_csv(input.as_bytes(), NumberFormat::Digits).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_csv_bad_header() {
        let err = parse_csv("".as_bytes(), NumberFormat::Digits).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 1, .. }));

        let err = parse_csv("a,,b\n1,2,3".as_bytes(), NumberFormat::Digits).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 1, .. }));

        let err = parse_csv("a,a\n1,2".as_bytes(), NumberFormat::Digits).unwrap_err();
        assert!(matches!(err, TableError::ColumnExists(ref name) if name == "a"));
    }

    #[test]
    fn test_parse_csv_header_only() {
        let err = parse_csv("a,b\n".as_bytes(), NumberFormat::Digits).unwrap_err();
        assert!(matches!(err, TableError::Parse { .. }));
    }
}
