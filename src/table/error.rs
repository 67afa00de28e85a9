//! Table error definitions

use std::error::Error;
use std::fmt;

/// Closed classification of table failures
///
/// Every [`TableError`] maps onto exactly one kind, so callers can branch on
/// the kind without caring about the attached context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Column already exists
    ColumnExists,
    /// Column not found
    ColumnNotFound,
    /// Row not found
    RowNotFound,
    /// Cannot delete last column
    LastColumn,
    /// Cannot delete last row
    LastRow,
    /// Data length does not match the row count
    RowMismatch,
    /// Data length does not match the column count
    ColumnMismatch,
    /// I/O or malformed input
    Io,
    /// Allocation failed or size overflowed
    OutOfMemory,
    /// Invalid argument provided
    BadArgument,
}

impl ErrorKind {
    /// Canonical message for this kind
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::ColumnExists => "Column already exists",
            ErrorKind::ColumnNotFound => "Column not found",
            ErrorKind::RowNotFound => "Row not found",
            ErrorKind::LastColumn => "Cannot delete last column",
            ErrorKind::LastRow => "Cannot delete last row",
            ErrorKind::RowMismatch => "Data length does not match row count",
            ErrorKind::ColumnMismatch => "Data length does not match column count",
            ErrorKind::Io => "I/O error",
            ErrorKind::OutOfMemory => "Out of memory",
            ErrorKind::BadArgument => "Bad argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Table error types
///
/// Represents all possible errors of the table store, the column algebra
/// and the CSV codec.
#[derive(Debug)]
pub enum TableError {
    /// Column name already present in the table
    ColumnExists(String),
    /// No column with this name
    ColumnNotFound(String),
    /// Row index outside `0..n_rows`
    RowNotFound { index: usize, n_rows: usize },
    /// Dropping would leave the table without columns
    LastColumn,
    /// Dropping would leave the table without rows
    LastRow,
    /// Column data length differs from the row count
    RowMismatch { expected: usize, actual: usize },
    /// Row data length differs from the column count
    ColumnMismatch { expected: usize, actual: usize },
    /// I/O error while reading or writing a file
    Io(std::io::Error),
    /// Malformed CSV input (1-based line number)
    Parse { line: usize, reason: String },
    /// Allocation failed or the requested size overflowed
    OutOfMemory,
    /// Invalid argument provided
    BadArgument(String),
}

impl TableError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::ColumnExists(_) => ErrorKind::ColumnExists,
            TableError::ColumnNotFound(_) => ErrorKind::ColumnNotFound,
            TableError::RowNotFound { .. } => ErrorKind::RowNotFound,
            TableError::LastColumn => ErrorKind::LastColumn,
            TableError::LastRow => ErrorKind::LastRow,
            TableError::RowMismatch { .. } => ErrorKind::RowMismatch,
            TableError::ColumnMismatch { .. } => ErrorKind::ColumnMismatch,
            TableError::Io(_) | TableError::Parse { .. } => ErrorKind::Io,
            TableError::OutOfMemory => ErrorKind::OutOfMemory,
            TableError::BadArgument(_) => ErrorKind::BadArgument,
        }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        TableError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ColumnExists(name) => write!(f, "Column already exists: {}", name),
            TableError::ColumnNotFound(name) => write!(f, "Column not found: {}", name),
            TableError::RowNotFound { index, n_rows } => {
                write!(f, "Row not found: {} (table has {} rows)", index, n_rows)
            }
            TableError::LastColumn => f.write_str(ErrorKind::LastColumn.message()),
            TableError::LastRow => f.write_str(ErrorKind::LastRow.message()),
            TableError::RowMismatch { expected, actual } => write!(
                f,
                "Data length does not match row count: expected {}, got {}",
                expected, actual
            ),
            TableError::ColumnMismatch { expected, actual } => write!(
                f,
                "Data length does not match column count: expected {}, got {}",
                expected, actual
            ),
            TableError::Io(err) => write!(f, "I/O error: {}", err),
            TableError::Parse { line, reason } => {
                write!(f, "I/O error: malformed CSV at line {}: {}", line, reason)
            }
            TableError::OutOfMemory => f.write_str(ErrorKind::OutOfMemory.message()),
            TableError::BadArgument(msg) => write!(f, "Bad argument: {}", msg),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

impl From<std::collections::TryReserveError> for TableError {
    fn from(_: std::collections::TryReserveError) -> Self {
        TableError::OutOfMemory
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::ColumnExists("f1".to_string());
        assert_eq!(err.to_string(), "Column already exists: f1");

        let err = TableError::ColumnNotFound("f9".to_string());
        assert_eq!(err.to_string(), "Column not found: f9");

        let err = TableError::RowNotFound { index: 3, n_rows: 3 };
        assert_eq!(err.to_string(), "Row not found: 3 (table has 3 rows)");

        assert_eq!(TableError::LastColumn.to_string(), "Cannot delete last column");
    }

    #[test]
    fn test_table_error_kind() {
        assert_eq!(TableError::LastRow.kind(), ErrorKind::LastRow);
        assert_eq!(TableError::parse(2, "bad field").kind(), ErrorKind::Io);
        assert_eq!(
            TableError::RowMismatch { expected: 3, actual: 2 }.kind(),
            ErrorKind::RowMismatch
        );
    }

    #[test]
    fn test_table_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_table_error_from_try_reserve() {
        let mut buf: Vec<f64> = Vec::new();
        let err: TableError = buf.try_reserve_exact(usize::MAX).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::OutOfMemory);
    }
}
