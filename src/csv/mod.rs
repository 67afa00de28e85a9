//! CSV codec
//!
//! Reads and writes the canonical text form of a table:
//! - first line: comma-separated column names
//! - following lines: one row of comma-separated numbers each
//!
//! There is no quoting or escaping; names and values never contain commas.

pub mod options;
pub mod reader;
pub mod writer;

pub use options::{CsvOptions, NumberFormat};
pub use reader::{parse_csv, read_csv, read_csv_with};
pub use writer::{write_csv, write_csv_with, write_table};
