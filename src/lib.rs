//! Framestore in-memory table library
//!
//! A row-major matrix of `f64` values with unique, ordered column names,
//! columnar arithmetic and statistics, and a CSV text codec.

// Global type definitions
pub mod types;

// Import various modules
pub mod algebra;
pub mod csv;
pub mod table;

// Re-export table items for easier access
pub use table::{Column, ErrorKind, Table, TableBuilder, TableError, TableResult};

// Re-export codec and algebra items
pub use algebra::{ArithOp, ColumnStats};
pub use csv::{read_csv, write_csv, CsvOptions, NumberFormat};
