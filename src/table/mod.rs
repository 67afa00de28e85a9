//! Table module for the in-memory row-major store
//!
//! This module implements the table store with the following features:
//! - Single-column construction from an array
//! - Column and row fetch, append and drop
//! - All-or-nothing mutation through staged snapshots

pub mod builder;
pub mod column;
pub mod error;
pub(crate) mod staging;
pub mod table;

pub use builder::TableBuilder;
pub use column::Column;
pub use error::{ErrorKind, TableError, TableResult};
pub use table::Table;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
