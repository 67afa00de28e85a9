//! Column algebra
//!
//! Elementwise arithmetic between two columns or a column and a scalar, and
//! single-column reductions. Everything here reads the table only through
//! column lookup and the strided [`Column`](crate::table::Column) view.

pub mod arith;
pub mod stats;

pub use arith::ArithOp;
pub use stats::ColumnStats;
