//! Elementwise column arithmetic

use crate::table::error::{TableError, TableResult};
use crate::table::staging::alloc_values;
use crate::table::Table;
use crate::types::Value;
use std::fmt;

/// Arithmetic operator applied row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    /// Division; a zero divisor yields `0.0` instead of NaN or infinity
    Div,
}

impl ArithOp {
    /// Apply the operator to one pair of values
    #[inline]
    pub fn apply(self, a: Value, b: Value) -> Value {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }

    /// Operator symbol (`+`, `-`, `*`, `/`)
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for ArithOp {
    type Error = TableError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(ArithOp::Add),
            '-' => Ok(ArithOp::Sub),
            '*' => Ok(ArithOp::Mul),
            '/' => Ok(ArithOp::Div),
            other => Err(TableError::BadArgument(format!(
                "unknown operator: {}",
                other
            ))),
        }
    }
}

impl Table {
    /// `lhs op rhs` for every row, as a new vector of length `n_rows`
    ///
    /// # Errors
    /// * `ColumnNotFound` - either column is missing (`lhs` is checked first)
    /// * `OutOfMemory` - allocation failed
    pub fn col_arith(&self, lhs: &str, rhs: &str, op: ArithOp) -> TableResult<Vec<Value>> {
        let a = self.require_column(lhs)?;
        let b = self.require_column(rhs)?;

        let mut out = alloc_values(self.n_rows())?;
        out.extend(a.values().zip(b.values()).map(|(x, y)| op.apply(x, y)));
        Ok(out)
    }

    /// `column op scalar` for every row, as a new vector of length `n_rows`
    ///
    /// # Errors
    /// * `ColumnNotFound` - no such column
    /// * `OutOfMemory` - allocation failed
    pub fn col_arith_scalar(&self, name: &str, scalar: Value, op: ArithOp) -> TableResult<Vec<Value>> {
        let col = self.require_column(name)?;

        let mut out = alloc_values(self.n_rows())?;
        out.extend(col.values().map(|x| op.apply(x, scalar)));
        Ok(out)
    }

    /// Row-wise `lhs + rhs`
    pub fn col_add(&self, lhs: &str, rhs: &str) -> TableResult<Vec<Value>> {
        self.col_arith(lhs, rhs, ArithOp::Add)
    }

    /// Row-wise `lhs - rhs`
    pub fn col_sub(&self, lhs: &str, rhs: &str) -> TableResult<Vec<Value>> {
        self.col_arith(lhs, rhs, ArithOp::Sub)
    }

    /// Row-wise `lhs * rhs`
    pub fn col_mul(&self, lhs: &str, rhs: &str) -> TableResult<Vec<Value>> {
        self.col_arith(lhs, rhs, ArithOp::Mul)
    }

    /// Rows where `rhs` is zero produce `0.0`
    pub fn col_div(&self, lhs: &str, rhs: &str) -> TableResult<Vec<Value>> {
        self.col_arith(lhs, rhs, ArithOp::Div)
    }

    /// Add `scalar` to every row
    pub fn col_add_s(&self, name: &str, scalar: Value) -> TableResult<Vec<Value>> {
        self.col_arith_scalar(name, scalar, ArithOp::Add)
    }

    /// Subtract `scalar` from every row
    pub fn col_sub_s(&self, name: &str, scalar: Value) -> TableResult<Vec<Value>> {
        self.col_arith_scalar(name, scalar, ArithOp::Sub)
    }

    /// Multiply every row by `scalar`
    pub fn col_mul_s(&self, name: &str, scalar: Value) -> TableResult<Vec<Value>> {
        self.col_arith_scalar(name, scalar, ArithOp::Mul)
    }

    /// A zero `scalar` produces `0.0` for every row
    pub fn col_div_s(&self, name: &str, scalar: Value) -> TableResult<Vec<Value>> {
        self.col_arith_scalar(name, scalar, ArithOp::Div)
    }
}
