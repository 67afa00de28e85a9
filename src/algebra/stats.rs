//! Column reductions

use crate::table::error::TableResult;
use crate::table::{Column, Table};
use crate::types::Value;

/// Summary statistics of one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub sum: Value,
    pub mean: Value,
    pub min: Value,
    pub max: Value,
    /// Population variance (divisor `count`)
    pub var: Value,
    pub std: Value,
}

fn sum(col: Column<'_>) -> Value {
    col.values().sum()
}

fn mean(col: Column<'_>) -> Value {
    sum(col) / col.len() as Value
}

// Keeps the first value unless a later one compares strictly lower; NaN
// entries therefore never replace an existing extreme.
fn min(col: Column<'_>) -> Value {
    col.values()
        .reduce(|acc, x| if acc > x { x } else { acc })
        .unwrap_or(Value::NAN)
}

fn max(col: Column<'_>) -> Value {
    col.values()
        .reduce(|acc, x| if acc < x { x } else { acc })
        .unwrap_or(Value::NAN)
}

fn variance(col: Column<'_>) -> Value {
    let mean = mean(col);
    let squares: Value = col.values().map(|x| (x - mean).powi(2)).sum();
    squares / col.len() as Value
}

impl Table {
    /// Sum of the column named `name`
    pub fn col_sum(&self, name: &str) -> TableResult<Value> {
        Ok(sum(self.require_column(name)?))
    }

    /// Arithmetic mean of the column named `name`
    pub fn col_mean(&self, name: &str) -> TableResult<Value> {
        Ok(mean(self.require_column(name)?))
    }

    /// Smallest value of the column named `name`
    pub fn col_min(&self, name: &str) -> TableResult<Value> {
        Ok(min(self.require_column(name)?))
    }

    /// Largest value of the column named `name`
    pub fn col_max(&self, name: &str) -> TableResult<Value> {
        Ok(max(self.require_column(name)?))
    }

    /// Population variance: `sum((x - mean)^2) / n_rows`
    pub fn col_var(&self, name: &str) -> TableResult<Value> {
        Ok(variance(self.require_column(name)?))
    }

    /// Population standard deviation: `sqrt(col_var)`
    pub fn col_std(&self, name: &str) -> TableResult<Value> {
        Ok(variance(self.require_column(name)?).sqrt())
    }

    /// All reductions of the column named `name` at once
    pub fn describe(&self, name: &str) -> TableResult<ColumnStats> {
        let col = self.require_column(name)?;
        let var = variance(col);
        Ok(ColumnStats {
            count: col.len(),
            sum: sum(col),
            mean: mean(col),
            min: min(col),
            max: max(col),
            var,
            std: var.sqrt(),
        })
    }
}
