//! CSV codec configuration

use crate::table::error::{TableError, TableResult};
use crate::types::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Grammar accepted for numeric fields when reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Unsigned integer digits only; no sign, decimal point or exponent
    Digits,
    /// `[-]digits[.digits]`; no plus sign or exponent. Accepts everything
    /// the writer emits.
    #[default]
    Decimal,
}

/// CSV read/write options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Numeric grammar used by the reader
    pub number_format: NumberFormat,
    /// Decimal digits written per value
    pub precision: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CsvOptions {
    /// Set the numeric grammar used by the reader
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Set the decimal digits written per value
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> TableResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TableError::BadArgument(format!("invalid CSV options: {}", e)))
    }

    /// Load options from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> TableResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize options to JSON
    pub fn to_json(&self) -> TableResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TableError::BadArgument(format!("cannot encode CSV options: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ErrorKind;

    #[test]
    fn test_csv_options_default() {
        let options = CsvOptions::default();
        assert_eq!(options.number_format, NumberFormat::Decimal);
        assert_eq!(options.precision, 6);
    }

    #[test]
    fn test_csv_options_from_json() {
        let options = CsvOptions::from_json_str(r#"{"number_format": "digits"}"#).unwrap();
        assert_eq!(options.number_format, NumberFormat::Digits);
        assert_eq!(options.precision, DEFAULT_PRECISION);

        let options = CsvOptions::from_json_str(r#"{"precision": 2}"#).unwrap();
        assert_eq!(options, CsvOptions::default().with_precision(2));
    }

    #[test]
    fn test_csv_options_json_round_trip() {
        let options = CsvOptions::default()
            .with_number_format(NumberFormat::Digits)
            .with_precision(0);
        let json = options.to_json().unwrap();
        assert_eq!(CsvOptions::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_csv_options_invalid_json() {
        let err = CsvOptions::from_json_str(r#"{"number_format": "hex"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
    }
}
