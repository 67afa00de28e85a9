/// Global type definitions
///
/// Stores constants and type aliases shared by the table store and its consumers

/// Cell value type. Every column holds 64-bit floats.
pub type Value = f64;

/// Size in bytes of one stored value
pub const VALUE_SIZE: usize = std::mem::size_of::<Value>();

/// Field separator of the CSV text form
pub const FIELD_SEPARATOR: char = ',';

/// Record separator of the CSV text form
pub const RECORD_SEPARATOR: char = '\n';

/// Decimal digits written per value when no precision is configured
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision the value formatter accepts
pub const MAX_PRECISION: usize = u16::MAX as usize;
