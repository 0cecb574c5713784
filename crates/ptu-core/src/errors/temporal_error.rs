use crate::time::{TimeField, TimeUnit};

/// Time-axis errors: unsupported units/fields and out-of-range values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    #[error("unsupported temporal unit: {unit}")]
    UnsupportedUnit { unit: TimeUnit },

    #[error("unsupported temporal field: {field}")]
    UnsupportedField { field: TimeField },

    #[error("value {value} out of range for field {field}")]
    FieldValueOutOfRange { field: TimeField, value: i64 },

    #[error("quarter-hour index {index} out of range 0..{slots} on {date}")]
    IndexOutOfRange {
        index: i64,
        slots: i64,
        date: chrono::NaiveDate,
    },

    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result alias for the time layer.
pub type TemporalResult<T> = Result<T, TemporalError>;
