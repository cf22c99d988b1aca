//! Typed errors for chart encoding

use thiserror::Error;

/// Errors from the chart encoders
///
/// Encoding itself is deterministic; these only arise when the caller asks
/// for columns the series does not have.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The series has no column with this name
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A line chart needs at least one y field
    #[error("No y fields given for line chart")]
    NoSeries,

    /// Two columns of the same series disagree on length
    #[error("Column {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to serialize chart: {0}")]
    Serialize(#[from] serde_json::Error),
}
