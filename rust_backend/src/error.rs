//! Error types shared by every exercise in the crate.

/// Result type for kata operations
pub type KataResult<T> = Result<T, KataError>;

/// Error type for kata operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KataError {
    #[error("Invalid hour: {0}. Hour must be between 0 and 23")]
    InvalidHour(i64),

    #[error("Division by zero: weighted denominator is zero")]
    ZeroDenominator,

    #[error("Length mismatch: {groups} score groups but {weights} importance weights")]
    LengthMismatch { groups: usize, weights: usize },

    #[error("Empty sample range: low ({low}) must be less than high ({high})")]
    EmptySampleRange { low: i64, high: i64 },

    #[error("Aggregated score is not a finite number")]
    NonFiniteScore,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl KataError {
    /// True for the arithmetic failure raised by an all-empty aggregation.
    pub fn is_zero_denominator(&self) -> bool {
        matches!(self, KataError::ZeroDenominator)
    }
}
