use thiserror::Error;

/// Invalid input to a pay rate calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayError {
    #[error("increment must be greater than zero, got {increment}")]
    InvalidIncrement { increment: f64 },

    #[error("low rate {low} is greater than high rate {high}")]
    InvertedRange { low: f64, high: f64 },

    /// A bound was negative, NaN or infinite.
    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidBound { name: &'static str, value: f64 },

    #[error("tax rate must be between 0 and 100 percent, got {0}")]
    InvalidTaxRate(f64),

    #[error("range would produce {rows} rows, the limit is {limit}")]
    TooManyRows { rows: f64, limit: usize },
}
