use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WaveError {
    #[error("Invalid interval: start {0} is greater than end {1}")]
    InvalidInterval(i64, i64),

    #[error("Point {0} lies outside the total interval [{1}, {2}]")]
    PointOutOfBounds(i64, i64, i64),

    #[error("Minimum covering length {0} exceeds total interval length {1}")]
    IntervalTooSmall(i64, i64),

    #[error("Minimum covering length must be positive, got {0}")]
    InvalidMinLength(i64),

    #[error("Unknown annotation symbol: '{0}'")]
    UnknownSymbol(char),
}

pub type Result<T> = std::result::Result<T, WaveError>;
