//! Error types for the pipeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Malformed input series. Fails fast, surfaced to the caller, not retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("series is empty")]
    EmptySeries,

    #[error("dates are not strictly ascending: {prev} followed by {next}")]
    NonAscendingDates { prev: NaiveDate, next: NaiveDate },

    #[error("duplicate date in series: {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested symbol")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
