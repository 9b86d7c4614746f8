//! Core types and traits for the stocklab pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, Series, IndicatorRow)
//! - Instrument catalog types (Exchange, Instrument)
//! - Core traits for indicators and data sources

pub mod types;
pub mod traits;
pub mod error;

pub use error::{PipelineError, PipelineResult, ValidationError};
pub use types::*;
pub use traits::*;
