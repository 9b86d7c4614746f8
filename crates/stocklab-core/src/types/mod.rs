//! Core data types for the pipeline.

mod bar;
mod instrument;
mod row;

pub use bar::{Bar, Series};
pub use instrument::{Exchange, Instrument, MarketCapBand};
pub use row::IndicatorRow;
