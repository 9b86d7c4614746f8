//! Data source trait definition.

use crate::error::{DataError, PipelineError};
use crate::types::{Bar, Series};

/// A source of historical daily bars.
///
/// File load, database query or any other origin satisfies the contract as
/// long as it returns bars oldest-first; ordering and uniqueness are then
/// enforced by [`Series::new`].
pub trait DataSource {
    /// Load all bars for a symbol, oldest first.
    fn load_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError>;

    /// Load bars and validate them into a series.
    fn load_series(&self, symbol: &str) -> Result<Series, PipelineError> {
        let bars = self.load_bars(symbol)?;
        Ok(Series::new(symbol, bars)?)
    }
}
