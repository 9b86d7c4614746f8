//! Bar loading, instrument catalog and flat-file export.

mod catalog;
mod csv_source;
mod export;

pub use catalog::Catalog;
pub use csv_source::CsvBarSource;
pub use export::{write_csv, write_json, ExportFormat};

use std::path::Path;
use stocklab_core::error::PipelineError;
use stocklab_core::traits::DataSource;
use stocklab_core::types::Series;

/// Load a validated series from a CSV file.
pub fn load_csv(path: &Path, symbol: &str) -> Result<Series, PipelineError> {
    let source = CsvBarSource::new(path)?;
    source.load_series(symbol)
}
