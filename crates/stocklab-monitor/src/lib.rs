//! Logging setup and batch run reporting.

mod logging;
mod report;

pub use logging::setup_logging;
pub use report::BatchReport;
