//! CLI command implementations.

pub mod batch;
pub mod enrich;
pub mod signal;
pub mod snapshot;
pub mod symbols;
pub mod validate;
