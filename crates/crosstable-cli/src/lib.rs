//! CLI library components for the crosstable binary.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
