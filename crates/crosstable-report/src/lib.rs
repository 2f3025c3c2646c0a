//! Export of processed standings: CSV in the original schema (download
//! equivalent) and cross-event totals.

pub mod error;
pub mod export;

pub use error::{ExportError, Result};
pub use export::{
    export_csv, export_csv_to_path, export_totals_csv, export_totals_csv_to_path,
    format_numeric,
};
