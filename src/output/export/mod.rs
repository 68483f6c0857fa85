//! Data export for external analysis

pub mod csv;

pub use csv::{CsvConfig, export_error_summary_csv, export_profiles_csv};
