//! Output module for simulation results
//!
//! Two concerns, two sub-modules:
//!
//! - **Visualization**: PNG/SVG figures using plotters
//! - **Export**: CSV data export for external analysis
//!
//! Rendering and export consume already-computed results by reference;
//! a failure here can never corrupt the profile sequences it was given.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fdm_rs::output::visualization::{plot_profile_comparison, PlotConfig};
//! use fdm_rs::output::export::export_profiles_csv;
//!
//! plot_profile_comparison(&result, rod.grid(), "comparison.png", None)?;
//! export_profiles_csv(&result.time_points, &result.numerical, "numerical.csv", None)?;
//! ```

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    PlotConfig, plot_profile_comparison, plot_surface, render_field_frame,
};

pub use export::{CsvConfig, export_error_summary_csv, export_profiles_csv};
