//! Visualization of simulation results with plotters
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **comparison**: Numerical vs analytical profiles at selected instants
//! - **surface**: 3D surface of the full space-time solution
//! - **field**: Colormapped frames of 2D scalar fields (Gray-Scott,
//!   membrane snapshots)
//!
//! Figure files are PNG or SVG depending on the output path extension,
//! except for `field` frames which are always bitmaps.

pub mod comparison;
pub mod config;
pub mod field;
pub mod surface;

pub use comparison::plot_profile_comparison;
pub use config::PlotConfig;
pub use field::render_field_frame;
pub use surface::plot_surface;
