//! fdm-rs: Finite-Difference Simulation Demos
//!
//! A small portfolio of numerical-visualization demonstrations built on a
//! shared toolbox: an implicit heat-equation solver cross-checked against
//! its closed-form solution, a Gray-Scott reaction-diffusion pattern
//! generator, and a Fourier-series vibrating membrane.
//!
//! # Architecture
//!
//! Two principles shape the crate:
//!
//! 1. **Separation of problems and methods**
//!    - [`models`] defines WHAT is simulated (parameters, initial
//!      conditions, exact solutions)
//!    - [`solver`] defines HOW (matrix assembly, time stepping)
//!
//! 2. **Computation never depends on presentation**
//!    - [`output`] consumes finished results by reference; a failed plot
//!      or export cannot corrupt a computed history
//!
//! Every run is deterministic: the same parameters (and, for Gray-Scott,
//! the same seed) reproduce the same output bit for bit.
//!
//! # Quick Start
//!
//! ```rust
//! use fdm_rs::models::HeatRod;
//! use fdm_rs::solver::{CrankNicolson, StepperConfig};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Describe the problem
//! let rod = HeatRod::new(1.0, 0.01, 11)?;
//!
//! // 2. Choose the time discretization
//! let config = StepperConfig::new(0.01, 5);
//!
//! // 3. Run the implicit stepper
//! let result = CrankNicolson::new().solve(&rod, &config)?;
//!
//! // 4. Compare against the exact solution
//! println!("max pointwise error: {:.3e}", result.max_error());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: sampling grids
//! - [`models`]: problem definitions (heat rod, Gray-Scott, membrane)
//! - [`solver`]: tridiagonal algebra and the Crank-Nicolson stepper
//! - [`config`]: TOML run configuration
//! - [`output`]: plotters figures and CSV export

// Core modules
pub mod config;
pub mod models;
pub mod output;
pub mod physics;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use fdm_rs::prelude::*;
    //! ```
    pub use crate::config::RunConfig;
    pub use crate::models::{
        FourierSolution, GaussianPluck, GrayScottGrid, GrayScottParams, HeatRod, MembraneParams,
    };
    pub use crate::physics::{Grid1d, Grid2d};
    pub use crate::solver::{CrankNicolson, SimulationResult, StepperConfig};
}
