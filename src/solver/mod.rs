//! Numerical solvers
//!
//! This module provides the time-stepping machinery for the
//! demonstrations. The problem definitions (parameters, initial
//! conditions, exact solutions) live in [`crate::models`]; this module
//! knows how to advance them.
//!
//! # Organization
//!
//! - **`tridiagonal`**: banded matrix value type and the Thomas solve
//! - **`crank_nicolson`**: the implicit diffusion stepper with its
//!   configuration and result types
//!
//! Each run is a single synchronous pass on one thread: assemble the fixed
//! operators, advance the profile step by step, return the full retained
//! history. There is no shared state between runs, so identical inputs
//! always reproduce identical output.
//!
//! # Error handling
//!
//! Solver entry points return `Result<T, String>`. Configuration problems
//! are reported before anything is assembled; numerical problems (NaN,
//! infinity, singular systems) abort the run with a message naming the
//! step, rather than letting bad values propagate into the output.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod crank_nicolson;
mod tridiagonal;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use crank_nicolson::{CrankNicolson, SimulationResult, StepperConfig};
pub use tridiagonal::Tridiagonal;

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a freshly computed profile for numerical issues.
///
/// A NaN or infinite entry means the computation has already gone wrong;
/// failing here keeps corrupted profiles out of the retained history.
///
/// # Arguments
///
/// * `profile` - Profile to validate
/// * `step` - Current time step (for error reporting)
pub(crate) fn validate_profile(profile: &DVector<f64>, step: usize) -> Result<(), String> {
    if profile.iter().any(|v| v.is_nan()) {
        return Err(format!(
            "NaN detected in profile at step {}. This indicates numerical instability.",
            step
        ));
    }

    if profile.iter().any(|v| v.is_infinite()) {
        return Err(format!(
            "Infinity detected in profile at step {}. This indicates numerical overflow.",
            step
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
