//! 1D heat conduction in a rod with fixed-temperature ends
//!
//! The model describes
//!
//! ```text
//! dw/dt = alpha * d2w/dx2      on (0, L)
//! w(0, t) = w(L, t) = 0
//! w(x, 0) = sin(pi * x / L)
//! ```
//!
//! With this initial condition the exact solution stays a single sine mode
//! whose amplitude decays exponentially:
//!
//! ```text
//! w(x, t) = sin(pi * x / L) * exp(-alpha * (pi / L)^2 * t)
//! ```
//!
//! The model carries the physical and discretization parameters and can
//! evaluate both the initial and the exact profile on its own grid. Time
//! stepping lives in [`crate::solver::CrankNicolson`].

use crate::physics::Grid1d;
use nalgebra::DVector;
use std::f64::consts::PI;

/// Heated rod parameters: domain length, diffusivity and grid resolution.
///
/// Construction validates everything the stepper will rely on, so a
/// `HeatRod` value is always usable: invalid parameters never reach the
/// matrix assembly.
///
/// # Example
///
/// ```rust
/// use fdm_rs::models::HeatRod;
///
/// let rod = HeatRod::new(1.0, 0.01, 11).unwrap();
/// let initial = rod.initial_profile();
///
/// // Dirichlet ends are exactly zero from the start
/// assert_eq!(initial[0], 0.0);
/// assert_eq!(initial[10], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeatRod {
    length: f64,
    diffusivity: f64,
    grid: Grid1d,
}

impl HeatRod {
    /// Create a rod model.
    ///
    /// # Arguments
    ///
    /// * `length` - Rod length L, must be positive
    /// * `diffusivity` - Thermal diffusivity alpha, must be positive
    /// * `points` - Grid resolution N, at least 3 (two boundary samples
    ///   plus one interior unknown)
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending parameter. Nothing is
    /// allocated before validation passes.
    pub fn new(length: f64, diffusivity: f64, points: usize) -> Result<Self, String> {
        if !length.is_finite() || length <= 0.0 {
            return Err(format!("length must be positive, got {}", length));
        }
        if !diffusivity.is_finite() || diffusivity <= 0.0 {
            return Err(format!("diffusivity must be positive, got {}", diffusivity));
        }
        if points < 3 {
            return Err(format!(
                "grid_points must be at least 3 (one interior point), got {}",
                points
            ));
        }

        let grid = Grid1d::new(length, points)?;

        Ok(Self {
            length,
            diffusivity,
            grid,
        })
    }

    /// Rod length L.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Thermal diffusivity alpha.
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// Number of grid samples N.
    pub fn points(&self) -> usize {
        self.grid.len()
    }

    /// The spatial grid the profiles live on.
    pub fn grid(&self) -> &Grid1d {
        &self.grid
    }

    /// Grid spacing dx = L / (N - 1).
    pub fn spacing(&self) -> f64 {
        self.grid.spacing()
    }

    /// Stencil coefficient r = alpha * dt / (2 * dx^2).
    ///
    /// Dimensionless coupling strength between neighbouring samples per
    /// time step. The implicit scheme is stable for every r > 0, so no
    /// upper bound is enforced here.
    pub fn stencil_coefficient(&self, time_step: f64) -> f64 {
        let dx = self.spacing();
        self.diffusivity * time_step / (2.0 * dx * dx)
    }

    /// Exponential decay rate of the fundamental mode,
    /// alpha * (pi / L)^2.
    pub fn decay_rate(&self) -> f64 {
        let k = PI / self.length;
        self.diffusivity * k * k
    }

    /// Initial temperature profile sin(pi * x / L).
    ///
    /// The endpoints are written as exact zeros rather than relying on
    /// `sin(pi)` rounding, so the Dirichlet invariant holds bit-exactly
    /// from step zero.
    pub fn initial_profile(&self) -> DVector<f64> {
        let n = self.points();
        let mut profile = DVector::from_fn(n, |i, _| (PI * self.grid.position(i) / self.length).sin());
        profile[0] = 0.0;
        profile[n - 1] = 0.0;
        profile
    }

    /// Exact solution sampled on the grid at time `t`.
    pub fn analytical_profile(&self, t: f64) -> DVector<f64> {
        let n = self.points();
        let decay = (-self.decay_rate() * t).exp();
        let mut profile =
            DVector::from_fn(n, |i, _| (PI * self.grid.position(i) / self.length).sin() * decay);
        profile[0] = 0.0;
        profile[n - 1] = 0.0;
        profile
    }
}

// =================================================================================================
// Tests
// =================================================================================================
