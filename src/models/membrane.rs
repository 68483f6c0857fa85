//! Vibrating rectangular membrane solved by Fourier sine series
//!
//! A membrane clamped along the edges of `[0, lx] x [0, ly]` obeys the 2D
//! wave equation. For an initial displacement u0 released from rest the
//! solution is the double sine series
//!
//! ```text
//! u(x, y, t) = sum_mn A_mn * sin(m pi x / lx) * sin(n pi y / ly) * cos(w_mn t)
//! w_mn = c * pi * sqrt((m / lx)^2 + (n / ly)^2)
//! ```
//!
//! The coefficients A_mn are projected from u0 by a Riemann double sum on
//! the sampling grid. Because every basis function vanishes on the edges,
//! the clamped boundary holds at every instant by construction.
//!
//! Everything here is precomputation plus evaluation: there is no time
//! stepping, `displacement_at` can be called for any `t` in any order.

use crate::physics::Grid2d;
use nalgebra::DMatrix;
use std::f64::consts::PI;

// =================================================================================================
// Parameters
// =================================================================================================

/// Membrane geometry, wave speed and resolution of the series solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembraneParams {
    /// Domain length along x.
    pub lx: f64,

    /// Domain length along y.
    pub ly: f64,

    /// Wave propagation speed c.
    pub wave_speed: f64,

    /// Samples per axis for projection and evaluation.
    pub grid_points: usize,

    /// Number of Fourier modes kept along each axis.
    pub modes: usize,
}

impl MembraneParams {
    /// Create a parameter set.
    pub fn new(lx: f64, ly: f64, wave_speed: f64, grid_points: usize, modes: usize) -> Self {
        Self {
            lx,
            ly,
            wave_speed,
            grid_points,
            modes,
        }
    }

    /// Validate that parameters are physically meaningful.
    ///
    /// The mode count must stay below `grid_points - 1`: beyond that the
    /// sampled sine basis aliases and the discrete projection loses
    /// orthogonality.
    pub fn validate(&self) -> Result<(), String> {
        if !self.lx.is_finite() || self.lx <= 0.0 {
            return Err(format!("lx must be positive, got {}", self.lx));
        }
        if !self.ly.is_finite() || self.ly <= 0.0 {
            return Err(format!("ly must be positive, got {}", self.ly));
        }
        if !self.wave_speed.is_finite() || self.wave_speed <= 0.0 {
            return Err(format!("wave_speed must be positive, got {}", self.wave_speed));
        }
        if self.grid_points < 4 {
            return Err(format!("grid_points must be at least 4, got {}", self.grid_points));
        }
        if self.modes == 0 {
            return Err("modes must be at least 1".to_string());
        }
        if self.modes >= self.grid_points - 1 {
            return Err(format!(
                "modes must be below grid_points - 1 to avoid aliasing, got {} modes on {} points",
                self.modes, self.grid_points
            ));
        }
        Ok(())
    }

    /// Angular frequency of mode (m, n), 1-based.
    pub fn angular_frequency(&self, m: usize, n: usize) -> f64 {
        let mx = m as f64 / self.lx;
        let ny = n as f64 / self.ly;
        self.wave_speed * PI * (mx * mx + ny * ny).sqrt()
    }
}

// =================================================================================================
// Initial displacement
// =================================================================================================

/// Gaussian "pluck": a smooth bump of width `sigma` centered at
/// `(x0, y0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianPluck {
    /// Pluck center along x.
    pub x0: f64,

    /// Pluck center along y.
    pub y0: f64,

    /// Pluck width.
    pub sigma: f64,
}

impl GaussianPluck {
    /// Create a pluck shape.
    pub fn new(x0: f64, y0: f64, sigma: f64) -> Self {
        Self { x0, y0, sigma }
    }

    /// Displacement at `(x, y)`.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x0;
        let dy = y - self.y0;
        (-(dx * dx + dy * dy) / (2.0 * self.sigma * self.sigma)).exp()
    }
}

// =================================================================================================
// Fourier solution
// =================================================================================================

/// Precomputed series solution for one membrane and initial shape.
///
/// Projection happens once in [`FourierSolution::project`]; evaluation at
/// any time is then three small matrix products.
#[derive(Debug, Clone)]
pub struct FourierSolution {
    params: MembraneParams,
    grid: Grid2d,
    /// Modal amplitudes, `modes x modes`, 1-based modes at index - 1.
    coefficients: DMatrix<f64>,
    /// Sine basis sampled along x: `modes x grid_points`.
    sin_x: DMatrix<f64>,
    /// Sine basis sampled along y: `modes x grid_points`.
    sin_y: DMatrix<f64>,
}

impl FourierSolution {
    /// Project an initial displacement onto the sine basis.
    ///
    /// # Arguments
    ///
    /// * `params` - Membrane parameters, validated here
    /// * `initial` - Initial displacement u0(x, y)
    pub fn project(
        params: MembraneParams,
        initial: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, String> {
        params.validate()?;

        let grid = Grid2d::new(params.lx, params.ly, params.grid_points)?;
        let n = params.grid_points;
        let modes = params.modes;

        let u0 = DMatrix::from_fn(n, n, |i, j| initial(grid.x().position(i), grid.y().position(j)));

        let sin_x = DMatrix::from_fn(modes, n, |m, i| {
            ((m as f64 + 1.0) * PI * grid.x().position(i) / params.lx).sin()
        });
        let sin_y = DMatrix::from_fn(modes, n, |m, j| {
            ((m as f64 + 1.0) * PI * grid.y().position(j) / params.ly).sin()
        });

        // A_mn = 4 / (lx * ly) * sum_ij u0(x_i, y_j) sin_m(x_i) sin_n(y_j) dx dy
        let scale = 4.0 / (params.lx * params.ly) * grid.cell_area();
        let coefficients = scale * &sin_x * &u0 * sin_y.transpose();

        Ok(Self {
            params,
            grid,
            coefficients,
            sin_x,
            sin_y,
        })
    }

    /// Membrane parameters.
    pub fn params(&self) -> &MembraneParams {
        &self.params
    }

    /// The evaluation grid.
    pub fn grid(&self) -> &Grid2d {
        &self.grid
    }

    /// Modal amplitudes A_mn (1-based modes at index - 1).
    pub fn coefficients(&self) -> &DMatrix<f64> {
        &self.coefficients
    }

    /// Displacement field u(x, y, t) sampled on the grid.
    ///
    /// Returns a `grid_points x grid_points` matrix with rows indexed by
    /// x and columns by y.
    pub fn displacement_at(&self, t: f64) -> DMatrix<f64> {
        let modes = self.params.modes;

        let oscillation = DMatrix::from_fn(modes, modes, |m, n| {
            (self.params.angular_frequency(m + 1, n + 1) * t).cos()
        });

        let amplitudes = self.coefficients.component_mul(&oscillation);
        self.sin_x.transpose() * amplitudes * &self.sin_y
    }

    /// Peak absolute displacement at time `t`.
    pub fn peak_displacement_at(&self, t: f64) -> f64 {
        self.displacement_at(t)
            .iter()
            .map(|v| v.abs())
            .fold(0.0, f64::max)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_params() -> MembraneParams {
        MembraneParams::new(1.0, 1.0, 1.0, 48, 24)
    }

    #[test]
    fn test_params_validation() {
        assert!(unit_params().validate().is_ok());

        let mut bad = unit_params();
        bad.lx = 0.0;
        assert!(bad.validate().unwrap_err().contains("lx"));

        let mut bad = unit_params();
        bad.wave_speed = -1.0;
        assert!(bad.validate().unwrap_err().contains("wave_speed"));

        let mut bad = unit_params();
        bad.modes = 0;
        assert!(bad.validate().is_err());

        let mut bad = unit_params();
        bad.modes = 47;
        assert!(bad.validate().unwrap_err().contains("aliasing"));
    }

    #[test]
    fn test_angular_frequency() {
        let params = MembraneParams::new(1.0, 1.0, 2.0, 32, 8);
        let expected = 2.0 * PI * 2.0_f64.sqrt();
        assert!((params.angular_frequency(1, 1) - expected).abs() < 1e-12);

        // Higher modes oscillate faster
        assert!(params.angular_frequency(2, 2) > params.angular_frequency(1, 1));
    }

    #[test]
    fn test_single_mode_projection() {
        // u0 = sin(pi x) sin(pi y): the projection must recover a single
        // coefficient A_11 = 1, everything else zero by the discrete
        // orthogonality of the sampled sine basis.
        let params = unit_params();
        let solution = FourierSolution::project(params, |x, y| (PI * x).sin() * (PI * y).sin())
            .unwrap();

        let a = solution.coefficients();
        assert!((a[(0, 0)] - 1.0).abs() < 1e-10, "A_11 = {}", a[(0, 0)]);

        for m in 0..params.modes {
            for n in 0..params.modes {
                if (m, n) != (0, 0) {
                    assert!(a[(m, n)].abs() < 1e-10, "A_{}{} = {}", m + 1, n + 1, a[(m, n)]);
                }
            }
        }
    }

    #[test]
    fn test_initial_displacement_reconstruction() {
        // A pluck well inside the domain is spectrally narrow, so the
        // truncated series at t = 0 reproduces it closely.
        let pluck = GaussianPluck::new(0.55, 0.45, 0.12);
        let solution =
            FourierSolution::project(unit_params(), |x, y| pluck.evaluate(x, y)).unwrap();

        let u = solution.displacement_at(0.0);
        let grid = solution.grid().clone();

        let mut max_diff = 0.0_f64;
        for i in 0..48 {
            for j in 0..48 {
                let expected = pluck.evaluate(grid.x().position(i), grid.y().position(j));
                max_diff = max_diff.max((u[(i, j)] - expected).abs());
            }
        }
        assert!(max_diff < 1e-3, "reconstruction error {}", max_diff);
    }

    #[test]
    fn test_boundary_stays_clamped() {
        let pluck = GaussianPluck::new(0.6, 0.4, 0.1);
        let solution =
            FourierSolution::project(unit_params(), |x, y| pluck.evaluate(x, y)).unwrap();

        let last = 47;
        for &t in &[0.0, 0.3, 1.7] {
            let u = solution.displacement_at(t);
            for k in 0..48 {
                assert!(u[(0, k)].abs() < 1e-9);
                assert!(u[(last, k)].abs() < 1e-9);
                assert!(u[(k, 0)].abs() < 1e-9);
                assert!(u[(k, last)].abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_single_mode_oscillates_periodically() {
        let params = unit_params();
        let solution = FourierSolution::project(params, |x, y| (PI * x).sin() * (PI * y).sin())
            .unwrap();

        let period = 2.0 * PI / params.angular_frequency(1, 1);
        let at_start = solution.displacement_at(0.0);
        let after_period = solution.displacement_at(period);

        let max_diff = (&at_start - &after_period)
            .iter()
            .map(|v| v.abs())
            .fold(0.0, f64::max);
        assert!(max_diff < 1e-9, "not periodic: {}", max_diff);

        // Half a period later the mode is inverted
        let half = solution.displacement_at(period / 2.0);
        let max_sum = (&at_start + &half).iter().map(|v| v.abs()).fold(0.0, f64::max);
        assert!(max_sum < 1e-9, "not inverted: {}", max_sum);
    }

    #[test]
    fn test_evaluation_is_order_independent() {
        let pluck = GaussianPluck::new(0.5, 0.5, 0.15);
        let solution =
            FourierSolution::project(unit_params(), |x, y| pluck.evaluate(x, y)).unwrap();

        let late_first = solution.displacement_at(2.0);
        let _early = solution.displacement_at(0.5);
        let late_again = solution.displacement_at(2.0);

        assert_eq!(late_first, late_again);
    }
}
