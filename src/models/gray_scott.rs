//! Gray-Scott reaction-diffusion on a square grid
//!
//! Two chemical fields U and V evolve under
//!
//! ```text
//! dU/dt = Du * lap(U) - U*V^2 + f * (1 - U)
//! dV/dt = Dv * lap(V) + U*V^2 - (f + k) * V
//! ```
//!
//! where `lap` is a weighted 9-point Laplacian with reflecting boundaries.
//! Depending on the feed rate `f` and kill rate `k` the system settles
//! into worm-like stripes, mazes, spots and other self-organizing
//! patterns; the named presets below are known pattern regimes.
//!
//! The grid is seeded with a perturbed square in the center plus a small
//! amount of noise from an explicitly seeded generator, so two runs with
//! the same seed produce the same frames.
//!
//! # Example
//!
//! ```rust
//! use fdm_rs::models::{GrayScottGrid, GrayScottParams};
//!
//! let params = GrayScottParams::worms();
//! let mut grid = GrayScottGrid::seeded(64, 42).unwrap();
//!
//! grid.advance(&params, 1.0, 100);
//! let frame = grid.v_frame();
//! assert_eq!(frame.len(), 64 * 64);
//! ```

use ndarray::{Array2, Zip};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================

/// Grid edge length above which the Laplacian switches to parallel
/// iteration (only with the `parallel` feature). Below this the
/// thread-pool dispatch costs more than the stencil work.
#[cfg(feature = "parallel")]
const PARALLEL_EDGE_THRESHOLD: usize = 128;

// =================================================================================================
// Parameters
// =================================================================================================

/// Gray-Scott model parameters.
///
/// Diffusion rates default to the classic Du = 0.16, Dv = 0.08 pairing;
/// feed and kill select the pattern regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayScottParams {
    /// Diffusion rate of U.
    pub diffusion_u: f64,

    /// Diffusion rate of V.
    pub diffusion_v: f64,

    /// Feed rate f.
    pub feed: f64,

    /// Kill rate k.
    pub kill: f64,
}

impl GrayScottParams {
    /// Create parameters with the default diffusion rates.
    pub fn new(feed: f64, kill: f64) -> Self {
        Self {
            diffusion_u: 0.16,
            diffusion_v: 0.08,
            feed,
            kill,
        }
    }

    /// Worm-like stripe regime.
    pub fn worms() -> Self {
        Self::new(0.078, 0.061)
    }

    /// Maze regime.
    pub fn mazes() -> Self {
        Self::new(0.029, 0.057)
    }

    /// Linear blend between two parameter sets, `t` in [0, 1].
    ///
    /// Driving `t` over a run morphs one pattern regime into another, the
    /// way the cinematic animation sweeps from worms to mazes.
    pub fn blend(&self, other: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            diffusion_u: mix(self.diffusion_u, other.diffusion_u),
            diffusion_v: mix(self.diffusion_v, other.diffusion_v),
            feed: mix(self.feed, other.feed),
            kill: mix(self.kill, other.kill),
        }
    }

    /// Validate that parameters are physically meaningful.
    pub fn validate(&self) -> Result<(), String> {
        if !self.diffusion_u.is_finite() || self.diffusion_u <= 0.0 {
            return Err(format!("diffusion_u must be positive, got {}", self.diffusion_u));
        }
        if !self.diffusion_v.is_finite() || self.diffusion_v <= 0.0 {
            return Err(format!("diffusion_v must be positive, got {}", self.diffusion_v));
        }
        if !self.feed.is_finite() || self.feed < 0.0 {
            return Err(format!("feed must be non-negative, got {}", self.feed));
        }
        if !self.kill.is_finite() || self.kill < 0.0 {
            return Err(format!("kill must be non-negative, got {}", self.kill));
        }
        Ok(())
    }
}

// =================================================================================================
// Grid
// =================================================================================================

/// Square U/V field pair advanced in place by [`GrayScottGrid::step`].
#[derive(Debug, Clone)]
pub struct GrayScottGrid {
    size: usize,
    u: Array2<f64>,
    v: Array2<f64>,
    // Scratch buffers reused across steps
    lap_u: Array2<f64>,
    lap_v: Array2<f64>,
}

impl GrayScottGrid {
    /// Create a seeded grid: U = 1 and V = 0 everywhere, a perturbed
    /// square in the center (U = 0.5, V = 0.25, side `size / 8`), plus
    /// uniform noise up to 0.1 on both fields.
    ///
    /// The same `seed` always reproduces the same initial fields.
    pub fn seeded(size: usize, seed: u64) -> Result<Self, String> {
        if size < 16 {
            return Err(format!("grid size must be at least 16, got {}", size));
        }

        let mut u = Array2::from_elem((size, size), 1.0);
        let mut v = Array2::zeros((size, size));

        let mid = size / 2;
        let r = size / 16;
        for i in mid - r..mid + r {
            for j in mid - r..mid + r {
                u[[i, j]] = 0.50;
                v[[i, j]] = 0.25;
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        for cell in u.iter_mut() {
            *cell += rng.gen_range(0.0..0.1);
        }
        for cell in v.iter_mut() {
            *cell += rng.gen_range(0.0..0.1);
        }

        Ok(Self {
            size,
            u,
            v,
            lap_u: Array2::zeros((size, size)),
            lap_v: Array2::zeros((size, size)),
        })
    }

    /// Grid edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The U field.
    pub fn u(&self) -> &Array2<f64> {
        &self.u
    }

    /// The V field.
    pub fn v(&self) -> &Array2<f64> {
        &self.v
    }

    /// Advance one explicit step of length `dt`.
    pub fn step(&mut self, params: &GrayScottParams, dt: f64) {
        fill_laplacian(&self.u, &mut self.lap_u);
        fill_laplacian(&self.v, &mut self.lap_v);

        Zip::from(&mut self.u)
            .and(&mut self.v)
            .and(&self.lap_u)
            .and(&self.lap_v)
            .for_each(|u, v, &lu, &lv| {
                let uvv = *u * *v * *v;
                let du = params.diffusion_u * lu - uvv + params.feed * (1.0 - *u);
                let dv = params.diffusion_v * lv + uvv - (params.feed + params.kill) * *v;
                *u += du * dt;
                *v += dv * dt;
            });
    }

    /// Advance `steps` explicit steps of length `dt`.
    pub fn advance(&mut self, params: &GrayScottParams, dt: f64, steps: usize) {
        for _ in 0..steps {
            self.step(params, dt);
        }
    }

    /// Render the V field as a row-major grayscale frame: values clamped
    /// to [0, 1] and scaled to 0..=255.
    pub fn v_frame(&self) -> Vec<u8> {
        self.v
            .iter()
            .map(|&value| (value.clamp(0.0, 1.0) * 255.0) as u8)
            .collect()
    }
}

// =================================================================================================
// Laplacian
// =================================================================================================

/// Weighted 9-point Laplacian kernel:
///
/// ```text
/// 0.05  0.2  0.05
/// 0.2  -1.0  0.2
/// 0.05  0.2  0.05
/// ```
///
/// Weights sum to zero, so a uniform field has zero Laplacian everywhere.
#[inline]
fn stencil_at(field: &Array2<f64>, i: usize, j: usize) -> f64 {
    let n = field.nrows();
    // Reflecting boundaries: the out-of-range neighbour mirrors back onto
    // the edge cell itself.
    let im = i.saturating_sub(1);
    let ip = (i + 1).min(n - 1);
    let jm = j.saturating_sub(1);
    let jp = (j + 1).min(n - 1);

    0.05 * (field[[im, jm]] + field[[im, jp]] + field[[ip, jm]] + field[[ip, jp]])
        + 0.2 * (field[[im, j]] + field[[ip, j]] + field[[i, jm]] + field[[i, jp]])
        - field[[i, j]]
}

#[cfg(feature = "parallel")]
fn fill_laplacian(field: &Array2<f64>, out: &mut Array2<f64>) {
    if field.nrows() >= PARALLEL_EDGE_THRESHOLD {
        Zip::indexed(out).par_for_each(|(i, j), cell| *cell = stencil_at(field, i, j));
    } else {
        Zip::indexed(out).for_each(|(i, j), cell| *cell = stencil_at(field, i, j));
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_laplacian(field: &Array2<f64>, out: &mut Array2<f64>) {
    Zip::indexed(out).for_each(|(i, j), cell| *cell = stencil_at(field, i, j));
}

// =================================================================================================
// Tests
// =================================================================================================
