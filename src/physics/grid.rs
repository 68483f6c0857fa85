//! Spatial sampling grids
//!
//! A grid is an immutable set of uniformly spaced sample positions over a
//! domain. Solvers index into it, never mutate it.

use nalgebra::DVector;

// =================================================================================================
// 1D Grid
// =================================================================================================

/// Uniform 1D grid over `[0, length]` with `points` samples.
///
/// Spacing is `length / (points - 1)`, so the first sample sits exactly at 0
/// and the last exactly at `length`.
///
/// # Example
///
/// ```rust
/// use fdm_rs::physics::Grid1d;
///
/// let grid = Grid1d::new(2.0, 5).unwrap();
/// assert_eq!(grid.len(), 5);
/// assert!((grid.spacing() - 0.5).abs() < 1e-12);
/// assert_eq!(grid.position(4), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid1d {
    length: f64,
    positions: DVector<f64>,
}

impl Grid1d {
    /// Create a uniform grid over `[0, length]`.
    ///
    /// Requires `length > 0` and at least two samples.
    pub fn new(length: f64, points: usize) -> Result<Self, String> {
        if !length.is_finite() || length <= 0.0 {
            return Err(format!("Grid length must be positive and finite, got {}", length));
        }
        if points < 2 {
            return Err(format!("Grid needs at least 2 points, got {}", points));
        }

        let spacing = length / (points - 1) as f64;
        let positions = DVector::from_fn(points, |i, _| i as f64 * spacing);

        Ok(Self { length, positions })
    }

    /// Domain length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of sample positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A grid always holds at least two samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Uniform spacing between neighbouring samples.
    pub fn spacing(&self) -> f64 {
        self.length / (self.len() - 1) as f64
    }

    /// Position of sample `i`.
    pub fn position(&self, i: usize) -> f64 {
        self.positions[i]
    }

    /// All sample positions.
    pub fn positions(&self) -> &DVector<f64> {
        &self.positions
    }
}

// =================================================================================================
// 2D Grid
// =================================================================================================

/// Uniform rectangular grid over `[0, lx] x [0, ly]`.
///
/// Used by the membrane solver; both axes carry the same number of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d {
    x: Grid1d,
    y: Grid1d,
}

impl Grid2d {
    /// Create a rectangle with `points` samples along each axis.
    pub fn new(lx: f64, ly: f64, points: usize) -> Result<Self, String> {
        let x = Grid1d::new(lx, points).map_err(|e| format!("x axis: {}", e))?;
        let y = Grid1d::new(ly, points).map_err(|e| format!("y axis: {}", e))?;
        Ok(Self { x, y })
    }

    /// Grid along the x axis.
    pub fn x(&self) -> &Grid1d {
        &self.x
    }

    /// Grid along the y axis.
    pub fn y(&self) -> &Grid1d {
        &self.y
    }

    /// Samples per axis.
    pub fn points_per_axis(&self) -> usize {
        self.x.len()
    }

    /// Area element `dx * dy` for Riemann sums over the rectangle.
    pub fn cell_area(&self) -> f64 {
        self.x.spacing() * self.y.spacing()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_endpoints_exact() {
        let grid = Grid1d::new(3.0, 7).unwrap();
        assert_eq!(grid.position(0), 0.0);
        assert_eq!(grid.position(6), 3.0);
    }

    #[test]
    fn test_grid_spacing() {
        let grid = Grid1d::new(1.0, 11).unwrap();
        assert!((grid.spacing() - 0.1).abs() < 1e-15);

        for i in 1..grid.len() {
            let gap = grid.position(i) - grid.position(i - 1);
            assert!((gap - grid.spacing()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_grid_rejects_bad_length() {
        assert!(Grid1d::new(0.0, 10).is_err());
        assert!(Grid1d::new(-1.0, 10).is_err());
        assert!(Grid1d::new(f64::NAN, 10).is_err());
    }

    #[test]
    fn test_grid_rejects_too_few_points() {
        let result = Grid1d::new(1.0, 1);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least 2 points"));
    }

    #[test]
    fn test_grid2d_rectangle() {
        let grid = Grid2d::new(2.0, 1.0, 5).unwrap();
        assert_eq!(grid.points_per_axis(), 5);
        assert!((grid.x().spacing() - 0.5).abs() < 1e-12);
        assert!((grid.y().spacing() - 0.25).abs() < 1e-12);
        assert!((grid.cell_area() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_grid2d_reports_failing_axis() {
        let result = Grid2d::new(1.0, -2.0, 5);
        assert!(result.unwrap_err().starts_with("y axis:"));
    }
}
