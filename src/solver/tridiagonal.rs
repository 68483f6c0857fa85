//! Tridiagonal matrices and the Thomas algorithm
//!
//! The implicit diffusion stepper only ever touches matrices whose nonzero
//! entries sit on the main diagonal and its immediate neighbours, so the
//! full N x N storage of a dense matrix is never allocated. This module
//! provides the banded value type plus the two operations the stepper
//! needs: matrix-vector products and the O(N) tridiagonal solve.
//!
//! # Storage convention
//!
//! For row `i`:
//!
//! ```text
//! sub[i] = a(i, i-1)      (sub[0] unused)
//! dia[i] = a(i, i)
//! sup[i] = a(i, i+1)      (sup[n-1] unused)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fdm_rs::solver::Tridiagonal;
//! use nalgebra::DVector;
//!
//! // Identity in banded form
//! let matrix = Tridiagonal::from_stencil(4, 1.0, 0.0).unwrap();
//! let rhs = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
//! let solution = matrix.solve(&rhs).unwrap();
//! assert_eq!(solution, rhs);
//! ```

use nalgebra::DVector;

// =================================================================================================
// Tridiagonal Matrix
// =================================================================================================

/// Square tridiagonal matrix stored as three diagonals.
///
/// Immutable after assembly: the stepper builds its two coefficient
/// matrices once per run and reuses them for every time step.
#[derive(Debug, Clone, PartialEq)]
pub struct Tridiagonal {
    sub: DVector<f64>,
    dia: DVector<f64>,
    sup: DVector<f64>,
}

impl Tridiagonal {
    /// Build an `n x n` matrix with constant main diagonal `diagonal` and
    /// constant off-diagonals `off_diagonal`.
    ///
    /// Requires `n >= 2` and finite coefficients.
    pub fn from_stencil(n: usize, diagonal: f64, off_diagonal: f64) -> Result<Self, String> {
        if n < 2 {
            return Err(format!("Tridiagonal matrix needs size >= 2, got {}", n));
        }
        if !diagonal.is_finite() || !off_diagonal.is_finite() {
            return Err(format!(
                "Stencil coefficients must be finite, got diagonal {} and off-diagonal {}",
                diagonal, off_diagonal
            ));
        }

        Ok(Self {
            sub: DVector::from_element(n, off_diagonal),
            dia: DVector::from_element(n, diagonal),
            sup: DVector::from_element(n, off_diagonal),
        })
    }

    /// Matrix size (number of rows).
    pub fn len(&self) -> usize {
        self.dia.len()
    }

    /// A constructed matrix is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Overwrite the first and last rows with identity rows.
    ///
    /// This pins the boundary unknowns: with rows `(1, 0, ...)` and
    /// `(..., 0, 1)` the boundary entries of the solution equal the
    /// corresponding right-hand-side entries exactly, which is how the
    /// stepper enforces Dirichlet conditions without shrinking the system.
    pub fn force_identity_boundary_rows(&mut self) {
        let n = self.len();
        self.dia[0] = 1.0;
        self.sup[0] = 0.0;
        self.dia[n - 1] = 1.0;
        self.sub[n - 1] = 0.0;
    }

    /// Matrix-vector product.
    pub fn mul_vec(&self, v: &DVector<f64>) -> DVector<f64> {
        let n = self.len();
        assert_eq!(v.len(), n, "Vector length {} vs matrix size {}", v.len(), n);

        let mut out = DVector::zeros(n);
        out[0] = self.dia[0] * v[0] + self.sup[0] * v[1];
        for i in 1..n - 1 {
            out[i] = self.sub[i] * v[i - 1] + self.dia[i] * v[i] + self.sup[i] * v[i + 1];
        }
        out[n - 1] = self.sub[n - 1] * v[n - 2] + self.dia[n - 1] * v[n - 1];
        out
    }

    /// Solve `A x = rhs` with the Thomas algorithm.
    ///
    /// Forward elimination followed by back substitution, O(N). The
    /// diagonals are copied into scratch storage so the matrix can be
    /// reused for the next step.
    ///
    /// # Errors
    ///
    /// Fails when a pivot vanishes during elimination. The diagonally
    /// dominant matrices the diffusion stepper assembles can never trigger
    /// this, but a degenerate system must fail loudly instead of quietly
    /// producing NaN.
    pub fn solve(&self, rhs: &DVector<f64>) -> Result<DVector<f64>, String> {
        let n = self.len();
        assert_eq!(rhs.len(), n, "RHS length {} vs matrix size {}", rhs.len(), n);

        let mut dia = self.dia.clone();
        let mut x = rhs.clone();

        // Forward elimination
        for i in 1..n {
            if dia[i - 1] == 0.0 {
                return Err(format!(
                    "Singular tridiagonal system: zero pivot at row {}",
                    i - 1
                ));
            }
            let w = self.sub[i] / dia[i - 1];
            dia[i] -= w * self.sup[i - 1];
            x[i] -= w * x[i - 1];
        }

        if dia[n - 1] == 0.0 {
            return Err(format!(
                "Singular tridiagonal system: zero pivot at row {}",
                n - 1
            ));
        }

        // Back substitution
        x[n - 1] /= dia[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = (x[i] - self.sup[i] * x[i + 1]) / dia[i];
        }

        Ok(x)
    }

    /// True when every row satisfies `|dia| >= |sub| + |sup|`.
    ///
    /// Diagonal dominance guarantees the Thomas sweep is stable without
    /// pivoting.
    pub fn is_diagonally_dominant(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| {
            let sub = if i > 0 { self.sub[i].abs() } else { 0.0 };
            let sup = if i < n - 1 { self.sup[i].abs() } else { 0.0 };
            self.dia[i].abs() >= sub + sup
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    /// Expand to dense storage so results can be checked against nalgebra.
    fn to_dense(t: &Tridiagonal) -> DMatrix<f64> {
        let n = t.len();
        DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                t.dia[i]
            } else if j + 1 == i {
                t.sub[i]
            } else if j == i + 1 {
                t.sup[i]
            } else {
                0.0
            }
        })
    }

    #[test]
    fn test_rejects_size_below_two() {
        assert!(Tridiagonal::from_stencil(1, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_stencil() {
        assert!(Tridiagonal::from_stencil(4, f64::NAN, 0.0).is_err());
        assert!(Tridiagonal::from_stencil(4, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_mul_vec_matches_dense() {
        let mut t = Tridiagonal::from_stencil(6, 1.4, -0.2).unwrap();
        t.force_identity_boundary_rows();
        let dense = to_dense(&t);

        let v = DVector::from_fn(6, |i, _| (i as f64 + 1.0).sin());
        let banded = t.mul_vec(&v);
        let full = &dense * &v;

        for i in 0..6 {
            assert!((banded[i] - full[i]).abs() < 1e-14);
        }
    }

    #[test]
    fn test_solve_matches_dense_lu() {
        let mut t = Tridiagonal::from_stencil(8, 2.5, -0.7).unwrap();
        t.force_identity_boundary_rows();
        let dense = to_dense(&t);

        let rhs = DVector::from_fn(8, |i, _| 0.3 * i as f64 - 1.0);
        let banded = t.solve(&rhs).unwrap();
        let full = dense.lu().solve(&rhs).unwrap();

        for i in 0..8 {
            assert!(
                (banded[i] - full[i]).abs() < 1e-12,
                "Entry {} differs: {} vs {}",
                i,
                banded[i],
                full[i]
            );
        }
    }

    #[test]
    fn test_solve_round_trip() {
        let mut t = Tridiagonal::from_stencil(10, 3.0, 1.0).unwrap();
        t.force_identity_boundary_rows();

        let x_expected = DVector::from_fn(10, |i, _| (i as f64 * 0.37).cos());
        let rhs = t.mul_vec(&x_expected);
        let x = t.solve(&rhs).unwrap();

        for i in 0..10 {
            assert!((x[i] - x_expected[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_identity_boundary_rows_pin_endpoints() {
        let mut t = Tridiagonal::from_stencil(5, 1.8, -0.4).unwrap();
        t.force_identity_boundary_rows();

        let rhs = DVector::from_vec(vec![0.0, 2.0, -1.0, 3.0, 0.0]);
        let x = t.solve(&rhs).unwrap();

        assert_eq!(x[0], 0.0);
        assert_eq!(x[4], 0.0);
    }

    #[test]
    fn test_singular_system_reported() {
        let t = Tridiagonal::from_stencil(4, 0.0, 0.0).unwrap();
        let rhs = DVector::from_element(4, 1.0);

        let result = t.solve(&rhs);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("zero pivot"));
    }

    #[test]
    fn test_diagonal_dominance() {
        let strong = Tridiagonal::from_stencil(5, 2.0, -0.5).unwrap();
        assert!(strong.is_diagonally_dominant());

        let weak = Tridiagonal::from_stencil(5, 1.0, 0.8).unwrap();
        assert!(!weak.is_diagonally_dominant());
    }

    #[test]
    fn test_dominance_holds_for_any_positive_coupling() {
        // The implicit operator has diagonal 1 + 2r with off-diagonals -r,
        // dominant for every r > 0, including very large couplings.
        for &r in &[1e-6, 0.5, 10.0, 1e6] {
            let mut t = Tridiagonal::from_stencil(7, 1.0 + 2.0 * r, -r).unwrap();
            t.force_identity_boundary_rows();
            assert!(t.is_diagonally_dominant(), "not dominant for r = {}", r);
        }
    }
}
