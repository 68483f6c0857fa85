//! Physical domain descriptions
//!
//! This module holds the value types shared by every demonstration:
//! immutable sampling grids over the spatial domain. The equations
//! themselves live in [`crate::models`], the numerical methods in
//! [`crate::solver`].

pub mod grid;

pub use grid::{Grid1d, Grid2d};
