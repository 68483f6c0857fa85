//! Run configuration loaded from TOML
//!
//! The binary reads a small TOML file with a `[settings]` table holding
//! the physical and discretization parameters and a `[paths]` table naming
//! the output files:
//!
//! ```toml
//! [settings]
//! length = 1.0
//! diffusivity = 0.5
//! grid_points = 50
//! time_step = 0.001
//! steps = 100
//!
//! [paths]
//! numerical_csv = "output/numerical.csv"
//! analytical_csv = "output/analytical.csv"
//! comparison_plot = "output/comparison.png"
//! surface_plot = "output/surface.png"
//! ```
//!
//! The solver layer never sees the file format: it consumes the resolved
//! [`HeatRod`] and [`StepperConfig`] values built here. Validation happens
//! before anything runs and every error names the offending parameter.

use crate::models::HeatRod;
use crate::solver::StepperConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =================================================================================================
// Configuration structures
// =================================================================================================

/// Complete configuration of a diffusion comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Physical and discretization parameters.
    pub settings: Settings,

    /// Output file targets.
    #[serde(default)]
    pub paths: OutputPaths,
}

/// Numeric parameters of the simulated rod and its discretization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Rod length L.
    pub length: f64,

    /// Thermal diffusivity alpha.
    pub diffusivity: f64,

    /// Grid resolution N.
    pub grid_points: usize,

    /// Time step dt.
    pub time_step: f64,

    /// Number of time steps T.
    pub steps: usize,
}

/// Output file locations for the run artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPaths {
    /// CSV of the numerical profile sequence.
    #[serde(default = "default_numerical_csv")]
    pub numerical_csv: PathBuf,

    /// CSV of the analytical profile sequence.
    #[serde(default = "default_analytical_csv")]
    pub analytical_csv: PathBuf,

    /// Numerical-vs-analytical comparison figure.
    #[serde(default = "default_comparison_plot")]
    pub comparison_plot: PathBuf,

    /// 3D surface figure of the numerical solution.
    #[serde(default = "default_surface_plot")]
    pub surface_plot: PathBuf,
}

fn default_numerical_csv() -> PathBuf {
    PathBuf::from("output/numerical.csv")
}

fn default_analytical_csv() -> PathBuf {
    PathBuf::from("output/analytical.csv")
}

fn default_comparison_plot() -> PathBuf {
    PathBuf::from("output/comparison.png")
}

fn default_surface_plot() -> PathBuf {
    PathBuf::from("output/surface.png")
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            numerical_csv: default_numerical_csv(),
            analytical_csv: default_analytical_csv(),
            comparison_plot: default_comparison_plot(),
            surface_plot: default_surface_plot(),
        }
    }
}

// =================================================================================================
// Loading and validation
// =================================================================================================

impl RunConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read configuration {}: {}", path.display(), e))?;
        Self::from_toml_str(&text)
            .map_err(|e| format!("Invalid configuration {}: {}", path.display(), e))
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Validate every parameter, naming the first offender.
    ///
    /// Must pass before the run starts; the binary exits non-zero with
    /// this message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        let s = &self.settings;
        if !s.length.is_finite() || s.length <= 0.0 {
            return Err(format!("length must be positive, got {}", s.length));
        }
        if !s.diffusivity.is_finite() || s.diffusivity <= 0.0 {
            return Err(format!("diffusivity must be positive, got {}", s.diffusivity));
        }
        if s.grid_points < 3 {
            return Err(format!("grid_points must be at least 3, got {}", s.grid_points));
        }
        if !s.time_step.is_finite() || s.time_step <= 0.0 {
            return Err(format!("time_step must be positive, got {}", s.time_step));
        }
        Ok(())
    }

    /// Build the validated rod model.
    pub fn heat_rod(&self) -> Result<HeatRod, String> {
        HeatRod::new(
            self.settings.length,
            self.settings.diffusivity,
            self.settings.grid_points,
        )
    }

    /// Build the stepper configuration.
    pub fn stepper(&self) -> StepperConfig {
        StepperConfig::new(self.settings.time_step, self.settings.steps)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
