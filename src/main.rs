//! Command-line entry point
//!
//! Reads a TOML configuration, runs the implicit diffusion comparison and
//! writes the CSV and figure artifacts. Invalid configurations terminate
//! the process with a non-zero status and a message naming the offending
//! parameter.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fdm_rs::config::RunConfig;
use fdm_rs::output::export::export_profiles_csv;
use fdm_rs::output::visualization::{PlotConfig, plot_profile_comparison, plot_surface};
use fdm_rs::solver::CrankNicolson;

/// Heat-equation comparison runner.
#[derive(Debug, Parser)]
#[command(name = "fdm", version, about = "Implicit heat-equation solver with analytical cross-check")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(default_value = "config/heat.toml")]
    config_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = RunConfig::from_file(&cli.config_file).map_err(anyhow::Error::msg)?;
    config.validate().map_err(anyhow::Error::msg)?;

    let rod = config.heat_rod().map_err(anyhow::Error::msg)?;
    let stepper_config = config.stepper();

    info!(
        length = rod.length(),
        diffusivity = rod.diffusivity(),
        grid_points = rod.points(),
        time_step = stepper_config.time_step,
        steps = stepper_config.steps,
        r = rod.stencil_coefficient(stepper_config.time_step),
        "starting diffusion run"
    );

    let stepper = CrankNicolson::new();
    let result = stepper.solve(&rod, &stepper_config).map_err(anyhow::Error::msg)?;

    info!(
        instants = result.len(),
        max_error = result.max_error(),
        "run complete"
    );

    let paths = &config.paths;

    export_profiles_csv(
        &result.time_points,
        &result.numerical,
        path_str(&paths.numerical_csv)?,
        None,
    )
    .map_err(|e| anyhow::anyhow!("exporting numerical profiles: {}", e))?;

    export_profiles_csv(
        &result.time_points,
        &result.analytical,
        path_str(&paths.analytical_csv)?,
        None,
    )
    .map_err(|e| anyhow::anyhow!("exporting analytical profiles: {}", e))?;

    ensure_parent_dir(&paths.comparison_plot)?;
    ensure_parent_dir(&paths.surface_plot)?;

    let title = format!(
        "Heat equation: L = {}, alpha = {}, N = {}, dt = {}, T = {}",
        rod.length(),
        rod.diffusivity(),
        rod.points(),
        stepper_config.time_step,
        stepper_config.steps
    );

    plot_profile_comparison(
        &result,
        rod.grid(),
        path_str(&paths.comparison_plot)?,
        Some(&PlotConfig::comparison(&title)),
    )
    .map_err(|e| anyhow::anyhow!("rendering comparison figure: {}", e))?;

    if result.len() > 1 {
        plot_surface(
            &result,
            rod.grid(),
            path_str(&paths.surface_plot)?,
            Some(&PlotConfig::surface(&title)),
        )
        .map_err(|e| anyhow::anyhow!("rendering surface figure: {}", e))?;
    }

    println!(
        "Ran {} steps on {} grid points; max pointwise error vs analytical: {:.3e}",
        stepper_config.steps,
        rod.points(),
        result.max_error()
    );
    println!("Wrote {}", paths.numerical_csv.display());
    println!("Wrote {}", paths.analytical_csv.display());
    println!("Wrote {}", paths.comparison_plot.display());
    if result.len() > 1 {
        println!("Wrote {}", paths.surface_plot.display());
    }

    Ok(())
}

fn path_str(path: &std::path::Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("path {} is not valid UTF-8", path.display()))
}

fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    Ok(())
}
