//! Heat Equation: Implicit Stepper vs Analytical Solution
//!
//! dw/dt = alpha * d2w/dx2, w(0)=w(L)=0, w(x,0) = sin(pi x / L)
//!
//! Runs the Crank-Nicolson stepper, compares every retained profile
//! against the closed-form sine-decay solution and renders the comparison
//! and surface figures.

use anyhow::Result;
use fdm_rs::models::HeatRod;
use fdm_rs::output::export::{export_error_summary_csv, export_profiles_csv};
use fdm_rs::output::visualization::{PlotConfig, plot_profile_comparison, plot_surface};
use fdm_rs::solver::{CrankNicolson, StepperConfig};

fn main() -> Result<()> {
    println!("=== Heat Equation: Crank-Nicolson vs Analytical ===\n");

    // Physical parameters
    let length = 1.0;
    let diffusivity = 0.5;
    let grid_points = 50;

    // Time discretization
    let time_step = 0.002;
    let steps = 150;

    println!("Physical Parameters:");
    println!("  Rod length: {} m", length);
    println!("  Diffusivity: {} m²/s", diffusivity);
    println!("  Grid points: {}", grid_points);
    println!("\nTime Discretization:");
    println!("  Time step: {} s", time_step);
    println!("  Steps: {}", steps);

    let rod = HeatRod::new(length, diffusivity, grid_points).map_err(anyhow::Error::msg)?;
    let config = StepperConfig::new(time_step, steps);

    let r = rod.stencil_coefficient(time_step);
    println!("  Stencil coefficient r: {:.4} (no upper limit applies)\n", r);

    // Solve
    println!("Running implicit stepper...");
    let start = std::time::Instant::now();
    let result = CrankNicolson::new()
        .solve(&rod, &config)
        .map_err(anyhow::Error::msg)?;
    println!("✓ Completed in {:.3}s\n", start.elapsed().as_secs_f64());

    // Analysis
    println!("Analysis:");
    println!("  Retained instants: {}", result.len());
    for &index in &[0, steps / 3, 2 * steps / 3, steps] {
        println!(
            "  t = {:.3}: amplitude {:.5}, max error vs analytical {:.3e}",
            result.time_points[index],
            result.amplitude_at(index),
            result.max_error_at(index)
        );
    }
    println!("  Max error over run: {:.3e}", result.max_error());

    let final_profile = result
        .final_numerical()
        .ok_or_else(|| anyhow::anyhow!("no retained profiles"))?;
    println!("\nBoundary values at final instant:");
    println!("  w(0) = {:.10}", final_profile[0]);
    println!("  w(L) = {:.10}", final_profile[grid_points - 1]);

    // Artifacts
    println!("\nWriting artifacts...");
    let out_dir = std::env::temp_dir().join("fdm_heat_comparison");
    std::fs::create_dir_all(&out_dir)?;

    let numerical_csv = out_dir.join("numerical.csv");
    export_profiles_csv(
        &result.time_points,
        &result.numerical,
        numerical_csv.to_str().unwrap(),
        None,
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("✓ {}", numerical_csv.display());

    let errors_csv = out_dir.join("errors.csv");
    export_error_summary_csv(&result, errors_csv.to_str().unwrap(), None)
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("✓ {}", errors_csv.display());

    let comparison_png = out_dir.join("comparison.png");
    let plot_config = PlotConfig::comparison("Crank-Nicolson vs analytical solution");
    plot_profile_comparison(
        &result,
        rod.grid(),
        comparison_png.to_str().unwrap(),
        Some(&plot_config),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("✓ {}", comparison_png.display());

    let surface_png = out_dir.join("surface.png");
    plot_surface(
        &result,
        rod.grid(),
        surface_png.to_str().unwrap(),
        Some(&PlotConfig::surface("Numerical solution w(x, t)")),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("✓ {}", surface_png.display());

    println!("\n=== Done ===");
    println!("The dashed analytical curves should be hidden behind the solid numerical ones.");

    Ok(())
}
