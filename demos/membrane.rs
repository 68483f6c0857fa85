//! Vibrating Membrane: Fourier Series Snapshots
//!
//! Projects a Gaussian pluck onto the sine basis of a clamped rectangular
//! membrane and renders displacement snapshots at several instants. The
//! solution is exact (up to series truncation), so any instant can be
//! evaluated directly without stepping through the ones before it.

use anyhow::Result;
use fdm_rs::models::{FourierSolution, GaussianPluck, MembraneParams};
use fdm_rs::output::visualization::{PlotConfig, render_field_frame};

fn main() -> Result<()> {
    println!("=== 2D Wave Equation: plucked membrane ===\n");

    let params = MembraneParams::new(1.0, 1.0, 1.0, 64, 24);
    let pluck = GaussianPluck::new(0.6, 0.4, 0.1);

    println!("Membrane: {} x {}, wave speed {}", params.lx, params.ly, params.wave_speed);
    println!("Resolution: {} points per axis, {} modes per axis", params.grid_points, params.modes);
    println!("Pluck: center ({}, {}), width {}\n", pluck.x0, pluck.y0, pluck.sigma);

    println!("Projecting Fourier coefficients...");
    let start = std::time::Instant::now();
    let solution = FourierSolution::project(params, |x, y| pluck.evaluate(x, y))
        .map_err(anyhow::Error::msg)?;
    println!("✓ Projection in {:.3}s", start.elapsed().as_secs_f64());

    let fundamental = params.angular_frequency(1, 1);
    let period = 2.0 * std::f64::consts::PI / fundamental;
    println!("Fundamental angular frequency: {fundamental:.4} rad/s (period {period:.4}s)\n");

    let out_dir = std::env::temp_dir().join("fdm_membrane");
    std::fs::create_dir_all(&out_dir)?;

    let n = params.grid_points;
    for (index, fraction) in [0.0, 0.125, 0.25, 0.375, 0.5].iter().enumerate() {
        let t = fraction * period;
        let displacement = solution.displacement_at(t);

        // DMatrix stores column-major; the renderer expects row-major
        let values: Vec<f64> = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| displacement[(i, j)])
            .collect();

        let path = out_dir.join(format!("membrane_{index}.png"));
        let config = PlotConfig::field(&format!("Membrane displacement, t = {t:.3}s"));
        render_field_frame(&values, n, n, path.to_str().unwrap(), Some(&config))
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        println!(
            "t = {:.3}s: peak displacement {:.4} -> {}",
            t,
            solution.peak_displacement_at(t),
            path.display()
        );
    }

    println!("\n=== Done ===");
    Ok(())
}
