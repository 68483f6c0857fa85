//! Numerical vs analytical comparison figures
//!
//! Draws the temperature profile at four representative instants of a run
//! (initial, one third, two thirds, final), with the numerical solution as
//! solid lines and the analytical reference dashed in the same color. How
//! closely the dashed curves are hidden behind the solid ones is the
//! visual accuracy check.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use crate::output::visualization::PlotConfig;
use crate::physics::Grid1d;
use crate::solver::SimulationResult;

/// Plot a comparison figure from a simulation result.
///
/// The backend is chosen by extension: `.svg` renders a vector figure,
/// anything else a PNG bitmap.
///
/// # Arguments
///
/// * `result` - Run with aligned numerical and analytical sequences
/// * `grid` - Spatial grid the profiles live on
/// * `output_path` - Output file path (.png or .svg)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// let result = CrankNicolson::new().solve(&rod, &stepper)?;
/// plot_profile_comparison(&result, rod.grid(), "comparison.png", None)?;
/// ```
pub fn plot_profile_comparison(
    result: &SimulationResult,
    grid: &Grid1d,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;

    if result.is_empty() {
        return Err("Cannot plot an empty simulation result".into());
    }

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_on_area(&root, result, grid, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_on_area(&root, result, grid, config)
    }
}

/// Indices of the instants shown in the figure: start, one third, two
/// thirds, end (deduplicated for very short runs).
fn representative_indices(len: usize) -> Vec<usize> {
    let mut indices = vec![0, len / 3, 2 * len / 3, len - 1];
    indices.dedup();
    indices
}

fn draw_comparison_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    result: &SimulationResult,
    grid: &Grid1d,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let indices = representative_indices(result.len());

    // Global value range over both sequences at the plotted instants
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &i in &indices {
        for v in result.numerical[i].iter().chain(result.analytical[i].iter()) {
            y_min = y_min.min(*v);
            y_max = y_max.max(*v);
        }
    }
    let y_margin = 0.1 * (y_max - y_min).max(1e-12);

    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..grid.length(), (y_min - y_margin)..(y_max + y_margin))?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    for (k, &i) in indices.iter().enumerate() {
        let color = config.snapshot_color(k);
        let t = result.time_points[i];

        chart
            .draw_series(LineSeries::new(
                (0..grid.len()).map(|p| (grid.position(p), result.numerical[i][p])),
                color.stroke_width(config.line_width),
            ))?
            .label(format!("Numerical t = {:.3}", t))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .draw_series(DashedLineSeries::new(
                (0..grid.len()).map(|p| (grid.position(p), result.analytical[i][p])),
                6,
                4,
                color.stroke_width(config.line_width),
            ))?
            .label(format!("Analytical t = {:.3}", t))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 8, y), (x + 12, y), (x + 20, y)], color)
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeatRod;
    use crate::solver::{CrankNicolson, StepperConfig};
    use tempfile::NamedTempFile;

    fn sample_run() -> (SimulationResult, HeatRod) {
        let rod = HeatRod::new(1.0, 0.01, 11).unwrap();
        let result = CrankNicolson::new()
            .solve(&rod, &StepperConfig::new(0.01, 9))
            .unwrap();
        (result, rod)
    }

    #[test]
    fn test_representative_indices_long_run() {
        assert_eq!(representative_indices(10), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_representative_indices_single_snapshot() {
        assert_eq!(representative_indices(1), vec![0]);
    }

    #[test]
    fn test_plot_png() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let (result, rod) = sample_run();
        plot_profile_comparison(&result, rod.grid(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_svg() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        let (result, rod) = sample_run();
        let config = PlotConfig::comparison("Test comparison");
        plot_profile_comparison(&result, rod.grid(), path.to_str().unwrap(), Some(&config))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_zero_step_run_still_plots() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let rod = HeatRod::new(1.0, 0.01, 11).unwrap();
        let result = CrankNicolson::new()
            .solve(&rod, &StepperConfig::new(0.01, 0))
            .unwrap();

        plot_profile_comparison(&result, rod.grid(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }
}
