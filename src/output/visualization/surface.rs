//! 3D surface figure of the space-time solution
//!
//! Renders the numerical temperature w(x, t) as a surface over the
//! position and time axes, colored by temperature. The whole retained
//! history goes into one figure, which is the quickest way to eyeball the
//! exponential decay of the sine profile.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::ViridisRGB;
use std::error::Error;

use crate::output::visualization::PlotConfig;
use crate::physics::Grid1d;
use crate::solver::SimulationResult;

/// Plot the numerical solution surface.
///
/// Needs at least two retained instants; a zero-step run has no time axis
/// to span. Backend chosen by extension as for the comparison figure.
///
/// # Arguments
///
/// * `result` - Run with the retained profile history
/// * `grid` - Spatial grid the profiles live on
/// * `output_path` - Output file path (.png or .svg)
/// * `config` - Optional plot configuration
pub fn plot_surface(
    result: &SimulationResult,
    grid: &Grid1d,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_else(|| PlotConfig::surface("Temperature surface"));
    let config = &owned_config;

    if result.len() < 2 {
        return Err("Surface plot needs at least two retained time instants".into());
    }

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_surface_on_area(&root, result, grid, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_surface_on_area(&root, result, grid, config)
    }
}

fn draw_surface_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    result: &SimulationResult,
    grid: &Grid1d,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let total_time = *result.time_points.last().ok_or("empty time axis")?;
    let dt = result.time_points[1] - result.time_points[0];
    let dx = grid.spacing();

    let mut w_min = f64::INFINITY;
    let mut w_max = f64::NEG_INFINITY;
    for profile in &result.numerical {
        for &v in profile.iter() {
            w_min = w_min.min(v);
            w_max = w_max.max(v);
        }
    }
    let w_margin = 0.05 * (w_max - w_min).max(1e-12);

    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 32.0).into_font())
        .margin(20)
        .build_cartesian_3d(
            0.0..grid.length(),
            (w_min - w_margin)..(w_max + w_margin),
            0.0..total_time,
        )?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    // The closure receives coordinate values; map them back to the
    // nearest sample indices of the retained history.
    let value_at = move |x: f64, t: f64| -> f64 {
        let i = ((x / dx).round() as usize).min(grid.len() - 1);
        let n = ((t / dt).round() as usize).min(result.numerical.len() - 1);
        result.numerical[n][i]
    };

    chart.draw_series(
        SurfaceSeries::xoz(
            (0..grid.len()).map(|i| grid.position(i)),
            result.time_points.iter().copied(),
            value_at,
        )
        .style_func(&|&w| {
            ViridisRGB::get_color_normalized(w, w_min, w_max + 1e-12)
                .mix(0.7)
                .filled()
        }),
    )?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
