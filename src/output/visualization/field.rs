//! Colormapped frames of 2D scalar fields
//!
//! Renders a row-major scalar field (a Gray-Scott V channel, a membrane
//! displacement snapshot) into a bitmap, one filled rectangle per cell,
//! colored through the viridis map. Writing frames at a fixed cadence and
//! stitching them externally is how the cinematic animations are produced.

use plotters::prelude::*;
use plotters::style::colors::colormaps::ViridisRGB;
use std::error::Error;

use crate::output::visualization::PlotConfig;

/// Render one field frame to a PNG bitmap.
///
/// Values are normalized to the field's own min/max before the colormap
/// is applied; a constant field renders as a single color.
///
/// # Arguments
///
/// * `values` - Row-major field samples, length `rows * cols`
/// * `rows` - Number of field rows
/// * `cols` - Number of field columns
/// * `output_path` - Output file path (always a bitmap)
/// * `config` - Optional plot configuration (dimensions, background)
///
/// # Example
///
/// ```rust,ignore
/// let frame: Vec<f64> = grid.v().iter().copied().collect();
/// render_field_frame(&frame, grid.size(), grid.size(), "frame_000.png", None)?;
/// ```
pub fn render_field_frame(
    values: &[f64],
    rows: usize,
    cols: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config
        .cloned()
        .unwrap_or_else(|| PlotConfig::field("Field"));
    let config = &owned_config;

    if rows == 0 || cols == 0 {
        return Err("Field dimensions must be nonzero".into());
    }
    if values.len() != rows * cols {
        return Err(format!(
            "Field length {} does not match {} x {}",
            values.len(),
            rows,
            cols
        )
        .into());
    }

    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            return Err("Field contains non-finite values".into());
        }
        v_min = v_min.min(v);
        v_max = v_max.max(v);
    }
    let span = (v_max - v_min).max(1e-12);

    let root =
        BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&config.background)?;

    let cell_w = config.width as f64 / cols as f64;
    let cell_h = config.height as f64 / rows as f64;

    for i in 0..rows {
        for j in 0..cols {
            let normalized = (values[i * cols + j] - v_min) / span;
            let color = ViridisRGB::get_color(normalized);

            let x0 = (j as f64 * cell_w) as i32;
            let y0 = (i as f64 * cell_h) as i32;
            let x1 = ((j + 1) as f64 * cell_w) as i32;
            let y1 = ((i + 1) as f64 * cell_h) as i32;

            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], color.filled()))?;
        }
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_render_frame() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let values: Vec<f64> = (0..64).map(|i| (i as f64 * 0.1).sin()).collect();
        render_field_frame(&values, 8, 8, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_constant_field_renders() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let values = vec![0.5; 16];
        render_field_frame(&values, 4, 4, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let values = vec![0.0; 10];
        let result = render_field_frame(&values, 4, 4, "unused.png", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_field_is_an_error() {
        let values = vec![0.0, f64::NAN, 0.0, 0.0];
        let result = render_field_frame(&values, 2, 2, "unused.png", None);
        assert!(result.is_err());
    }
}
