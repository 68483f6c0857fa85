//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by the comparison, surface and field renderers. Every figure
/// function accepts `Option<&PlotConfig>` and falls back to the defaults
/// when given `None`.
///
/// # Example
///
/// ```rust
/// use fdm_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::comparison("Heat equation, alpha = 0.5");
/// config.width = 1920;
/// config.height = 1080;
/// config.snapshot_colors = Some(vec![BLACK, RED]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200)
    pub width: u32,

    /// Image height in pixels (default: 800)
    pub height: u32,

    /// Plot title
    pub title: String,

    /// X-axis label (default: "Position")
    pub xlabel: String,

    /// Y-axis label (default: "Temperature")
    pub ylabel: String,

    /// Optional colors for the plotted instants, one per snapshot.
    ///
    /// If None, a default palette is cycled. The numerical curve uses the
    /// color solid, the analytical reference uses it dashed.
    pub snapshot_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "Temperature profiles".to_string(),
            xlabel: "Position".to_string(),
            ylabel: "Temperature".to_string(),
            snapshot_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Config for a numerical-vs-analytical comparison figure.
    pub fn comparison(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Config for a space-time surface figure.
    pub fn surface(title: &str) -> Self {
        Self {
            title: title.to_string(),
            xlabel: "Position".to_string(),
            ylabel: "Time".to_string(),
            ..Default::default()
        }
    }

    /// Config for a 2D field frame.
    pub fn field(title: &str) -> Self {
        Self {
            title: title.to_string(),
            width: 800,
            height: 800,
            ..Default::default()
        }
    }

    /// Color for snapshot `index`, cycling a default palette when no
    /// custom colors were set.
    pub(crate) fn snapshot_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.snapshot_colors
            && index < colors.len()
        {
            return colors[index];
        }

        const PALETTE: [RGBColor; 6] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            RGBColor(255, 165, 0), // Orange
            BLACK,
        ];
        PALETTE[index % PALETTE.len()]
    }
}
