//! Options for the plotting helpers.
//!
//! Every option has a default, so callers only spell out what they change:
//!
//! ```
//! use ss_plot::BarChartOptions;
//!
//! let opts = BarChartOptions {
//!     series_colors: vec!["red".into(), "blue".into()],
//!     stacked: true,
//!     ..Default::default()
//! };
//! assert_eq!(opts.barwidth, 0.35);
//! ```
//!
//! The structs are also (de)serializable, so a chart style can live in a JSON
//! file next to the data; missing fields take their defaults.

use crate::error::Result;
use crate::style::{AxisScale, LegendLocation, LineStyle, MarkerShape};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Physical size of a saved figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureSize {
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches.
    pub height_in: f64,
    /// Pixels per inch; also scales font sizes (given in points).
    pub dpi: f64,
}

impl FigureSize {
    /// Size in inches at the default resolution.
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            ..Self::default()
        }
    }

    /// Pixel dimensions, at least 1x1.
    pub fn pixels(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * self.dpi).round().max(1.0) as u32;
        (px(self.width_in), px(self.height_in))
    }

    /// Pixels per typographic point.
    pub fn px_per_pt(&self) -> f64 {
        self.dpi / 72.0
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width_in: 3.4,
            height_in: 1.5,
            dpi: 300.0,
        }
    }
}

/// Per-series overrides applied on top of the list-based bar styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Replaces the resolved series color.
    pub color: Option<String>,
    /// Fill opacity in `0..=1`.
    pub alpha: Option<f64>,
    /// Replaces the series label.
    pub label: Option<String>,
}

/// Options for [`plot_bar_graph`](crate::plot_bar_graph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartOptions {
    /// One color name per series (required).
    pub series_colors: Vec<String>,
    /// One legend label per series; empty strings are left out of the legend.
    pub series_labels: Option<Vec<String>>,
    /// Draw the emphasized variant of a series color. Default: none emphasized.
    pub series_color_emphasis: Option<Vec<bool>>,
    /// Error value per bar, per series. `None` entries draw no error bars.
    pub series_errs: Option<Vec<Option<Vec<f64>>>>,
    /// Error bar color per series. Default: black.
    pub series_err_colors: Option<Vec<String>>,
    /// Gap between neighbouring bars of one category.
    pub series_padding: f64,
    /// Put one tick per series, labeled with the series labels.
    /// Only valid when every series has a single category.
    pub series_use_labels: bool,
    pub series_style: Option<Vec<BarStyle>>,
    pub plot_xlabel: Option<String>,
    pub plot_ylabel: Option<String>,
    /// Invert the y axis.
    pub plot_yinvert: bool,
    pub plot_title: Option<String>,
    pub category_labels: Option<Vec<String>>,
    /// Place a tick under every category.
    pub category_ticks: bool,
    /// Distance between categories, as a fraction of `barwidth`.
    pub category_padding: f64,
    pub barwidth: f64,
    /// Space between the axis ends and the outermost bars.
    pub xpadding: f64,
    pub stacked: bool,
    /// Font size in points for all labels.
    pub fontsize: f64,
    pub legend_fontsize: f64,
    /// `None` hides the legend.
    pub legend_location: Option<LegendLocation>,
    /// Locale tag for tick label digit grouping (e.g. `en`, `de`).
    pub tick_locale: String,
    pub savefile: Option<PathBuf>,
    pub savefile_size: FigureSize,
    pub horizontal: bool,
    /// Open the rendered figure in the system image viewer.
    pub show_plot: bool,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            series_colors: Vec::new(),
            series_labels: None,
            series_color_emphasis: None,
            series_errs: None,
            series_err_colors: None,
            series_padding: 0.0,
            series_use_labels: false,
            series_style: None,
            plot_xlabel: None,
            plot_ylabel: None,
            plot_yinvert: false,
            plot_title: None,
            category_labels: None,
            category_ticks: true,
            category_padding: 0.25,
            barwidth: 0.35,
            xpadding: 0.0,
            stacked: false,
            fontsize: 8.0,
            legend_fontsize: 8.0,
            legend_location: Some(LegendLocation::Best),
            tick_locale: "en".to_string(),
            savefile: None,
            savefile_size: FigureSize::default(),
            horizontal: false,
            show_plot: false,
        }
    }
}

impl BarChartOptions {
    /// Parse options from JSON; absent fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Options for [`plot_lines`](crate::plot_lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartOptions {
    /// One color name per series (required).
    pub series_colors: Vec<String>,
    pub series_color_emphasis: Option<Vec<bool>>,
    pub series_labels: Option<Vec<String>>,
    /// Symmetric error per point, per series.
    pub series_errs: Option<Vec<Option<Vec<f64>>>>,
    /// Band / error bar color per series. Default: black.
    pub series_err_colors: Option<Vec<String>>,
    /// Shade `y ± err` instead of drawing discrete error bars.
    pub fill_error: bool,
    pub plot_xlabel: Option<String>,
    pub plot_xlim: Option<(f64, f64)>,
    pub plot_ylabel: Option<String>,
    pub plot_ylim: Option<(f64, f64)>,
    pub plot_title: Option<String>,
    pub fontsize: f64,
    pub legend_fontsize: f64,
    /// Stroke width in points.
    pub linewidth: f64,
    pub legend_location: Option<LegendLocation>,
    pub tick_locale: String,
    pub savefile: Option<PathBuf>,
    pub savefile_size: FigureSize,
    pub show_plot: bool,
    /// Standard deviation of x jitter. `None` (JSON `null` or absent)
    /// disables it; there is no negative "off" value, `-1` is rejected.
    pub jitter_x: Option<f64>,
    /// Standard deviation of y jitter, as for `jitter_x`.
    pub jitter_y: Option<f64>,
    /// Opacity of every trace.
    pub jitter_alpha: f64,
    /// Seed for the jitter RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Marker size in points.
    pub marker_size: f64,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub plot_markers: Option<Vec<MarkerShape>>,
    pub line_styles: Option<Vec<LineStyle>>,
    /// Draw a marker on every n-th point.
    pub mark_every: usize,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            series_colors: Vec::new(),
            series_color_emphasis: None,
            series_labels: None,
            series_errs: None,
            series_err_colors: None,
            fill_error: true,
            plot_xlabel: None,
            plot_xlim: None,
            plot_ylabel: None,
            plot_ylim: None,
            plot_title: None,
            fontsize: 8.0,
            legend_fontsize: 8.0,
            linewidth: 2.0,
            legend_location: Some(LegendLocation::Best),
            tick_locale: "en".to_string(),
            savefile: None,
            savefile_size: FigureSize::default(),
            show_plot: false,
            jitter_x: None,
            jitter_y: None,
            jitter_alpha: 1.0,
            seed: None,
            marker_size: 5.0,
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            plot_markers: None,
            line_styles: None,
            mark_every: 1,
        }
    }
}

impl LineChartOptions {
    /// Parse options from JSON; absent fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_size_in_pixels() {
        let size = FigureSize::default();
        assert_eq!(size.pixels(), (1020, 450));
        assert!((size.px_per_pt() - 300.0 / 72.0).abs() < 1e-12);
    }

    #[test]
    fn json_fills_in_defaults() {
        let opts = BarChartOptions::from_json(
            r#"{ "series_colors": ["red", "blue"], "stacked": true, "legend_location": "lower_left" }"#,
        )
        .unwrap();
        assert_eq!(opts.series_colors, vec!["red", "blue"]);
        assert!(opts.stacked);
        assert_eq!(opts.legend_location, Some(LegendLocation::LowerLeft));
        assert_eq!(opts.barwidth, 0.35);
        assert_eq!(opts.category_padding, 0.25);
        assert!(opts.category_ticks);
    }

    #[test]
    fn line_options_parse_enums() {
        let opts = LineChartOptions::from_json(
            r#"{ "series_colors": ["green"], "plot_markers": ["circle"], "line_styles": ["none"],
                 "y_scale": "log", "jitter_x": 0.1 }"#,
        )
        .unwrap();
        assert_eq!(opts.plot_markers, Some(vec![MarkerShape::Circle]));
        assert_eq!(opts.line_styles, Some(vec![LineStyle::None]));
        assert_eq!(opts.y_scale, AxisScale::Log);
        assert_eq!(opts.jitter_x, Some(0.1));
        assert_eq!(opts.jitter_y, None);
        assert_eq!(opts.mark_every, 1);
    }

    #[test]
    fn null_jitter_means_no_jitter() {
        let opts = LineChartOptions::from_json(
            r#"{ "series_colors": ["red"], "jitter_x": null, "jitter_y": null }"#,
        )
        .unwrap();
        assert_eq!(opts.jitter_x, None);
        assert_eq!(opts.jitter_y, None);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = LineChartOptions::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::PlotError::Config(_)));
    }
}
