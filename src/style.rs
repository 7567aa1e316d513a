//! Style enums shared by the bar and line helpers.

use plotters::chart::SeriesLabelPosition;
use serde::{Deserialize, Serialize};

/// Marker drawn at data points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    /// No marker; the trace is a plain line.
    #[default]
    None,
    Circle,
    Square,
    Triangle,
    Diamond,
    /// Upright `+`.
    Cross,
    /// Diagonal `x`.
    X,
}

/// Stroke pattern of a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// Markers only (scatter).
    None,
}

impl LineStyle {
    /// Dash length and gap in pixels for patterned strokes.
    pub(crate) fn dash_pattern(self) -> Option<(u32, u32)> {
        match self {
            LineStyle::Dashed => Some((8, 5)),
            LineStyle::Dotted => Some((2, 4)),
            // plotters has no mixed pattern, so dash-dot is a short dash
            LineStyle::DashDot => Some((6, 3)),
            LineStyle::Solid | LineStyle::None => None,
        }
    }
}

/// Axis scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    #[default]
    Linear,
    /// Base-10 logarithmic; non-positive values cannot be shown.
    Log,
}

/// Legend placement inside the plotting area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    /// Upper right, the usual least-crowded corner.
    #[default]
    Best,
    UpperLeft,
    UpperRight,
    UpperCenter,
    MiddleLeft,
    MiddleRight,
    Center,
    LowerLeft,
    LowerRight,
    LowerCenter,
}

impl LegendLocation {
    pub(crate) fn to_series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendLocation::Best | LegendLocation::UpperRight => SeriesLabelPosition::UpperRight,
            LegendLocation::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendLocation::UpperCenter => SeriesLabelPosition::UpperMiddle,
            LegendLocation::MiddleLeft => SeriesLabelPosition::MiddleLeft,
            LegendLocation::MiddleRight => SeriesLabelPosition::MiddleRight,
            LegendLocation::Center => SeriesLabelPosition::MiddleMiddle,
            LegendLocation::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendLocation::LowerRight => SeriesLabelPosition::LowerRight,
            LegendLocation::LowerCenter => SeriesLabelPosition::LowerMiddle,
        }
    }
}

/// Direction in which bars (and their error bars) extend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Bars grow along y; categories sit on the x axis.
    #[default]
    Vertical,
    /// Bars grow along x; categories sit on the y axis.
    Horizontal,
}
