//! The recorded figure: everything a plot call drew, in data coordinates.
//!
//! A [`Figure`] is what the helpers hand back. It can be inspected, saved
//! (see [`Figure::save`]) or shown (see [`Figure::show`]) after the call.

use crate::style::{AxisScale, LegendLocation, LineStyle, MarkerShape, Orientation};
use plotters::style::RGBAColor;

/// One bar; it spans `[start, start + width]` on the category axis and
/// `[base, base + value]` on the value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub start: f64,
    pub width: f64,
    pub base: f64,
    pub value: f64,
}

impl Bar {
    pub fn center(&self) -> f64 {
        self.start + 0.5 * self.width
    }

    pub fn top(&self) -> f64 {
        self.base + self.value
    }
}

/// All bars of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: Option<String>,
    pub color: RGBAColor,
    pub orientation: Orientation,
    pub bars: Vec<Bar>,
}

/// One line/scatter trace.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTrace {
    pub label: Option<String>,
    pub color: RGBAColor,
    pub points: Vec<(f64, f64)>,
    pub marker: MarkerShape,
    pub line_style: LineStyle,
    /// In points.
    pub line_width: f64,
    /// In points.
    pub marker_size: f64,
    pub mark_every: usize,
}

/// Shaded region between `lo` and `hi` along x.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBand {
    pub color: RGBAColor,
    /// `(x, lo, hi)`
    pub points: Vec<(f64, f64, f64)>,
}

/// Discrete symmetric error bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBars {
    pub color: RGBAColor,
    /// `Vertical` bars show y error, `Horizontal` bars show x error.
    pub orientation: Orientation,
    /// `(x, y, err)`
    pub points: Vec<(f64, f64, f64)>,
}

/// A tick at an explicit position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: Option<String>,
}

/// Decoration of one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    pub label: Option<String>,
    /// `None` fits the data.
    pub limits: Option<(f64, f64)>,
    pub scale: AxisScale,
    /// `None` lets the renderer choose; `Some(vec![])` draws no ticks.
    pub ticks: Option<Vec<Tick>>,
    pub inverted: bool,
}

/// Everything that is not data.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorations {
    pub title: Option<String>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<LegendLocation>,
    /// In points.
    pub fontsize: f64,
    pub legend_fontsize: f64,
    pub tick_locale: String,
}

impl Default for Decorations {
    fn default() -> Self {
        Self {
            title: None,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            legend: Some(LegendLocation::Best),
            fontsize: 8.0,
            legend_fontsize: 8.0,
            tick_locale: "en".to_string(),
        }
    }
}

/// Recorded figure; the default [`RenderBackend`](crate::RenderBackend).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub bars: Vec<BarSeries>,
    pub lines: Vec<LineTrace>,
    pub bands: Vec<ErrorBand>,
    pub error_bars: Vec<ErrorBars>,
    pub decorations: Decorations,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
            && self.lines.is_empty()
            && self.bands.is_empty()
            && self.error_bars.is_empty()
    }

    /// Data extent `(x_min, x_max, y_min, y_max)` over everything drawn,
    /// including error extents. `None` for an empty figure.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let (xs, ys) = self.extent_values();
        let finite = |v: &f64| v.is_finite();
        let (x0, x1) = min_max(xs.iter().copied().filter(finite))?;
        let (y0, y1) = min_max(ys.iter().copied().filter(finite))?;
        Some((x0, x1, y0, y1))
    }

    /// Every x and every y value that has to fit on the axes.
    pub(crate) fn extent_values(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs: Vec<f64> = Vec::new();
        let mut ys: Vec<f64> = Vec::new();
        for series in &self.bars {
            for bar in &series.bars {
                let (cat, val) = match series.orientation {
                    Orientation::Vertical => (&mut xs, &mut ys),
                    Orientation::Horizontal => (&mut ys, &mut xs),
                };
                cat.extend([bar.start, bar.start + bar.width]);
                val.extend([bar.base, bar.top()]);
            }
        }
        for line in &self.lines {
            for &(x, y) in &line.points {
                xs.push(x);
                ys.push(y);
            }
        }
        for band in &self.bands {
            for &(x, lo, hi) in &band.points {
                xs.push(x);
                ys.extend([lo, hi]);
            }
        }
        for eb in &self.error_bars {
            for &(x, y, e) in &eb.points {
                match eb.orientation {
                    Orientation::Vertical => {
                        xs.push(x);
                        ys.extend([y - e, y + e]);
                    }
                    Orientation::Horizontal => {
                        xs.extend([x - e, x + e]);
                        ys.push(y);
                    }
                }
            }
        }
        (xs, ys)
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
