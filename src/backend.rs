//! Rendering backend seam.
//!
//! The plotting helpers validate, lay out and jitter, then hand finished
//! primitives to a [`RenderBackend`]. [`Figure`] records them and renders
//! through plotters; tests can plug in their own backend.

use crate::colors;
use crate::config::FigureSize;
use crate::error::Result;
use crate::figure::{BarSeries, Decorations, ErrorBand, ErrorBars, Figure, LineTrace};
use plotters::style::RGBAColor;
use std::path::Path;

pub trait RenderBackend {
    /// Map a color name plus emphasis flag to a concrete color.
    fn resolve_color(&self, name: &str, emphasis: bool) -> Result<RGBAColor> {
        colors::get_plot_color(name, emphasis)
    }

    fn draw_bars(&mut self, series: BarSeries);

    fn draw_line(&mut self, trace: LineTrace);

    fn shade_band(&mut self, band: ErrorBand);

    fn draw_error_bars(&mut self, bars: ErrorBars);

    /// Axis labels, limits, ticks, title and legend.
    fn decorate(&mut self, decorations: Decorations);

    fn save_figure(&mut self, path: &Path, size: FigureSize) -> Result<()>;

    /// Display the figure interactively.
    fn show(&mut self) -> Result<()>;
}

impl RenderBackend for Figure {
    fn draw_bars(&mut self, series: BarSeries) {
        self.bars.push(series);
    }

    fn draw_line(&mut self, trace: LineTrace) {
        self.lines.push(trace);
    }

    fn shade_band(&mut self, band: ErrorBand) {
        self.bands.push(band);
    }

    fn draw_error_bars(&mut self, bars: ErrorBars) {
        self.error_bars.push(bars);
    }

    fn decorate(&mut self, decorations: Decorations) {
        self.decorations = decorations;
    }

    fn save_figure(&mut self, path: &Path, size: FigureSize) -> Result<()> {
        self.save(path, size)
    }

    fn show(&mut self) -> Result<()> {
        Figure::show(self)
    }
}
