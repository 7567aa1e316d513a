//! Render a recorded [`Figure`] to **SVG** or **PNG** with plotters.
//!
//! - Simplified axes: no grid, left and bottom axis lines only
//! - Explicit ticks (bar categories) are placed exactly where the layout put them
//! - Log and inverted axes are mapped to plain linear chart coordinates
//! - Locale-aware tick labels (`30,000` vs `30.000`)
//! - Legend inside the plotting area, no frame

pub mod text;
pub mod util;

use crate::config::FigureSize;
use crate::error::{PlotError, Result};
use crate::figure::{Axis, Bar, Figure, Tick};
use crate::style::{LineStyle, MarkerShape, Orientation};

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontTransform, TRANSPARENT};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::process::{Child, Command};
use std::thread::JoinHandle;

use text::{ensure_fonts_registered, max_text_width_px};
use util::{AxisMap, format_tick, map_locale};

/// Automatic tick count per axis.
const TICK_COUNT: usize = 6;
/// Opacity of shaded error bands.
const BAND_ALPHA: f64 = 0.3;

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

impl Figure {
    /// Render to `path`; `.svg` selects SVG, anything else goes through the
    /// bitmap backend (format from the extension, e.g. `.png`).
    pub fn save<P: AsRef<Path>>(&self, path: P, size: FigureSize) -> Result<()> {
        let path = path.as_ref();
        let dims = size.pixels();
        let is_svg = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            let root = SVGBackend::new(path, dims).into_drawing_area();
            draw_figure(&root, self, size.px_per_pt())?;
        } else {
            let root = BitMapBackend::new(path, dims).into_drawing_area();
            draw_figure(&root, self, size.px_per_pt())?;
        }
        log::info!("wrote {}x{} figure to {}", dims.0, dims.1, path.display());
        Ok(())
    }

    /// Render to a kept temporary PNG and open it in the platform image viewer.
    pub fn show(&self) -> Result<()> {
        let file = tempfile::Builder::new()
            .prefix("ss-plot-")
            .suffix(".png")
            .tempfile()?;
        let (_, path) = file.keep().map_err(|e| PlotError::Io(e.error))?;
        self.save(
            &path,
            FigureSize {
                width_in: 6.8,
                height_in: 3.0,
                dpi: 150.0,
            },
        )?;
        open_in_viewer(&path)
    }
}

fn open_in_viewer(path: &Path) -> Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    let child = cmd.arg(path).spawn()?;
    reap_in_background(child);
    log::info!("opened {} in the system viewer", path.display());
    Ok(())
}

/// Wait for a detached viewer on a helper thread so it does not linger as a zombie.
fn reap_in_background(mut child: Child) -> JoinHandle<()> {
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::debug!("viewer process: {e}");
        }
    })
}

/// Sizes in pixels derived from the figure's point sizes.
#[derive(Debug, Clone, Copy)]
struct Metrics {
    font_px: u32,
    legend_px: u32,
    title_px: u32,
    stroke_px: u32,
    tick_len: i32,
    margin: u32,
}

fn pt_to_px(points: f64, px_per_pt: f64) -> u32 {
    ((points * px_per_pt).round() as u32).max(1)
}

impl Metrics {
    /// Text sizes are capped at a quarter of the figure height.
    fn new(fig: &Figure, px_per_pt: f64, (_, height): (u32, u32)) -> Self {
        let pt = |size: f64| pt_to_px(size, px_per_pt);
        let text = |size: f64| pt(size).min((height / 4).max(1));
        let deco = &fig.decorations;
        let font_px = text(deco.fontsize);
        Self {
            font_px,
            legend_px: text(deco.legend_fontsize),
            title_px: text(deco.fontsize * 1.25),
            stroke_px: pt(0.8),
            tick_len: pt(3.5) as i32,
            margin: font_px,
        }
    }
}

/// Helper that draws to any plotters backend.
fn draw_figure<DB>(root: &DrawingArea<DB, Shift>, fig: &Figure, px_per_pt: f64) -> Result<()>
where
    DB: DrawingBackend,
{
    let has_text = ensure_fonts_registered();
    let deco = &fig.decorations;
    let m = Metrics::new(fig, px_per_pt, root.dim_in_pixel());

    root.fill(&WHITE).map_err(PlotError::render)?;

    // ----------------------------
    // 1) Ranges in chart coordinates
    // ----------------------------
    let xmap = AxisMap::for_axis(&deco.x_axis);
    let ymap = AxisMap::for_axis(&deco.y_axis);
    let (xs, ys) = fig.extent_values();
    let (x0, x1) = xmap.range(deco.x_axis.limits, &xs);
    let (y0, y1) = ymap.range(deco.y_axis.limits, &ys);

    let (locale, dec_sep) = map_locale(&deco.tick_locale);
    let x_label_fmt = |c: &f64| format_tick(xmap.from_coord(*c), locale, dec_sep);
    let y_label_fmt = |c: &f64| format_tick(ymap.from_coord(*c), locale, dec_sep);

    // ----------------------------
    // 2) Label gutters
    // ----------------------------
    let (left_px, bottom_px) = if has_text {
        let left = left_gutter_px(&deco.y_axis, (y0, y1), &y_label_fmt, m);
        let desc = if deco.x_axis.label.is_some() {
            m.font_px.saturating_mul(2)
        } else {
            0
        };
        let bottom = m.font_px.saturating_mul(2).saturating_add(desc);
        (left, bottom)
    } else {
        (0, 0)
    };

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(m.margin)
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom_px);
    if has_text && let Some(title) = &deco.title {
        builder.caption(title, (FontFamily::SansSerif, m.title_px));
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(PlotError::render)?;

    // ----------------------------
    // 3) Axes
    // ----------------------------
    if has_text {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(TICK_COUNT)
            .y_labels(TICK_COUNT)
            .x_label_formatter(&x_label_fmt)
            .y_label_formatter(&y_label_fmt)
            .label_style((FontFamily::SansSerif, m.font_px))
            .axis_desc_style((FontFamily::SansSerif, m.font_px))
            .axis_style(BLACK.stroke_width(m.stroke_px));
        if deco.x_axis.ticks.is_some() {
            mesh.disable_x_axis();
        } else if let Some(label) = &deco.x_axis.label {
            mesh.x_desc(label.as_str());
        }
        if deco.y_axis.ticks.is_some() {
            mesh.disable_y_axis();
        } else if let Some(label) = &deco.y_axis.label {
            mesh.y_desc(label.as_str());
        }
        mesh.draw().map_err(PlotError::render)?;
    }
    if !has_text || deco.x_axis.ticks.is_some() {
        draw_bottom_axis(root, &chart, &deco.x_axis, &xmap, has_text, m)?;
    }
    if !has_text || deco.y_axis.ticks.is_some() {
        draw_left_axis(root, &chart, &deco.y_axis, &ymap, has_text, m)?;
    }

    // ----------------------------
    // 4) Data
    // ----------------------------
    let to_chart = |x: f64, y: f64| Some((xmap.to_coord(x)?, ymap.to_coord(y)?));
    let mut dropped = 0usize;

    for band in &fig.bands {
        let upper: Vec<(f64, f64)> = band
            .points
            .iter()
            .filter_map(|&(x, _, hi)| to_chart(x, hi))
            .collect();
        let lower: Vec<(f64, f64)> = band
            .points
            .iter()
            .filter_map(|&(x, lo, _)| to_chart(x, lo))
            .collect();
        dropped += 2 * band.points.len() - upper.len() - lower.len();
        // polygon: upper (forward) + lower (reverse)
        let poly: Vec<(f64, f64)> = upper.into_iter().chain(lower.into_iter().rev()).collect();
        chart
            .draw_series(std::iter::once(Polygon::new(
                poly,
                band.color.mix(BAND_ALPHA).filled(),
            )))
            .map_err(PlotError::render)?;
    }

    for series in &fig.bars {
        let fill = series.color.filled();
        let rects: Vec<Rectangle<(f64, f64)>> = series
            .bars
            .iter()
            .map(|bar| {
                let corners = bar_corners(bar, series.orientation, &xmap, &ymap, (x0, y0));
                Rectangle::new(corners, fill)
            })
            .collect();
        let anno = chart.draw_series(rects).map_err(PlotError::render)?;
        if let Some(label) = &series.label {
            let color = series.color;
            anno.label(label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
            });
        }
    }

    for trace in &fig.lines {
        let pts: Vec<(f64, f64)> = trace
            .points
            .iter()
            .filter_map(|&(x, y)| to_chart(x, y))
            .collect();
        dropped += trace.points.len() - pts.len();
        let color = trace.color;
        let width = pt_to_px(trace.line_width, px_per_pt);
        let stroke = color.stroke_width(width);
        let mut labeled = false;

        let line_anno = match trace.line_style {
            LineStyle::None => None,
            LineStyle::Solid => Some(chart.draw_series(LineSeries::new(pts.clone(), stroke))),
            dashed => {
                let (dash, gap) = dashed.dash_pattern().unwrap_or((8, 5));
                Some(chart.draw_series(DashedLineSeries::new(
                    pts.clone(),
                    dash.saturating_mul(width),
                    gap.saturating_mul(width),
                    stroke,
                )))
            }
        };
        if let Some(anno) = line_anno.transpose().map_err(PlotError::render)?
            && let Some(label) = &trace.label
        {
            anno.label(label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(width))
            });
            labeled = true;
        }

        let r = (pt_to_px(trace.marker_size, px_per_pt) as i32 / 2).max(1);
        let fill = color.filled();
        let marked: Vec<(f64, f64)> = pts
            .iter()
            .copied()
            .step_by(trace.mark_every.max(1))
            .collect();
        let marker_anno = match trace.marker {
            MarkerShape::None => None,
            MarkerShape::Circle => {
                Some(chart.draw_series(marked.iter().map(|&c| Circle::new(c, r, fill))))
            }
            MarkerShape::Square => Some(chart.draw_series(
                marked
                    .iter()
                    .map(|&c| EmptyElement::at(c) + Rectangle::new([(-r, -r), (r, r)], fill)),
            )),
            MarkerShape::Triangle => {
                Some(chart.draw_series(marked.iter().map(|&c| TriangleMarker::new(c, r, fill))))
            }
            MarkerShape::Diamond => Some(chart.draw_series(marked.iter().map(|&c| {
                EmptyElement::at(c) + Polygon::new(vec![(0, -r), (-r, 0), (0, r), (r, 0)], fill)
            }))),
            MarkerShape::Cross => Some(chart.draw_series(marked.iter().map(|&c| {
                EmptyElement::at(c)
                    + PathElement::new(vec![(-r, 0), (r, 0)], stroke)
                    + PathElement::new(vec![(0, -r), (0, r)], stroke)
            }))),
            MarkerShape::X => {
                Some(chart.draw_series(marked.iter().map(|&c| Cross::new(c, r, stroke))))
            }
        };
        if let Some(anno) = marker_anno.transpose().map_err(PlotError::render)?
            && !labeled
            && let Some(label) = &trace.label
        {
            anno.label(label.as_str())
                .legend(move |(x, y)| Circle::new((x + 6, y), 4, color.filled()));
        }
    }

    for eb in &fig.error_bars {
        let style = eb.color.stroke_width(m.stroke_px);
        let cap = (m.font_px as i32 / 3).max(2);
        let mut ends: Vec<((f64, f64), (f64, f64))> = Vec::with_capacity(eb.points.len());
        for &(x, y, e) in &eb.points {
            let (a, b) = match eb.orientation {
                Orientation::Vertical => ((x, y - e), (x, y + e)),
                Orientation::Horizontal => ((x - e, y), (x + e, y)),
            };
            match (to_chart(a.0, a.1), to_chart(b.0, b.1)) {
                (Some(a), Some(b)) => ends.push((a, b)),
                _ => dropped += 1,
            }
        }
        chart
            .draw_series(ends.iter().map(|&(a, b)| PathElement::new(vec![a, b], style)))
            .map_err(PlotError::render)?;
        let cap_shape = match eb.orientation {
            Orientation::Vertical => vec![(-cap, 0), (cap, 0)],
            Orientation::Horizontal => vec![(0, -cap), (0, cap)],
        };
        chart
            .draw_series(
                ends.iter()
                    .flat_map(|&(a, b)| [a, b])
                    .map(|p| EmptyElement::at(p) + PathElement::new(cap_shape.clone(), style)),
            )
            .map_err(PlotError::render)?;
    }

    if dropped > 0 {
        log::warn!("{dropped} values could not be shown on a logarithmic axis and were skipped");
    }

    // ----------------------------
    // 5) Legend
    // ----------------------------
    let any_label = fig.bars.iter().any(|s| s.label.is_some())
        || fig.lines.iter().any(|t| t.label.is_some());
    if has_text && any_label && let Some(location) = deco.legend {
        chart
            .configure_series_labels()
            .position(location.to_series_label_position())
            .border_style(TRANSPARENT)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, m.legend_px))
            .draw()
            .map_err(PlotError::render)?;
    }

    root.present().map_err(PlotError::render)?;
    Ok(())
}

/// Corners of one bar in chart coordinates. A value end that cannot be
/// mapped (zero base on a log axis) is clamped to the axis start.
fn bar_corners(
    bar: &Bar,
    orientation: Orientation,
    xmap: &AxisMap,
    ymap: &AxisMap,
    (x_start, y_start): (f64, f64),
) -> [(f64, f64); 2] {
    let (cat_map, cat_start, val_map, val_start) = match orientation {
        Orientation::Vertical => (xmap, x_start, ymap, y_start),
        Orientation::Horizontal => (ymap, y_start, xmap, x_start),
    };
    let c0 = cat_map.to_coord(bar.start).unwrap_or(cat_start);
    let c1 = cat_map.to_coord(bar.start + bar.width).unwrap_or(cat_start);
    let v0 = val_map.to_coord(bar.base).unwrap_or(val_start);
    let v1 = val_map.to_coord(bar.top()).unwrap_or(val_start);
    match orientation {
        Orientation::Vertical => [(c0, v0), (c1, v1)],
        Orientation::Horizontal => [(v0, c0), (v1, c1)],
    }
}

/// Width of the left label area: widest tick label plus room for the axis title.
fn left_gutter_px(
    axis: &Axis,
    range: (f64, f64),
    fmt: &dyn Fn(&f64) -> String,
    m: Metrics,
) -> u32 {
    let labels: Vec<String> = match &axis.ticks {
        Some(ticks) => ticks.iter().filter_map(|t| t.label.clone()).collect(),
        None => (0..=TICK_COUNT)
            .map(|i| fmt(&(range.0 + (range.1 - range.0) * i as f64 / TICK_COUNT as f64)))
            .collect(),
    };
    let widest = max_text_width_px(labels.iter().map(String::as_str), m.font_px);
    let desc = if axis.label.is_some() {
        m.font_px.saturating_mul(2)
    } else {
        0
    };
    widest.saturating_add(m.font_px).saturating_add(desc)
}

fn tick_style(m: Metrics, pos: Pos) -> TextStyle<'static> {
    TextStyle::from((FontFamily::SansSerif, m.font_px)).pos(pos)
}

/// Pixel position of each tick that can be mapped onto the axis.
fn tick_pixels<'t>(
    ticks: &'t [Tick],
    map: &AxisMap,
    to_px: impl Fn(f64) -> i32,
) -> Vec<(i32, &'t Tick)> {
    ticks
        .iter()
        .filter_map(|t| map.to_coord(t.position).map(|c| (to_px(c), t)))
        .collect()
}

/// Bottom axis drawn by hand: used for explicit ticks and for text-less output.
fn draw_bottom_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart<'_, DB>,
    axis: &Axis,
    map: &AxisMap,
    has_text: bool,
    m: Metrics,
) -> Result<()> {
    let (xr, yr) = chart.plotting_area().get_pixel_range();
    let y_axis = yr.end;
    let line = BLACK.stroke_width(m.stroke_px);
    root.draw(&PathElement::new(vec![(xr.start, y_axis), (xr.end, y_axis)], line))
        .map_err(PlotError::render)?;

    let y_any = chart.y_range().start;
    let ticks = tick_pixels(axis.ticks.as_deref().unwrap_or(&[]), map, |c| {
        chart.backend_coord(&(c, y_any)).0
    });
    let label_style = tick_style(m, Pos::new(HPos::Center, VPos::Top));
    for (px, tick) in ticks {
        root.draw(&PathElement::new(vec![(px, y_axis), (px, y_axis + m.tick_len)], line))
            .map_err(PlotError::render)?;
        if has_text && let Some(label) = &tick.label {
            let at = (px, y_axis + m.tick_len + 2);
            root.draw(&Text::new(label.clone(), at, label_style.clone()))
                .map_err(PlotError::render)?;
        }
    }
    if has_text && let Some(desc) = &axis.label {
        let x_mid = (xr.start + xr.end) / 2;
        let y_desc = y_axis + m.tick_len + 2 * m.font_px as i32;
        root.draw(&Text::new(desc.clone(), (x_mid, y_desc), label_style))
            .map_err(PlotError::render)?;
    }
    Ok(())
}

/// Left axis drawn by hand: used for explicit ticks and for text-less output.
fn draw_left_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart<'_, DB>,
    axis: &Axis,
    map: &AxisMap,
    has_text: bool,
    m: Metrics,
) -> Result<()> {
    let (xr, yr) = chart.plotting_area().get_pixel_range();
    let x_axis = xr.start;
    let line = BLACK.stroke_width(m.stroke_px);
    root.draw(&PathElement::new(vec![(x_axis, yr.start), (x_axis, yr.end)], line))
        .map_err(PlotError::render)?;

    let x_any = chart.x_range().start;
    let ticks = tick_pixels(axis.ticks.as_deref().unwrap_or(&[]), map, |c| {
        chart.backend_coord(&(x_any, c)).1
    });
    let label_style = tick_style(m, Pos::new(HPos::Right, VPos::Center));
    for (py, tick) in ticks {
        root.draw(&PathElement::new(vec![(x_axis - m.tick_len, py), (x_axis, py)], line))
            .map_err(PlotError::render)?;
        if has_text && let Some(label) = &tick.label {
            let at = (x_axis - m.tick_len - 2, py);
            root.draw(&Text::new(label.clone(), at, label_style.clone()))
                .map_err(PlotError::render)?;
        }
    }
    if has_text && let Some(desc) = &axis.label {
        let y_mid = (yr.start + yr.end) / 2;
        let desc_style = tick_style(m, Pos::new(HPos::Center, VPos::Top))
            .transform(FontTransform::Rotate270);
        root.draw(&Text::new(desc.clone(), (m.margin as i32, y_mid), desc_style))
            .map_err(PlotError::render)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(font_px: u32) -> Metrics {
        Metrics {
            font_px,
            legend_px: font_px,
            title_px: font_px,
            stroke_px: 1,
            tick_len: 3,
            margin: font_px,
        }
    }

    #[test]
    fn gutter_saturates_on_huge_fonts() {
        let axis = Axis {
            label: Some("value".into()),
            ..Axis::default()
        };
        let fmt = |v: &f64| format!("{v:.1}");
        assert_eq!(left_gutter_px(&axis, (0.0, 10.0), &fmt, metrics(u32::MAX)), u32::MAX);
        assert!(left_gutter_px(&axis, (0.0, 10.0), &fmt, metrics(10)) > 10);
    }

    #[test]
    fn text_sizes_are_capped_by_figure_height() {
        let mut fig = Figure::new();
        fig.decorations.fontsize = 1e9;
        fig.decorations.legend_fontsize = 1e9;
        let m = Metrics::new(&fig, 300.0 / 72.0, (1020, 450));
        assert_eq!(m.font_px, 112);
        assert_eq!(m.title_px, 112);
        assert_eq!(m.legend_px, 112);
    }

    #[cfg(unix)]
    #[test]
    fn finished_viewer_is_reaped() {
        let child = Command::new("true").spawn().unwrap();
        reap_in_background(child).join().unwrap();
    }
}
