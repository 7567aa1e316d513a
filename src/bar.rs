//! Grouped and stacked bar charts.

use crate::backend::RenderBackend;
use crate::config::BarChartOptions;
use crate::error::{PlotError, Result};
use crate::figure::{Axis, Bar, BarSeries, Decorations, ErrorBars, Figure, Tick};
use crate::layout::{BarLayout, LayoutParams};
use crate::style::Orientation;
use plotters::style::{Color, RGBAColor};

/// Plot a bar chart into a fresh [`Figure`].
///
/// `series[i][c]` is the value of series `i` in category `c`; every series
/// must have the same number of categories. See [`BarChartOptions`] for the
/// styling lists, which must each hold one entry per series.
///
/// ```
/// use ss_plot::{BarChartOptions, plot_bar_graph};
///
/// let opts = BarChartOptions {
///     series_colors: vec!["red".into(), "blue".into()],
///     ..Default::default()
/// };
/// let fig = plot_bar_graph(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], &opts)?;
/// assert_eq!(fig.bars.len(), 2);
/// assert_eq!(fig.decorations.x_axis.ticks.as_ref().map(Vec::len), Some(3));
/// # Ok::<(), ss_plot::PlotError>(())
/// ```
pub fn plot_bar_graph(series: &[Vec<f64>], opts: &BarChartOptions) -> Result<Figure> {
    let mut fig = Figure::new();
    plot_bar_graph_on(&mut fig, series, opts)?;
    Ok(fig)
}

/// Same as [`plot_bar_graph`] but draws on any backend and returns the layout.
pub fn plot_bar_graph_on<B: RenderBackend + ?Sized>(
    backend: &mut B,
    series: &[Vec<f64>],
    opts: &BarChartOptions,
) -> Result<BarLayout> {
    let styles = SeriesStyles::resolve(&*backend, series, opts)?;
    let num_series = series.len();
    let num_categories = series[0].len();
    let layout = BarLayout::new(num_series, num_categories, LayoutParams::from(opts));

    let orientation = if opts.horizontal {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    // running totals for stacked bars, split by sign
    let mut positive = vec![0.0f64; num_categories];
    let mut negative = vec![0.0f64; num_categories];

    for (idx, values) in series.iter().enumerate() {
        let bars: Vec<Bar> = values
            .iter()
            .enumerate()
            .map(|(c, &value)| {
                let base = if opts.stacked {
                    let total = if value >= 0.0 {
                        &mut positive[c]
                    } else {
                        &mut negative[c]
                    };
                    let base = *total;
                    *total += value;
                    base
                } else {
                    0.0
                };
                Bar {
                    start: layout.bar_start(c, idx),
                    width: opts.barwidth,
                    base,
                    value,
                }
            })
            .collect();

        let err_points: Option<Vec<(f64, f64, f64)>> = styles.errs[idx].as_ref().map(|errs| {
            bars.iter()
                .zip(errs)
                .map(|(bar, &err)| match orientation {
                    Orientation::Vertical => (bar.center(), bar.top(), err),
                    Orientation::Horizontal => (bar.top(), bar.center(), err),
                })
                .collect()
        });
        backend.draw_bars(BarSeries {
            label: styles.labels[idx].clone(),
            color: styles.colors[idx],
            orientation,
            bars,
        });
        if let Some(points) = err_points {
            backend.draw_error_bars(ErrorBars {
                color: styles.err_colors[idx],
                orientation,
                points,
            });
        }
    }

    let ticks = if opts.series_use_labels {
        labeled_ticks(layout.series_ticks(), opts.series_labels.as_deref())
    } else if opts.category_ticks {
        labeled_ticks(layout.category_ticks(), opts.category_labels.as_deref())
    } else {
        Vec::new()
    };
    let category_axis = Axis {
        limits: Some(layout.axis_limits()),
        ticks: Some(ticks),
        ..Axis::default()
    };
    let value_axis = Axis::default();
    let (mut x_axis, mut y_axis) = match orientation {
        Orientation::Vertical => (category_axis, value_axis),
        Orientation::Horizontal => (value_axis, category_axis),
    };
    x_axis.label = opts.plot_xlabel.clone();
    y_axis.label = opts.plot_ylabel.clone();
    y_axis.inverted = opts.plot_yinvert;

    backend.decorate(Decorations {
        title: opts.plot_title.clone(),
        x_axis,
        y_axis,
        legend: opts.legend_location,
        fontsize: opts.fontsize,
        legend_fontsize: opts.legend_fontsize,
        tick_locale: opts.tick_locale.clone(),
    });

    if let Some(path) = &opts.savefile {
        backend.save_figure(path, opts.savefile_size)?;
    }
    if opts.show_plot {
        backend.show()?;
    }
    Ok(layout)
}

fn labeled_ticks(positions: Vec<f64>, labels: Option<&[String]>) -> Vec<Tick> {
    positions
        .into_iter()
        .enumerate()
        .map(|(i, position)| Tick {
            position,
            label: labels.and_then(|l| l.get(i)).cloned(),
        })
        .collect()
}

/// Per-series styling, validated and with colors resolved.
struct SeriesStyles {
    colors: Vec<RGBAColor>,
    err_colors: Vec<RGBAColor>,
    labels: Vec<Option<String>>,
    errs: Vec<Option<Vec<f64>>>,
}

impl SeriesStyles {
    fn resolve<B: RenderBackend + ?Sized>(
        backend: &B,
        series: &[Vec<f64>],
        opts: &BarChartOptions,
    ) -> Result<Self> {
        if series.is_empty() {
            return Err(PlotError::EmptySeries);
        }
        let n = series.len();
        let m = series[0].len();

        PlotError::check_len("series_colors", n, opts.series_colors.len())?;
        if let Some(labels) = &opts.series_labels {
            PlotError::check_len("series_labels", n, labels.len())?;
        }
        if let Some(errs) = &opts.series_errs {
            PlotError::check_len("series_errs", n, errs.len())?;
        }
        if let Some(err_colors) = &opts.series_err_colors {
            PlotError::check_len("series_err_colors", n, err_colors.len())?;
        }
        if let Some(emphasis) = &opts.series_color_emphasis {
            PlotError::check_len("series_color_emphasis", n, emphasis.len())?;
        }
        if let Some(style) = &opts.series_style {
            PlotError::check_len("series_style", n, style.len())?;
        }
        for values in series {
            PlotError::check_len("series categories", m, values.len())?;
        }
        if let Some(errs) = &opts.series_errs {
            for e in errs.iter().flatten() {
                PlotError::check_len("series_errs entry", m, e.len())?;
            }
        }
        if let Some(labels) = &opts.category_labels {
            PlotError::check_len("category_labels", m, labels.len())?;
        }
        if opts.series_use_labels && m > 1 {
            return Err(PlotError::InvalidLabelUsage { categories: m });
        }
        for (name, value) in [
            ("barwidth", opts.barwidth),
            ("series_padding", opts.series_padding),
            ("category_padding", opts.category_padding),
            ("xpadding", opts.xpadding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidParameter { name, value });
            }
        }
        for (name, value) in [
            ("fontsize", opts.fontsize),
            ("legend_fontsize", opts.legend_fontsize),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidParameter { name, value });
            }
        }

        let mut colors = Vec::with_capacity(n);
        let mut err_colors = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);
        for idx in 0..n {
            let emphasis = opts
                .series_color_emphasis
                .as_ref()
                .is_some_and(|e| e[idx]);
            let style = opts.series_style.as_ref().map(|s| &s[idx]);
            let color_name = style
                .and_then(|s| s.color.as_deref())
                .unwrap_or(&opts.series_colors[idx]);
            let mut color = backend.resolve_color(color_name, emphasis)?;
            if let Some(alpha) = style.and_then(|s| s.alpha) {
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(PlotError::InvalidParameter {
                        name: "series_style alpha",
                        value: alpha,
                    });
                }
                color = color.mix(alpha);
            }
            colors.push(color);

            let err_name = opts
                .series_err_colors
                .as_ref()
                .map_or("black", |c| c[idx].as_str());
            err_colors.push(backend.resolve_color(err_name, false)?);

            let label = style
                .and_then(|s| s.label.clone())
                .or_else(|| opts.series_labels.as_ref().map(|l| l[idx].clone()))
                .filter(|l| !l.is_empty());
            labels.push(label);
        }
        let errs = opts
            .series_errs
            .clone()
            .unwrap_or_else(|| vec![None; n]);

        Ok(Self {
            colors,
            err_colors,
            labels,
            errs,
        })
    }
}
