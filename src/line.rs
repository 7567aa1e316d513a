//! x-y line and scatter plots with optional jitter and error shading.

use crate::backend::RenderBackend;
use crate::config::LineChartOptions;
use crate::error::{PlotError, Result};
use crate::figure::{Axis, Decorations, ErrorBand, ErrorBars, Figure, LineTrace};
use crate::jitter::JitterPolicy;
use crate::style::{LineStyle, MarkerShape, Orientation};
use plotters::style::{Color, RGBAColor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Plot every `(xs, ys)` pair in `series` as one trace into a fresh [`Figure`].
///
/// ```
/// use ss_plot::{LineChartOptions, plot_lines};
///
/// let opts = LineChartOptions {
///     series_colors: vec!["green".into()],
///     series_errs: Some(vec![Some(vec![0.1, 0.2, 0.1])]),
///     ..Default::default()
/// };
/// let fig = plot_lines(&[(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 3.0])], &opts)?;
/// assert_eq!(fig.lines.len(), 1);
/// assert_eq!(fig.bands.len(), 1);
/// # Ok::<(), ss_plot::PlotError>(())
/// ```
pub fn plot_lines(series: &[(Vec<f64>, Vec<f64>)], opts: &LineChartOptions) -> Result<Figure> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut fig = Figure::new();
    plot_lines_on(&mut fig, &mut rng, series, opts)?;
    Ok(fig)
}

/// Same as [`plot_lines`] but with an explicit backend and jitter RNG.
///
/// `opts.seed` is ignored here; the caller owns the RNG.
pub fn plot_lines_on<B, R>(
    backend: &mut B,
    rng: &mut R,
    series: &[(Vec<f64>, Vec<f64>)],
    opts: &LineChartOptions,
) -> Result<()>
where
    B: RenderBackend + ?Sized,
    R: Rng + ?Sized,
{
    let styles = TraceStyles::resolve(&*backend, series, opts)?;
    let jitter = JitterPolicy::from_scales(opts.jitter_x, opts.jitter_y)?;
    log::debug!("plotting {} series with jitter {:?}", series.len(), jitter);

    for (idx, (xs, ys)) in series.iter().enumerate() {
        let (xs, ys) = jitter.apply(rng, xs, ys)?;

        backend.draw_line(LineTrace {
            label: styles.labels[idx].clone(),
            color: styles.colors[idx],
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            marker: styles.markers[idx],
            line_style: styles.line_styles[idx],
            line_width: opts.linewidth,
            marker_size: opts.marker_size,
            mark_every: opts.mark_every,
        });

        let Some(errs) = &styles.errs[idx] else {
            continue;
        };
        let shade = styles.err_colors[idx];
        if opts.fill_error {
            backend.shade_band(ErrorBand {
                color: shade,
                points: xs
                    .iter()
                    .zip(&ys)
                    .zip(errs)
                    .map(|((&x, &y), &e)| (x, y - e, y + e))
                    .collect(),
            });
        } else {
            backend.draw_error_bars(ErrorBars {
                color: shade,
                orientation: Orientation::Vertical,
                points: xs
                    .iter()
                    .zip(&ys)
                    .zip(errs)
                    .map(|((&x, &y), &e)| (x, y, e))
                    .collect(),
            });
        }
    }

    backend.decorate(Decorations {
        title: opts.plot_title.clone(),
        x_axis: Axis {
            label: opts.plot_xlabel.clone(),
            limits: opts.plot_xlim,
            scale: opts.x_scale,
            ..Axis::default()
        },
        y_axis: Axis {
            label: opts.plot_ylabel.clone(),
            limits: opts.plot_ylim,
            scale: opts.y_scale,
            ..Axis::default()
        },
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
    Ok(())
}

struct TraceStyles {
    colors: Vec<RGBAColor>,
    err_colors: Vec<RGBAColor>,
    labels: Vec<Option<String>>,
    errs: Vec<Option<Vec<f64>>>,
    markers: Vec<MarkerShape>,
    line_styles: Vec<LineStyle>,
}

impl TraceStyles {
    fn resolve<B: RenderBackend + ?Sized>(
        backend: &B,
        series: &[(Vec<f64>, Vec<f64>)],
        opts: &LineChartOptions,
    ) -> Result<Self> {
        if series.is_empty() {
            return Err(PlotError::EmptySeries);
        }
        let n = series.len();

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
        if let Some(markers) = &opts.plot_markers {
            PlotError::check_len("plot_markers", n, markers.len())?;
        }
        if let Some(line_styles) = &opts.line_styles {
            PlotError::check_len("line_styles", n, line_styles.len())?;
        }
        for (idx, (xs, ys)) in series.iter().enumerate() {
            PlotError::check_len("series y values", xs.len(), ys.len())?;
            if let Some(Some(errs)) = opts.series_errs.as_ref().map(|e| &e[idx]) {
                PlotError::check_len("series_errs entry", xs.len(), errs.len())?;
            }
        }
        if !(0.0..=1.0).contains(&opts.jitter_alpha) {
            return Err(PlotError::InvalidParameter {
                name: "jitter_alpha",
                value: opts.jitter_alpha,
            });
        }
        for (name, value) in [
            ("linewidth", opts.linewidth),
            ("marker_size", opts.marker_size),
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
        if opts.mark_every == 0 {
            return Err(PlotError::InvalidParameter {
                name: "mark_every",
                value: 0.0,
            });
        }

        let mut colors = Vec::with_capacity(n);
        let mut err_colors = Vec::with_capacity(n);
        for idx in 0..n {
            let emphasis = opts
                .series_color_emphasis
                .as_ref()
                .is_some_and(|e| e[idx]);
            let color = backend.resolve_color(&opts.series_colors[idx], emphasis)?;
            colors.push(color.mix(opts.jitter_alpha));
            let err_name = opts
                .series_err_colors
                .as_ref()
                .map_or("black", |c| c[idx].as_str());
            err_colors.push(backend.resolve_color(err_name, false)?);
        }

        Ok(Self {
            colors,
            err_colors,
            labels: match &opts.series_labels {
                Some(labels) => labels
                    .iter()
                    .map(|l| Some(l.clone()).filter(|l| !l.is_empty()))
                    .collect(),
                None => vec![None; n],
            },
            errs: opts.series_errs.clone().unwrap_or_else(|| vec![None; n]),
            markers: opts
                .plot_markers
                .clone()
                .unwrap_or_else(|| vec![MarkerShape::None; n]),
            line_styles: opts
                .line_styles
                .clone()
                .unwrap_or_else(|| vec![LineStyle::Solid; n]),
        })
    }
}
