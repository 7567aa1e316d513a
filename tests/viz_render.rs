use ss_plot::{
    AxisScale, BarChartOptions, FigureSize, LegendLocation, LineChartOptions, LineStyle,
    MarkerShape, plot_bar_graph, plot_lines,
};
use std::fs;
use std::path::{Path, PathBuf};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_written(path: &Path) {
    let meta = fs::metadata(path).expect("file created");
    assert!(meta.len() > 0, "{} has content", path.display());
}

fn bar_options() -> BarChartOptions {
    BarChartOptions {
        series_colors: vec!["red".into(), "blue".into()],
        series_labels: Some(vec!["control".into(), "treatment".into()]),
        series_errs: Some(vec![Some(vec![0.2, 0.3, 0.1]), None]),
        category_labels: Some(vec!["a".into(), "b".into(), "c".into()]),
        plot_xlabel: Some("condition".into()),
        plot_ylabel: Some("score".into()),
        plot_title: Some("Scores".into()),
        ..Default::default()
    }
}

fn line_series() -> Vec<(Vec<f64>, Vec<f64>)> {
    vec![
        (vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 10.0, 100.0, 1000.0]),
        (vec![1.0, 2.0, 3.0, 4.0], vec![2.0, 20.0, 50.0, 3000.0]),
    ]
}

#[test]
fn bar_charts_render_to_svg_and_png() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let series = [vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];

    let variants = [
        ("grouped", bar_options()),
        (
            "stacked",
            BarChartOptions {
                stacked: true,
                legend_location: Some(LegendLocation::UpperLeft),
                ..bar_options()
            },
        ),
        (
            "horizontal",
            BarChartOptions {
                horizontal: true,
                legend_location: None,
                ..bar_options()
            },
        ),
        (
            "inverted",
            BarChartOptions {
                plot_yinvert: true,
                category_ticks: false,
                ..bar_options()
            },
        ),
    ];
    for (name, opts) in variants {
        let fig = plot_bar_graph(&series, &opts).unwrap();
        for ext in ["svg", "png"] {
            let path: PathBuf = dir.path().join(format!("{name}.{ext}"));
            fig.save(&path, FigureSize::default()).unwrap();
            assert_written(&path);
        }
    }
}

#[test]
fn savefile_option_writes_the_figure() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.svg");
    let opts = BarChartOptions {
        series_colors: vec!["green".into(), "purple".into()],
        series_labels: Some(vec!["before".into(), "after".into()]),
        series_use_labels: true,
        savefile: Some(path.clone()),
        savefile_size: FigureSize::new(2.0, 2.0),
        ..Default::default()
    };
    plot_bar_graph(&[vec![3.0], vec![4.5]], &opts).unwrap();
    assert_written(&path);
}

#[test]
fn line_charts_render_with_bands_and_bars() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let errs = Some(vec![Some(vec![0.5, 1.0, 5.0, 50.0]), None]);

    let variants = [
        (
            "band",
            LineChartOptions {
                series_colors: vec!["blue".into(), "orange".into()],
                series_labels: Some(vec!["a".into(), "b".into()]),
                series_errs: errs.clone(),
                ..Default::default()
            },
        ),
        (
            "error_bars",
            LineChartOptions {
                series_colors: vec!["blue".into(), "orange".into()],
                series_errs: errs.clone(),
                fill_error: false,
                plot_markers: Some(vec![MarkerShape::Circle, MarkerShape::Diamond]),
                line_styles: Some(vec![LineStyle::None, LineStyle::Dotted]),
                ..Default::default()
            },
        ),
        (
            "log",
            LineChartOptions {
                series_colors: vec!["blue".into(), "orange".into()],
                series_errs: errs,
                y_scale: AxisScale::Log,
                plot_markers: Some(vec![MarkerShape::Triangle, MarkerShape::X]),
                line_styles: Some(vec![LineStyle::Dashed, LineStyle::DashDot]),
                tick_locale: "de".into(),
                ..Default::default()
            },
        ),
        (
            "jitter",
            LineChartOptions {
                series_colors: vec!["blue".into(), "orange".into()],
                jitter_x: Some(0.05),
                jitter_alpha: 0.5,
                seed: Some(3),
                plot_markers: Some(vec![MarkerShape::Square, MarkerShape::Cross]),
                line_styles: Some(vec![LineStyle::None, LineStyle::None]),
                mark_every: 2,
                plot_xlim: Some((0.0, 5.0)),
                ..Default::default()
            },
        ),
    ];
    for (name, opts) in variants {
        let fig = plot_lines(&line_series(), &opts).unwrap();
        for ext in ["svg", "png"] {
            let path = dir.path().join(format!("lines_{name}.{ext}"));
            fig.save(&path, FigureSize::default()).unwrap();
            assert_written(&path);
        }
    }
}

#[test]
fn log_axis_skips_non_positive_values() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log_with_zero.svg");
    let opts = LineChartOptions {
        series_colors: vec!["red".into()],
        x_scale: AxisScale::Log,
        savefile: Some(path.clone()),
        ..Default::default()
    };
    plot_lines(&[(vec![0.0, 1.0, 10.0], vec![1.0, 2.0, 3.0])], &opts).unwrap();
    assert_written(&path);
}

#[test]
fn oversized_fonts_still_render() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let opts = BarChartOptions {
        fontsize: 1e9,
        legend_fontsize: 1e9,
        ..bar_options()
    };
    let fig = plot_bar_graph(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], &opts).unwrap();
    for ext in ["svg", "png"] {
        let path = dir.path().join(format!("huge_font.{ext}"));
        fig.save(&path, FigureSize::default()).unwrap();
        assert_written(&path);
    }
}
