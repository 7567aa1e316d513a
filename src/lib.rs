//! ss_plot
//!
//! Two plotting helpers on top of plotters:
//!
//! - [`plot_bar_graph`]: grouped or stacked bar charts, vertical or horizontal,
//!   with per-series colors, emphasis, error bars and category/series ticks
//! - [`plot_lines`]: x-y traces with optional Gaussian jitter, shaded error
//!   bands or error bars, markers, line styles and linear/log axes
//!
//! Both validate every per-series list up front, then draw onto a
//! [`RenderBackend`]. The default backend, [`Figure`], records the drawing and
//! renders it to SVG/PNG on [`Figure::save`] or opens it with [`Figure::show`].
//!
//! ### Example
//! ```no_run
//! use ss_plot::{BarChartOptions, FigureSize, LineChartOptions, plot_bar_graph, plot_lines};
//!
//! let bars = BarChartOptions {
//!     series_colors: vec!["red".into(), "blue".into()],
//!     series_labels: Some(vec!["control".into(), "treatment".into()]),
//!     category_labels: Some(vec!["a".into(), "b".into(), "c".into()]),
//!     ..Default::default()
//! };
//! let fig = plot_bar_graph(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], &bars)?;
//! fig.save("bars.svg", FigureSize::new(3.4, 1.5))?;
//!
//! let lines = LineChartOptions {
//!     series_colors: vec!["green".into()],
//!     jitter_x: Some(0.05),
//!     seed: Some(7),
//!     savefile: Some("lines.png".into()),
//!     ..Default::default()
//! };
//! plot_lines(&[(vec![1.0, 1.0, 2.0, 2.0], vec![0.5, 0.6, 0.9, 1.1])], &lines)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod backend;
pub mod bar;
pub mod colors;
pub mod config;
pub mod error;
pub mod figure;
pub mod jitter;
pub mod layout;
pub mod line;
pub mod style;
pub mod viz;

pub use backend::RenderBackend;
pub use bar::{plot_bar_graph, plot_bar_graph_on};
pub use config::{BarChartOptions, BarStyle, FigureSize, LineChartOptions};
pub use error::PlotError;
pub use figure::Figure;
pub use jitter::JitterPolicy;
pub use layout::{BarLayout, LayoutParams};
pub use line::{plot_lines, plot_lines_on};
pub use style::{AxisScale, LegendLocation, LineStyle, MarkerShape, Orientation};
