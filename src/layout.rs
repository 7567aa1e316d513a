//! Bar layout: where every bar of every category lands on the category axis.
//!
//! Categories are laid out left to right. Within a category, grouped series sit
//! side by side (`barwidth + series_padding` apart); stacked series share one
//! slot. Every bar spans `[start, start + barwidth]`.

use crate::config::BarChartOptions;

/// Scalars that drive the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub barwidth: f64,
    pub series_padding: f64,
    /// Fraction of `barwidth` left empty between categories.
    pub category_padding: f64,
    pub xpadding: f64,
    pub stacked: bool,
}

impl From<&BarChartOptions> for LayoutParams {
    fn from(opts: &BarChartOptions) -> Self {
        Self {
            barwidth: opts.barwidth,
            series_padding: opts.series_padding,
            category_padding: opts.category_padding,
            xpadding: opts.xpadding,
            stacked: opts.stacked,
        }
    }
}

/// Computed positions for `num_series` series of `num_categories` values each.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub num_series: usize,
    pub num_categories: usize,
    pub params: LayoutParams,
    /// Empty space between neighbouring categories.
    pub spacing: f64,
    /// Distance from one category's base index to the next.
    pub category_width: f64,
}

impl BarLayout {
    pub fn new(num_series: usize, num_categories: usize, params: LayoutParams) -> Self {
        let spacing = params.category_padding * params.barwidth;
        let category_width = if params.stacked {
            spacing + params.barwidth
        } else {
            spacing + num_series as f64 * params.barwidth
        };
        log::debug!(
            "bar layout: {num_series} series x {num_categories} categories, spacing={spacing}, category_width={category_width}"
        );
        Self {
            num_series,
            num_categories,
            params,
            spacing,
            category_width,
        }
    }

    /// Position of the first bar slot of category `c`.
    pub fn category_index(&self, c: usize) -> f64 {
        c as f64 * self.category_width + self.params.xpadding
    }

    /// Offset of series `i` within its category.
    pub fn series_offset(&self, i: usize) -> f64 {
        if self.params.stacked {
            0.0
        } else {
            i as f64 * (self.params.barwidth + self.params.series_padding)
        }
    }

    /// Left (or bottom, for horizontal charts) edge of one bar.
    pub fn bar_start(&self, category: usize, series: usize) -> f64 {
        self.category_index(category) + self.series_offset(series)
    }

    /// Extent of category `c`'s bar group, first bar start to last bar end.
    pub fn group_span(&self, c: usize) -> (f64, f64) {
        let start = self.category_index(c);
        let last = if self.params.stacked {
            0
        } else {
            self.num_series.saturating_sub(1)
        };
        (start, self.bar_start(c, last) + self.params.barwidth)
    }

    /// One tick per category, at the midpoint of its bar group.
    pub fn category_ticks(&self) -> Vec<f64> {
        (0..self.num_categories)
            .map(|c| {
                let (lo, hi) = self.group_span(c);
                0.5 * (lo + hi)
            })
            .collect()
    }

    /// One tick per series, centered on its bar in a single-category chart.
    pub fn series_ticks(&self) -> Vec<f64> {
        (0..self.num_series)
            .map(|i| {
                self.params.xpadding
                    + i as f64 * (self.params.barwidth + self.params.series_padding)
                    + 0.5 * self.params.barwidth
            })
            .collect()
    }

    /// Limits of the category axis.
    pub fn axis_limits(&self) -> (f64, f64) {
        let n = self.num_series as f64;
        let m = self.num_categories as f64;
        let upper = 2.0 * self.params.xpadding
            + m * (self.category_width + (n - 1.0) * self.params.series_padding)
            - self.spacing;
        (0.0, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn params(stacked: bool) -> LayoutParams {
        LayoutParams {
            barwidth: 0.35,
            series_padding: 0.0,
            category_padding: 0.25,
            xpadding: 0.0,
            stacked,
        }
    }

    #[test]
    fn two_series_three_categories() {
        let layout = BarLayout::new(2, 3, params(false));
        assert!((layout.spacing - 0.0875).abs() < EPS);
        assert!((layout.category_width - 0.7875).abs() < EPS);
        assert!(layout.category_index(0).abs() < EPS);
        assert!((layout.category_index(1) - 0.7875).abs() < EPS);
        assert!((layout.bar_start(1, 1) - (0.7875 + 0.35)).abs() < EPS);
    }

    #[test]
    fn grouped_width_scales_with_series_count() {
        for n in 1..6 {
            let layout = BarLayout::new(n, 4, params(false));
            let expected = 0.25 * 0.35 + n as f64 * 0.35;
            assert!((layout.category_width - expected).abs() < EPS);
        }
    }

    #[test]
    fn stacked_width_ignores_series_count() {
        for n in 1..6 {
            let layout = BarLayout::new(n, 4, params(true));
            assert!((layout.category_width - (0.25 * 0.35 + 0.35)).abs() < EPS);
            assert!(layout.series_offset(n - 1).abs() < EPS);
        }
    }

    #[test]
    fn ticks_sit_at_group_midpoints() {
        let layout = BarLayout::new(3, 5, params(false));
        let ticks = layout.category_ticks();
        assert_eq!(ticks.len(), 5);
        for (c, t) in ticks.iter().enumerate() {
            let lo = layout.bar_start(c, 0);
            let hi = layout.bar_start(c, 2) + 0.35;
            assert!((t - 0.5 * (lo + hi)).abs() < EPS);
            // without series padding this is also base + N/2 * barwidth
            assert!((t - (layout.category_index(c) + 1.5 * 0.35)).abs() < EPS);
        }
    }

    #[test]
    fn padded_ticks_stay_centered_on_the_group() {
        let mut p = params(false);
        p.series_padding = 0.1;
        let layout = BarLayout::new(3, 4, p);
        for (c, t) in layout.category_ticks().iter().enumerate() {
            let first_start = layout.bar_start(c, 0);
            let last_end = layout.bar_start(c, 2) + 0.35;
            assert!((last_end - first_start - (3.0 * 0.35 + 2.0 * 0.1)).abs() < EPS);
            assert!((t - 0.5 * (first_start + last_end)).abs() < EPS);
            // base + N/2 * barwidth would sit left of center here
            assert!((t - (layout.category_index(c) + 1.5 * 0.35)).abs() > 0.05);
        }
    }

    #[test]
    fn stacked_ticks_are_centered_on_the_bar() {
        let layout = BarLayout::new(4, 2, params(true));
        let ticks = layout.category_ticks();
        assert!((ticks[1] - (layout.category_index(1) + 0.175)).abs() < EPS);
    }

    #[test]
    fn series_ticks_follow_padding() {
        let mut p = params(false);
        p.series_padding = 0.1;
        p.xpadding = 0.2;
        let layout = BarLayout::new(3, 1, p);
        let ticks = layout.series_ticks();
        assert_eq!(ticks.len(), 3);
        assert!((ticks[2] - (0.2 + 2.0 * 0.45 + 0.175)).abs() < EPS);
    }

    #[test]
    fn axis_limits_cover_padding() {
        let mut p = params(false);
        p.xpadding = 0.5;
        p.series_padding = 0.05;
        let layout = BarLayout::new(2, 3, p);
        let (lo, hi) = layout.axis_limits();
        assert_eq!(lo, 0.0);
        let expected = 1.0 + 3.0 * (0.7875 + 0.05) - 0.0875;
        assert!((hi - expected).abs() < EPS);
    }
}
