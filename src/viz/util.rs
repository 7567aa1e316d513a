//! Axis coordinate mapping and tick label formatting.

use crate::figure::Axis;
use crate::style::AxisScale;
use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format a tick value: precision shrinks as magnitude grows, thousands are grouped.
pub fn format_tick(v: f64, locale: &Locale, dec_sep: char) -> String {
    let a = v.abs();
    if a >= 1000.0 {
        return (v.round() as i64).to_formatted_string(locale);
    }
    let prec = if a >= 100.0 || a == 0.0 {
        0
    } else if a >= 10.0 {
        1
    } else if a >= 0.01 {
        2
    } else {
        // tiny values only show up on log axes
        return format!("{v:.0e}");
    };
    let s = format!("{:.*}", prec, v);
    if dec_sep == '.' {
        s
    } else {
        s.replace('.', &dec_sep.to_string())
    }
}

/// Data value <-> chart coordinate mapping of one axis.
///
/// Log axes plot `log10(v)`, inverted axes plot `-v`; plotters then only
/// ever sees a plain linear range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMap {
    pub scale: AxisScale,
    pub inverted: bool,
}

impl AxisMap {
    pub fn for_axis(axis: &Axis) -> Self {
        Self {
            scale: axis.scale,
            inverted: axis.inverted,
        }
    }

    /// `None` when the value cannot be shown (non-positive on a log axis).
    pub fn to_coord(&self, v: f64) -> Option<f64> {
        let c = match self.scale {
            AxisScale::Linear => v,
            AxisScale::Log if v > 0.0 => v.log10(),
            AxisScale::Log => return None,
        };
        c.is_finite()
            .then_some(if self.inverted { -c } else { c })
    }

    pub fn from_coord(&self, c: f64) -> f64 {
        let c = if self.inverted { -c } else { c };
        match self.scale {
            AxisScale::Linear => c,
            AxisScale::Log => 10f64.powf(c),
        }
    }

    /// Chart range for this axis: explicit limits when usable, else the data
    /// extent with 5% headroom on both ends.
    pub fn range(&self, limits: Option<(f64, f64)>, data: &[f64]) -> (f64, f64) {
        if let Some((lo, hi)) = limits
            && let (Some(a), Some(b)) = (self.to_coord(lo), self.to_coord(hi))
            && a != b
        {
            return (a.min(b), a.max(b));
        }
        let coords = data.iter().filter_map(|&v| self.to_coord(v));
        let (lo, hi) = coords.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c), hi.max(c))
        });
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        if (hi - lo).abs() < f64::EPSILON {
            return (lo - 1.0, hi + 1.0);
        }
        let pad = 0.05 * (hi - lo);
        (lo - pad, hi + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_grouping() {
        let (en_locale, dot) = map_locale("en");
        let (de_locale, comma) = map_locale("DE");
        assert_eq!(format_tick(30000.0, en_locale, dot), "30,000");
        assert_eq!(format_tick(30000.0, de_locale, comma), "30.000");
        assert_eq!(format_tick(2.5, de_locale, comma), "2,50");
        assert_eq!(format_tick(12.34, en_locale, dot), "12.3");
        assert_eq!(format_tick(0.0, en_locale, dot), "0");
    }

    #[test]
    fn log_axis_drops_non_positive() {
        let map = AxisMap {
            scale: AxisScale::Log,
            inverted: false,
        };
        assert!((map.to_coord(100.0).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(map.to_coord(0.0), None);
        assert_eq!(map.to_coord(-3.0), None);
        assert!((map.from_coord(3.0) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_axis_round_trips() {
        let map = AxisMap {
            scale: AxisScale::Linear,
            inverted: true,
        };
        assert_eq!(map.to_coord(4.0), Some(-4.0));
        assert_eq!(map.from_coord(-4.0), 4.0);
        assert_eq!(map.range(Some((0.0, 10.0)), &[]), (-10.0, 0.0));
    }

    #[test]
    fn range_pads_data_and_handles_flat_data() {
        let map = AxisMap {
            scale: AxisScale::Linear,
            inverted: false,
        };
        assert_eq!(map.range(None, &[0.0, 10.0]), (-0.5, 10.5));
        assert_eq!(map.range(None, &[3.0, 3.0]), (2.0, 4.0));
        assert_eq!(map.range(None, &[]), (0.0, 1.0));
        // unusable limits fall back to the data
        assert_eq!(map.range(Some((1.0, 1.0)), &[0.0, 10.0]), (-0.5, 10.5));
    }
}
