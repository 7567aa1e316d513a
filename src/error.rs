//! Error type shared by the plotting helpers and the rendering backends.

use thiserror::Error;

/// Everything that can go wrong while validating, drawing or saving a figure.
///
/// Validation variants are always raised before the backend sees a single
/// drawing call.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no data series")]
    EmptySeries,

    #[error("{attribute} has {found} entries, expected {expected}")]
    LengthMismatch {
        attribute: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("only series containing one category may be labeled (got {categories} categories)")]
    InvalidLabelUsage { categories: usize },

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("jitter scale for {axis} axis must be finite and non-negative, got {scale}")]
    InvalidJitter { axis: char, scale: f64 },

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid options: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("rendering failed: {0}")]
    Render(String),
}

impl PlotError {
    /// Helper for the common "one entry per series" check.
    pub(crate) fn check_len(
        attribute: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(PlotError::LengthMismatch {
                attribute,
                expected,
                found,
            })
        }
    }

    /// Wrap a backend error (plotters errors are only `Debug`).
    pub(crate) fn render<E: std::fmt::Debug>(e: E) -> PlotError {
        PlotError::Render(format!("{e:?}"))
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_len_reports_both_counts() {
        assert!(PlotError::check_len("series_colors", 2, 2).is_ok());
        let err = PlotError::check_len("series_colors", 2, 1).unwrap_err();
        assert_eq!(err.to_string(), "series_colors has 1 entries, expected 2");
    }
}
