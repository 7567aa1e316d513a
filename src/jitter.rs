//! Gaussian jitter for visual de-overlap of scatter points.
//!
//! Jitter is lossy: the sampled coordinates replace the originals.

use crate::error::{PlotError, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Which axes get noise, and how much. Decided once per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JitterPolicy {
    None,
    X(f64),
    Y(f64),
    Both { x: f64, y: f64 },
}

impl JitterPolicy {
    /// Build a policy from optional per-axis standard deviations.
    pub fn from_scales(x: Option<f64>, y: Option<f64>) -> Result<Self> {
        if let Some(scale) = x {
            check_scale('x', scale)?;
        }
        if let Some(scale) = y {
            check_scale('y', scale)?;
        }
        Ok(match (x, y) {
            (None, None) => JitterPolicy::None,
            (Some(x), None) => JitterPolicy::X(x),
            (None, Some(y)) => JitterPolicy::Y(y),
            (Some(x), Some(y)) => JitterPolicy::Both { x, y },
        })
    }

    /// Return the (possibly) jittered coordinates of one series.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        Ok(match *self {
            JitterPolicy::None => (xs.to_vec(), ys.to_vec()),
            JitterPolicy::X(sx) => (perturb(rng, xs, sx)?, ys.to_vec()),
            JitterPolicy::Y(sy) => (xs.to_vec(), perturb(rng, ys, sy)?),
            JitterPolicy::Both { x, y } => {
                let jx = perturb(rng, xs, x)?;
                let jy = perturb(rng, ys, y)?;
                (jx, jy)
            }
        })
    }
}

fn check_scale(axis: char, scale: f64) -> Result<()> {
    if scale.is_finite() && scale >= 0.0 {
        Ok(())
    } else {
        Err(PlotError::InvalidJitter { axis, scale })
    }
}

/// One independent draw from `Normal(v, std_dev)` per value.
fn perturb<R: Rng + ?Sized>(rng: &mut R, values: &[f64], std_dev: f64) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|&mean| {
            Normal::new(mean, std_dev)
                .map(|dist| dist.sample(rng))
                .map_err(|_| PlotError::InvalidParameter {
                    name: "jitter mean",
                    value: mean,
                })
        })
        .collect()
}
