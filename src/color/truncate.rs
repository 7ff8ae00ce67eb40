//! Restrict a ramp to a sub-interval of its domain

use super::ColorRamp;
use crate::error::{Error, Result};

/// Build a new ramp from `source` restricted to `[minval, maxval]`.
///
/// The source is sampled at `resolution` evenly spaced points across the
/// interval and the samples become the stops of a fresh [0, 1] ramp, so
/// `result.sample(0.0) == source.sample(minval)` and
/// `result.sample(1.0) == source.sample(maxval)`.
pub fn truncate(
    source: &ColorRamp,
    minval: f64,
    maxval: f64,
    resolution: usize,
) -> Result<ColorRamp> {
    let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
    if !in_unit(minval) || !in_unit(maxval) || minval >= maxval || resolution < 2 {
        return Err(Error::InvalidRange {
            minval,
            maxval,
            resolution,
        });
    }

    let step = (maxval - minval) / (resolution - 1) as f64;
    let colors = (0..resolution)
        .map(|i| {
            // Pin the last point to maxval so accumulated error cannot undershoot it
            let t = if i == resolution - 1 {
                maxval
            } else {
                minval + step * i as f64
            };
            source.sample_unit(t)
        })
        .collect();

    let name = format!("trunc({},{:.2},{:.2})", source.name(), minval, maxval);
    tracing::debug!(ramp = %name, resolution, "truncated color ramp");
    ColorRamp::evenly_spaced(name, colors)
}
