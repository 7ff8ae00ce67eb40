//! Scalar to color sampling over ordered stops

use super::Rgb;
use super::named;
use crate::error::{Error, Result};

/// A color stop at a position in [0, 1], color held as unit floats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: [f64; 3],
}

impl ColorStop {
    pub fn new(position: f64, color: [f64; 3]) -> Self {
        Self { position, color }
    }
}

/// Continuous gradient `t in [0, 1] -> Rgb`, interpolated linearly between stops.
///
/// Positions increase strictly from 0.0 to 1.0. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    name: String,
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    pub fn new(name: impl Into<String>, stops: Vec<ColorStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::TooFewStops(stops.len()));
        }

        let first = stops[0].position;
        let last = stops[stops.len() - 1].position;
        if first != 0.0 || last != 1.0 {
            return Err(Error::InvalidStops(format!(
                "positions must span 0..1, got {}..{}",
                first, last
            )));
        }
        if stops.iter().any(|s| !s.position.is_finite()) {
            return Err(Error::InvalidStops("positions must be finite".to_string()));
        }
        if stops.windows(2).any(|w| w[1].position <= w[0].position) {
            return Err(Error::InvalidStops(
                "positions must be strictly increasing".to_string(),
            ));
        }
        if stops
            .iter()
            .flat_map(|s| s.color)
            .any(|c| !(0.0..=1.0).contains(&c))
        {
            return Err(Error::InvalidStops(
                "color components must lie in [0, 1]".to_string(),
            ));
        }

        Ok(Self {
            name: name.into(),
            stops,
        })
    }

    /// Build a ramp whose colors are spaced uniformly over [0, 1]
    pub fn evenly_spaced(name: impl Into<String>, colors: Vec<[f64; 3]>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(Error::TooFewStops(colors.len()));
        }
        let last = (colors.len() - 1) as f64;
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| ColorStop::new(i as f64 / last, color))
            .collect();
        Self::new(name, stops)
    }

    /// Look up a built-in ramp by name (case-insensitive)
    pub fn named(name: &str) -> Result<Self> {
        let key = name.trim().to_ascii_lowercase();
        let table = named::lookup(&key).ok_or_else(|| Error::UnknownRamp(name.to_string()))?;
        let colors = table
            .iter()
            .map(|&[r, g, b]| Rgb::new(r, g, b).to_unit())
            .collect();
        Self::evenly_spaced(key, colors)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Sample the ramp at `t`, clamped to [0, 1]
    pub fn sample(&self, t: f64) -> Rgb {
        Rgb::from_unit(self.sample_unit(t))
    }

    /// Unrounded sample, used when building derived ramps
    pub(crate) fn sample_unit(&self, t: f64) -> [f64; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        // First stop at or past t; the last stop sits at 1.0 so this is always in bounds
        let idx = self.stops.partition_point(|s| s.position < t);
        let hi = self.stops[idx];
        if idx == 0 || hi.position == t {
            return hi.color;
        }
        let lo = self.stops[idx - 1];

        let frac = (t - lo.position) / (hi.position - lo.position);
        let lerp = |i: usize| (lo.color[i] + (hi.color[i] - lo.color[i]) * frac).clamp(0.0, 1.0);
        [lerp(0), lerp(1), lerp(2)]
    }
}
