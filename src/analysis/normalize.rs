//! Min/max normalization into [0, 1]

use crate::error::{Error, Result};

/// Observed bounds of a value set; `min <= max` always holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationContext {
    pub min: f64,
    pub max: f64,
}

impl NormalizationContext {
    /// Rescale `value` into [0, 1].
    ///
    /// When every observed value was identical (`min == max`) this returns
    /// 0.0 for any input instead of dividing by zero.
    pub fn apply(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }
        let t = (value - self.min) / range;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

/// Fits a `NormalizationContext` over a value set
pub struct Normalizer;

impl Normalizer {
    /// Fit bounds over the finite values in `values`
    pub fn fit(values: &[f64]) -> Result<NormalizationContext> {
        let mut finite = values.iter().copied().filter(|v| v.is_finite());
        let first = finite.next().ok_or_else(|| Error::empty("value"))?;
        let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let context = NormalizationContext { min, max };
        if context.is_degenerate() {
            tracing::debug!(value = min, "all values identical, normalizing to 0.0");
        }
        Ok(context)
    }
}
