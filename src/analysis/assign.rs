//! Entity-to-color mapping through a fitted normalizer and a color ramp

use std::collections::BTreeMap;

use super::{Entity, NormalizationContext, Normalizer};
use crate::color::{ColorRamp, Rgb, truncate};
use crate::config::RampConfig;
use crate::error::{Error, Result};

/// Anything a renderer can ask for a per-key color
pub trait ColorSource {
    fn color_for(&self, key: &str) -> Rgb;

    /// Aggregated value behind `key`, if it was part of the fitted set
    fn value_for(&self, key: &str) -> Option<f64>;
}

/// Immutable key -> color snapshot built from one entity set and one ramp.
///
/// Keys outside the fitted set are colored as if their value were 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapping {
    ramp_name: String,
    context: NormalizationContext,
    values: BTreeMap<String, f64>,
    colors: BTreeMap<String, Rgb>,
    fallback: Rgb,
}

impl ColorMapping {
    pub fn ramp_name(&self) -> &str {
        &self.ramp_name
    }

    pub fn context(&self) -> NormalizationContext {
        self.context
    }

    /// Color used for keys absent from the fitted set
    pub fn fallback(&self) -> Rgb {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Key/color pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.colors.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

impl ColorSource for ColorMapping {
    fn color_for(&self, key: &str) -> Rgb {
        self.colors.get(key).copied().unwrap_or(self.fallback)
    }

    fn value_for(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// Builds `ColorMapping`s from aggregated entities
pub struct ColorAssigner;

impl ColorAssigner {
    /// Fit a normalizer over every entity value, then sample `ramp` at each
    /// entity's normalized position.
    pub fn build(entities: &[Entity], ramp: &ColorRamp) -> Result<ColorMapping> {
        if entities.is_empty() {
            return Err(Error::empty("entities"));
        }
        let values: Vec<f64> = entities.iter().map(|e| e.value).collect();
        let context = Normalizer::fit(&values)?;

        let mut value_map = BTreeMap::new();
        let mut colors = BTreeMap::new();
        for entity in entities {
            value_map.insert(entity.key.clone(), entity.value);
            colors.insert(entity.key.clone(), ramp.sample(context.apply(entity.value)));
        }

        tracing::debug!(
            entities = colors.len(),
            ramp = ramp.name(),
            min = context.min,
            max = context.max,
            "built color mapping"
        );

        Ok(ColorMapping {
            ramp_name: ramp.name().to_string(),
            context,
            values: value_map,
            colors,
            fallback: ramp.sample(context.apply(0.0)),
        })
    }
}

/// Resolve the configured base ramp, truncate it and build the mapping
pub fn build_color_mapping(entities: &[Entity], config: &RampConfig) -> Result<ColorMapping> {
    let base = ColorRamp::named(&config.base_ramp_name)?;
    let ramp = truncate(&base, config.minval, config.maxval, config.resolution)?;
    ColorAssigner::build(entities, &ramp)
}
