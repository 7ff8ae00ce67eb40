//! Aggregation, normalization and per-entity color assignment

mod aggregate;
mod assign;
mod normalize;

pub use aggregate::{
    Aggregator, CategoricalMeanAggregator, Entity, TokenFrequencyAggregator, most_common, top_n,
};
pub use assign::{ColorAssigner, ColorMapping, ColorSource, build_color_mapping};
pub use normalize::{NormalizationContext, Normalizer};
