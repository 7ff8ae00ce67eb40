//! Turning raw rows into per-key summary statistics

use std::collections::HashMap;

use crate::dataset::Record;
use crate::error::{Error, Result};

/// One aggregated key/value pair (job title and mean salary, or skill and count)
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub key: String,
    pub value: f64,
}

impl Entity {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Row-to-entity aggregation. Rows missing the relevant field contribute
/// nothing; zero usable rows is an `EmptyInput` error.
pub trait Aggregator {
    fn aggregate(&self, rows: &[Record]) -> Result<Vec<Entity>>;
}

/// Accumulates per-key state while remembering first-seen key order
struct Groups<T> {
    index: HashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T: Default> Groups<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn entry(&mut self, key: &str) -> &mut T {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.entries.push((key.to_string(), T::default()));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

/// Sort descending by value; the sort is stable so ties keep first-seen order
fn sort_descending(entities: &mut [Entity]) {
    entities.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// Group-by-key arithmetic mean, ordered by mean descending
#[derive(Debug, Clone)]
pub struct CategoricalMeanAggregator {
    pub grouping_field: String,
    pub value_field: String,
}

impl CategoricalMeanAggregator {
    pub fn new(grouping_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            grouping_field: grouping_field.into(),
            value_field: value_field.into(),
        }
    }
}

impl Aggregator for CategoricalMeanAggregator {
    fn aggregate(&self, rows: &[Record]) -> Result<Vec<Entity>> {
        let mut groups: Groups<(f64, usize)> = Groups::new();
        let mut skipped = 0usize;

        for row in rows {
            let key = row.get(&self.grouping_field).as_text();
            let value = row.get(&self.value_field).as_number();
            match (key, value) {
                (Some(key), Some(value)) => {
                    let (sum, count) = groups.entry(key.trim());
                    *sum += value;
                    *count += 1;
                }
                _ => skipped += 1,
            }
        }

        if groups.entries.is_empty() {
            return Err(Error::empty(format!(
                "{}/{}",
                self.grouping_field, self.value_field
            )));
        }
        if skipped > 0 {
            tracing::trace!(skipped, field = %self.value_field, "rows without a usable key or value");
        }

        let mut entities: Vec<Entity> = groups
            .entries
            .into_iter()
            .map(|(key, (sum, count))| Entity::new(key, sum / count as f64))
            .collect();
        sort_descending(&mut entities);

        tracing::debug!(
            groups = entities.len(),
            rows = rows.len() - skipped,
            "aggregated mean {} by {}",
            self.value_field,
            self.grouping_field
        );
        Ok(entities)
    }
}

/// Counts delimiter-separated tokens across rows
#[derive(Debug, Clone)]
pub struct TokenFrequencyAggregator {
    pub tokens_field: String,
    pub delimiter: String,
}

impl TokenFrequencyAggregator {
    pub fn new(tokens_field: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            tokens_field: tokens_field.into(),
            delimiter: delimiter.into(),
        }
    }

    fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let parts: Box<dyn Iterator<Item = &'a str>> = if self.delimiter.is_empty() {
            Box::new(std::iter::once(text))
        } else {
            Box::new(text.split(self.delimiter.as_str()))
        };
        parts.map(str::trim).filter(|t| !t.is_empty())
    }
}

impl Aggregator for TokenFrequencyAggregator {
    /// Output is sorted by count descending, but callers should treat it as a set
    fn aggregate(&self, rows: &[Record]) -> Result<Vec<Entity>> {
        let mut counts: Groups<usize> = Groups::new();
        let mut used_rows = 0usize;

        for row in rows {
            let Some(text) = row.get(&self.tokens_field).as_text() else {
                continue;
            };
            let mut contributed = false;
            for token in self.tokens(&text) {
                *counts.entry(token) += 1;
                contributed = true;
            }
            if contributed {
                used_rows += 1;
            }
        }

        if counts.entries.is_empty() {
            return Err(Error::empty(self.tokens_field.as_str()));
        }

        let mut entities: Vec<Entity> = counts
            .entries
            .into_iter()
            .map(|(key, count)| Entity::new(key, count as f64))
            .collect();
        sort_descending(&mut entities);

        tracing::debug!(
            tokens = entities.len(),
            rows = used_rows,
            "counted tokens in {}",
            self.tokens_field
        );
        Ok(entities)
    }
}

/// Most frequent whole value of `field` and its count; ties go to the value seen first
pub fn most_common(rows: &[Record], field: &str) -> Option<(String, usize)> {
    let mut counts: Groups<usize> = Groups::new();
    for row in rows {
        if let Some(value) = row.get(field).as_text() {
            *counts.entry(value.trim()) += 1;
        }
    }
    counts
        .entries
        .into_iter()
        .fold(None, |best: Option<(String, usize)>, (key, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((key, n)),
        })
}

/// The `n` highest-valued entities; ties keep input order
pub fn top_n(entities: &[Entity], n: usize) -> Vec<Entity> {
    let mut ranked = entities.to_vec();
    sort_descending(&mut ranked);
    ranked.truncate(n);
    ranked
}
