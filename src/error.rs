//! Error taxonomy for ramp construction, aggregation and dataset loading

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Truncation interval out of bounds, inverted, or resolution too small
    #[error(
        "invalid truncation range [{minval}, {maxval}] at resolution {resolution} \
         (need 0 <= min < max <= 1 and resolution >= 2)"
    )]
    InvalidRange {
        minval: f64,
        maxval: f64,
        resolution: usize,
    },

    /// No usable value survived skip-filtering
    #[error("no usable values in field '{field}'")]
    EmptyInput { field: String },

    #[error("a color ramp needs at least 2 stops, got {0}")]
    TooFewStops(usize),

    #[error("invalid color stops: {0}")]
    InvalidStops(String),

    #[error("unknown color ramp '{0}' (available: {list})", list = crate::color::available_ramps().join(", "))]
    UnknownRamp(String),

    #[error("unsupported dataset format '{0}' (expected csv, json, jsonl, ndjson, xlsx, xls or ods)")]
    UnsupportedFormat(String),

    #[error("malformed dataset {}: {message}", path.display())]
    Dataset { path: PathBuf, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn empty(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }
}
