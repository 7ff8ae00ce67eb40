//! Frequency-to-color mapping for job posting summaries.
//!
//! Rows are aggregated into entities (mean salary per title, or skill
//! counts), normalized over their observed range, and colored through a
//! truncated color ramp. Renderers consume the result through `ColorSource`.

pub mod analysis;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;

pub use error::{Error, Result};
