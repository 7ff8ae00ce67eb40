//! Continuous color ramps and domain truncation

mod named;
mod ramp;
mod rgb;
mod truncate;

pub use named::available_ramps;
pub use ramp::{ColorRamp, ColorStop};
pub use rgb::Rgb;
pub use truncate::truncate;

#[cfg(test)]
mod tests;
