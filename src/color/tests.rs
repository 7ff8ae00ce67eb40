//! Unit tests for color module

use super::{ColorRamp, ColorStop, Rgb, available_ramps, truncate};
use crate::error::Error;

fn black_white() -> ColorRamp {
    ColorRamp::evenly_spaced("bw", vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]).unwrap()
}

/// Largest per-channel difference between two colors
fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

#[test]
fn test_sample_endpoints_match_stops() {
    for name in available_ramps() {
        let ramp = ColorRamp::named(name).unwrap();
        let stops = ramp.stops();
        assert_eq!(
            ramp.sample(0.0),
            Rgb::from_unit(stops[0].color),
            "{} sample(0) should be the first stop",
            name
        );
        assert_eq!(
            ramp.sample(1.0),
            Rgb::from_unit(stops[stops.len() - 1].color),
            "{} sample(1) should be the last stop",
            name
        );
    }
}

#[test]
fn test_sample_clamps_out_of_range() {
    let ramp = ColorRamp::named("inferno").unwrap();
    assert_eq!(ramp.sample(-0.5), ramp.sample(0.0));
    assert_eq!(ramp.sample(-1e9), ramp.sample(0.0));
    assert_eq!(ramp.sample(1.5), ramp.sample(1.0));
    assert_eq!(ramp.sample(f64::INFINITY), ramp.sample(1.0));
    assert_eq!(ramp.sample(f64::NAN), ramp.sample(0.0));
}

#[test]
fn test_sample_interpolates_linearly() {
    let ramp = black_white();
    assert_eq!(ramp.sample(0.5), Rgb::new(128, 128, 128));
    assert_eq!(ramp.sample(0.25), Rgb::new(64, 64, 64));
}

#[test]
fn test_sample_uneven_stops() {
    let ramp = ColorRamp::new(
        "uneven",
        vec![
            ColorStop::new(0.0, [0.0, 0.0, 0.0]),
            ColorStop::new(0.8, [1.0, 0.0, 0.0]),
            ColorStop::new(1.0, [1.0, 1.0, 0.0]),
        ],
    )
    .unwrap();
    assert_eq!(ramp.sample(0.4), Rgb::new(128, 0, 0));
    assert_eq!(ramp.sample(0.8), Rgb::new(255, 0, 0));
    assert!(channel_distance(ramp.sample(0.9), Rgb::new(255, 128, 0)) <= 1);
}

#[test]
fn test_inferno_known_anchor() {
    let ramp = ColorRamp::named("inferno").unwrap();
    // matplotlib inferno(0.5) = #bc3754
    assert_eq!(ramp.sample(0.5), Rgb::new(0xbc, 0x37, 0x54));
}

#[test]
fn test_too_few_stops_rejected() {
    let err = ColorRamp::evenly_spaced("one", vec![[0.5, 0.5, 0.5]]).unwrap_err();
    assert!(matches!(err, Error::TooFewStops(1)), "got {:?}", err);

    let err = ColorRamp::new("none", Vec::new()).unwrap_err();
    assert!(matches!(err, Error::TooFewStops(0)), "got {:?}", err);
}

#[test]
fn test_invalid_stops_rejected() {
    let not_increasing = vec![
        ColorStop::new(0.0, [0.0; 3]),
        ColorStop::new(0.6, [0.5; 3]),
        ColorStop::new(0.6, [0.7; 3]),
        ColorStop::new(1.0, [1.0; 3]),
    ];
    assert!(matches!(
        ColorRamp::new("dup", not_increasing),
        Err(Error::InvalidStops(_))
    ));

    let nan_hides_disorder = vec![
        ColorStop::new(0.0, [0.0; 3]),
        ColorStop::new(0.7, [0.3; 3]),
        ColorStop::new(f64::NAN, [0.5; 3]),
        ColorStop::new(0.2, [0.7; 3]),
        ColorStop::new(1.0, [1.0; 3]),
    ];
    assert!(matches!(
        ColorRamp::new("nan", nan_hides_disorder),
        Err(Error::InvalidStops(_))
    ));

    let nan_middle = vec![
        ColorStop::new(0.0, [0.0; 3]),
        ColorStop::new(f64::NAN, [0.5; 3]),
        ColorStop::new(1.0, [1.0; 3]),
    ];
    assert!(matches!(
        ColorRamp::new("nan-middle", nan_middle),
        Err(Error::InvalidStops(_))
    ));

    let short_span = vec![ColorStop::new(0.0, [0.0; 3]), ColorStop::new(0.9, [1.0; 3])];
    assert!(matches!(
        ColorRamp::new("short", short_span),
        Err(Error::InvalidStops(_))
    ));

    let bad_color = vec![ColorStop::new(0.0, [0.0; 3]), ColorStop::new(1.0, [1.2, 0.0, 0.0])];
    assert!(matches!(
        ColorRamp::new("bright", bad_color),
        Err(Error::InvalidStops(_))
    ));
}

#[test]
fn test_named_is_case_insensitive() {
    let a = ColorRamp::named("Inferno").unwrap();
    let b = ColorRamp::named(" inferno ").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.name(), "inferno");
}

#[test]
fn test_unknown_ramp_rejected() {
    let err = ColorRamp::named("rainbow").unwrap_err();
    assert!(matches!(err, Error::UnknownRamp(ref n) if n == "rainbow"));
    assert!(err.to_string().contains("viridis"), "message lists options");
}

#[test]
fn test_truncate_endpoints_match_source() {
    let source = ColorRamp::named("inferno").unwrap();
    for &(min, max) in &[(0.0, 0.85), (0.1, 0.9), (0.25, 0.3), (0.0, 1.0)] {
        let trunc = truncate(&source, min, max, 256).unwrap();
        assert!(
            channel_distance(trunc.sample(0.0), source.sample(min)) <= 1,
            "trunc({}, {})(0) should match source({})",
            min,
            max,
            min
        );
        assert!(
            channel_distance(trunc.sample(1.0), source.sample(max)) <= 1,
            "trunc({}, {})(1) should match source({})",
            min,
            max,
            max
        );
    }
}

#[test]
fn test_truncate_midpoint_follows_source() {
    let source = ColorRamp::named("viridis").unwrap();
    let trunc = truncate(&source, 0.2, 0.6, 256).unwrap();
    // Halfway through the truncated domain is 0.4 in the source
    assert!(channel_distance(trunc.sample(0.5), source.sample(0.4)) <= 1);
}

#[test]
fn test_truncate_removes_bright_end() {
    let source = ColorRamp::named("inferno").unwrap();
    let trunc = truncate(&source, 0.0, 0.85, 256).unwrap();
    let top = trunc.sample(1.0);
    let pale = source.sample(1.0);
    assert_ne!(top, pale, "pale yellow should be clipped");
    assert!(top.b < pale.b, "truncated top should be less washed out");
}

#[test]
fn test_truncate_resolution_and_name() {
    let source = ColorRamp::named("inferno").unwrap();
    let trunc = truncate(&source, 0.0, 0.85, 256).unwrap();
    assert_eq!(trunc.stops().len(), 256);
    assert_eq!(trunc.name(), "trunc(inferno,0.00,0.85)");

    let coarse = truncate(&source, 0.0, 0.85, 2).unwrap();
    assert_eq!(coarse.stops().len(), 2);
}

#[test]
fn test_truncate_invalid_range() {
    let source = black_white();
    let bad = [
        (0.5, 0.5, 256),
        (0.9, 0.1, 256),
        (-0.1, 0.5, 256),
        (0.0, 1.1, 256),
        (f64::NAN, 0.5, 256),
        (0.0, 0.85, 1),
        (0.0, 0.85, 0),
    ];
    for (min, max, res) in bad {
        let err = truncate(&source, min, max, res).unwrap_err();
        assert!(
            matches!(err, Error::InvalidRange { .. }),
            "({}, {}, {}) should be rejected, got {:?}",
            min,
            max,
            res,
            err
        );
    }
}

#[test]
fn test_rgb_formats() {
    let c = Rgb::new(12, 200, 255);
    assert_eq!(c.to_hex(), "#0cc8ff");
    assert_eq!(c.to_css(), "rgb(12, 200, 255)");
    assert_eq!(c.to_string(), "#0cc8ff");
}
