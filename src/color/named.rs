//! Built-in ramps, 11 anchors each sampled from the matplotlib originals at t = 0.0, 0.1, .., 1.0

type Table = &'static [[u8; 3]];

/// Dark purple to pale yellow; the bright top end is what truncation usually clips
const INFERNO: Table = &[
    [0, 0, 4],
    [22, 11, 57],
    [66, 10, 104],
    [106, 23, 110],
    [147, 38, 103],
    [188, 55, 84],
    [221, 81, 58],
    [243, 120, 25],
    [252, 165, 10],
    [246, 215, 70],
    [252, 255, 164],
];

const MAGMA: Table = &[
    [0, 0, 4],
    [20, 14, 54],
    [59, 15, 112],
    [100, 26, 128],
    [140, 41, 129],
    [183, 55, 121],
    [222, 73, 104],
    [247, 112, 92],
    [254, 159, 109],
    [254, 207, 146],
    [252, 253, 191],
];

const PLASMA: Table = &[
    [13, 8, 135],
    [65, 4, 157],
    [106, 0, 168],
    [143, 13, 164],
    [177, 42, 144],
    [204, 71, 120],
    [225, 100, 98],
    [242, 132, 75],
    [252, 166, 54],
    [252, 206, 37],
    [240, 249, 33],
];

/// Colorblind-safe default for most continuous data
const VIRIDIS: Table = &[
    [68, 1, 84],
    [72, 36, 117],
    [65, 68, 135],
    [53, 95, 141],
    [42, 120, 142],
    [33, 145, 140],
    [34, 168, 132],
    [68, 191, 112],
    [122, 209, 81],
    [189, 223, 38],
    [253, 231, 37],
];

const RAMPS: [(&str, Table); 4] = [
    ("inferno", INFERNO),
    ("magma", MAGMA),
    ("plasma", PLASMA),
    ("viridis", VIRIDIS),
];

/// Names accepted by `ColorRamp::named`
pub fn available_ramps() -> Vec<&'static str> {
    RAMPS.iter().map(|(name, _)| *name).collect()
}

/// Expects a lowercase, trimmed name
pub(super) fn lookup(name: &str) -> Option<Table> {
    RAMPS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, table)| *table)
}
