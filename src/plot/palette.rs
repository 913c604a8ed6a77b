use plotters::style::RGBColor;

/// Ten-color categorical palette, cycled when a run has more clusters
pub const BRIGHT: [RGBColor; 10] = [
    RGBColor(0x02, 0x3E, 0xFF),
    RGBColor(0xFF, 0x7C, 0x00),
    RGBColor(0x1A, 0xC9, 0x38),
    RGBColor(0xE8, 0x00, 0x0B),
    RGBColor(0x8B, 0x2B, 0xE2),
    RGBColor(0x9F, 0x48, 0x00),
    RGBColor(0xF1, 0x4C, 0xC1),
    RGBColor(0xA3, 0xA3, 0xA3),
    RGBColor(0xFF, 0xC4, 0x00),
    RGBColor(0x00, 0xD7, 0xFF),
];

/// Color for one membership value, keyed by its position among the run's
/// distinct membership values.
///
/// `hues` must be sorted and deduplicated, as returned by
/// `ClusteringRun::distinct_memberships`.
pub fn color_for(hues: &[f64], membership: f64) -> RGBColor {
    let idx = hues.iter().position(|&h| h == membership).unwrap_or(0);
    BRIGHT[idx % BRIGHT.len()]
}
