use std::path::Path;

use plotters::prelude::*;

use crate::blobs::CENTER_BOX;
use crate::dataset::ClusteringRun;
use crate::plot::palette::color_for;
use crate::plot::{PlotError, FIG_HEIGHT_PX, FIG_WIDTH_PX};

/// Fixed accent color for centroid guide lines
pub const CENTROID_COLOR: RGBColor = GREEN;

/// Render one clustering run as a wide, short scatter strip.
///
/// All points sit on y = 0, colored by membership; each centroid gets a
/// full-height vertical line, clipped if it falls outside the value range.
/// No legend: the hue separation itself is the comparison signal. Both
/// variants derive their horizontal range from the shared `values`, so the
/// two output images frame identically.
pub fn render_strip(run: &ClusteringRun, out: &Path) -> Result<(), PlotError> {
    let (x_min, x_max) = x_range(run);

    let root = BitMapBackend::new(out, (FIG_WIDTH_PX, FIG_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| backend_err(out, e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(x_min..x_max, -1.0f64..1.0f64)
        .map_err(|e| backend_err(out, e))?;

    let hues = run.distinct_memberships();

    chart
        .draw_series(run.samples.iter().map(|s| {
            let color = color_for(&hues, s.membership);
            Circle::new((s.value, 0.0), 10, color.filled())
        }))
        .map_err(|e| backend_err(out, e))?;

    for &c in &run.centroids {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(c, -1.0), (c, 1.0)],
                CENTROID_COLOR.stroke_width(5),
            )))
            .map_err(|e| backend_err(out, e))?;
    }

    root.present().map_err(|e| backend_err(out, e))?;
    Ok(())
}

fn backend_err<E: std::fmt::Display>(path: &Path, err: E) -> PlotError {
    PlotError::Backend {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Horizontal framing, padded slightly so edge points stay visible.
/// Falls back to the generator's coordinate box for an empty run.
fn x_range(run: &ClusteringRun) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in &run.samples {
        lo = lo.min(s.value);
        hi = hi.max(s.value);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return CENTER_BOX;
    }
    let pad = ((hi - lo) * 0.02).max(1.0);
    (lo - pad, hi + pad)
}
