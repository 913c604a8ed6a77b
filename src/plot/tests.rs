use std::fs;

use tempfile::tempdir;

use super::*;
use crate::dataset::{ClusteringRun, LabeledSample, PLOT_OLD};

fn sample_run() -> ClusteringRun {
    let samples = vec![
        LabeledSample {
            value: 1.0,
            membership: 0.0,
        },
        LabeledSample {
            value: 2.0,
            membership: 0.0,
        },
        LabeledSample {
            value: 48.0,
            membership: 1.0,
        },
        LabeledSample {
            value: 52.0,
            membership: 1.0,
        },
        LabeledSample {
            value: 90.0,
            membership: 2.0,
        },
    ];
    ClusteringRun {
        samples,
        centroids: vec![1.5, 50.0, 90.0],
    }
}

#[test]
fn test_renders_nonempty_jpeg_at_configured_resolution() {
    let dir = tempdir().unwrap();
    let out = dir.path().join(PLOT_OLD);

    render_strip(&sample_run(), &out).unwrap();

    let meta = fs::metadata(&out).unwrap();
    assert!(meta.len() > 0);

    let (width, height) = image::image_dimensions(&out).unwrap();
    assert_eq!((width, height), (FIG_WIDTH_PX, FIG_HEIGHT_PX));
}

#[test]
fn test_rerender_overwrites_with_same_image() {
    let dir = tempdir().unwrap();
    let out = dir.path().join(PLOT_OLD);

    render_strip(&sample_run(), &out).unwrap();
    let first = fs::read(&out).unwrap();

    render_strip(&sample_run(), &out).unwrap();
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_centroid_outside_value_range_is_clipped_not_fatal() {
    let dir = tempdir().unwrap();
    let out = dir.path().join(PLOT_OLD);

    let mut run = sample_run();
    run.centroids.push(1000.0);

    render_strip(&run, &out).unwrap();
}

#[test]
fn test_centroid_count_may_diverge_from_label_count() {
    // 3 distinct labels but 5 centroids: render whatever is present
    let dir = tempdir().unwrap();
    let out = dir.path().join(PLOT_OLD);

    let mut run = sample_run();
    run.centroids = vec![1.0, 20.0, 40.0, 60.0, 80.0];

    render_strip(&run, &out).unwrap();
}

#[test]
fn test_empty_run_still_renders() {
    let dir = tempdir().unwrap();
    let out = dir.path().join(PLOT_OLD);

    let run = ClusteringRun {
        samples: vec![],
        centroids: vec![],
    };

    render_strip(&run, &out).unwrap();
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn test_palette_keys_by_distinct_membership() {
    let hues = vec![0.0, 1.0, 4.0];

    assert_eq!(color_for(&hues, 0.0), BRIGHT[0]);
    assert_eq!(color_for(&hues, 1.0), BRIGHT[1]);
    // Hue index follows position among distinct values, not the id itself
    assert_eq!(color_for(&hues, 4.0), BRIGHT[2]);
}

#[test]
fn test_palette_cycles_past_ten_clusters() {
    let hues: Vec<f64> = (0..12).map(|i| i as f64).collect();

    assert_eq!(color_for(&hues, 11.0), BRIGHT[1]);
}
