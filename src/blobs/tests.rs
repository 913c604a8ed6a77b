use super::*;

#[test]
fn test_counts_match_config() {
    let cfg = BlobConfig::new(100).centers(Some(3));
    let blobs = sample_blobs(&cfg, 42);

    assert_eq!(blobs.samples.len(), 100);
    assert_eq!(blobs.labels.len(), 100);
    assert_eq!(blobs.centers.len(), 3);
}

#[test]
fn test_default_center_count() {
    let cfg = BlobConfig::new(30);
    let blobs = sample_blobs(&cfg, 42);

    assert_eq!(blobs.centers.len(), DEFAULT_CENTERS);
    assert!(blobs.labels.iter().all(|&l| l < DEFAULT_CENTERS));
}

#[test]
fn test_labels_within_cluster_range() {
    let cfg = BlobConfig::new(100).centers(Some(5));
    let blobs = sample_blobs(&cfg, 7);

    assert!(blobs.labels.iter().all(|&l| l < 5));
}

#[test]
fn test_uneven_split_spreads_extras() {
    // 10 samples over 4 blobs: the first two blobs take 3, the rest 2
    let cfg = BlobConfig::new(10).centers(Some(4));
    let blobs = sample_blobs(&cfg, 0);

    for label in 0..4 {
        let count = blobs.labels.iter().filter(|&&l| l == label).count();
        let expected = if label < 2 { 3 } else { 2 };
        assert_eq!(count, expected, "blob {} has wrong share", label);
    }
}

#[test]
fn test_centers_stay_inside_box() {
    let cfg = BlobConfig::new(50).centers(Some(10));
    let blobs = sample_blobs(&cfg, 123);

    let (lo, hi) = cfg.center_box;
    for center in &blobs.centers {
        assert!(center[0] >= lo && center[0] < hi);
    }
}

#[test]
fn test_samples_cluster_around_their_center() {
    let cfg = BlobConfig::new(200).centers(Some(4));
    let blobs = sample_blobs(&cfg, 99);

    // 10 sigma is effectively certain for a unit-variance draw
    for (sample, &label) in blobs.samples.iter().zip(&blobs.labels) {
        let center = blobs.centers[label][0];
        assert!(
            (sample[0] - center).abs() < 10.0 * cfg.cluster_std,
            "sample {} too far from center {}",
            sample[0],
            center
        );
    }
}

#[test]
#[should_panic]
fn test_invalid_cluster_std_panics() {
    let mut cfg = BlobConfig::new(10);
    cfg.cluster_std = -1.0;

    sample_blobs(&cfg, 0);
}

#[test]
fn test_same_seed_reproduces_draw() {
    let cfg = BlobConfig::new(64).centers(Some(3));

    let a = sample_blobs(&cfg, 42);
    let b = sample_blobs(&cfg, 42);

    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    let cfg = BlobConfig::new(64).centers(Some(3));

    let a = sample_blobs(&cfg, 1);
    let b = sample_blobs(&cfg, 2);

    assert_ne!(a.samples, b.samples);
}
