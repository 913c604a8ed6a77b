use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::blobs::{CENTER_BOX, CLUSTER_STD, DEFAULT_CENTERS};

/// Configuration for one synthetic blob draw
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Total number of samples across all blobs
    pub n_samples: usize,
    /// Number of blobs; `None` falls back to [`DEFAULT_CENTERS`]
    pub centers: Option<usize>,
    /// Box the blob centers are drawn from
    pub center_box: (f64, f64),
    /// Per-blob standard deviation; must be finite and non-negative,
    /// [`sample_blobs`] panics otherwise
    pub cluster_std: f64,
}

impl BlobConfig {
    /// Config with the documented defaults for everything but the sample count
    pub fn new(n_samples: usize) -> Self {
        Self {
            n_samples,
            centers: None,
            center_box: CENTER_BOX,
            cluster_std: CLUSTER_STD,
        }
    }

    /// Set the requested blob count
    pub fn centers(mut self, centers: Option<usize>) -> Self {
        self.centers = centers;
        self
    }
}

/// One synthetic draw: single-feature sample rows plus their ground truth.
///
/// Rows keep their `[f64; 1]` shape; flattening to bare scalars happens at
/// the dataset-writing boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobSet {
    pub samples: Vec<[f64; 1]>,
    /// Ground-truth blob index per sample, aligned with `samples` by position
    pub labels: Vec<usize>,
    pub centers: Vec<[f64; 1]>,
}

/// Draw `cfg.n_samples` points from isotropic 1-D Gaussian blobs.
///
/// Centers are drawn uniformly inside `cfg.center_box`. Samples are split as
/// evenly as possible across blobs (the first `n mod k` blobs take one extra)
/// and the (sample, label) pairs are shuffled before returning, so blob
/// membership carries no positional signal.
pub fn sample_blobs(cfg: &BlobConfig, seed: u64) -> BlobSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let k = cfg.centers.unwrap_or(DEFAULT_CENTERS);

    let (lo, hi) = cfg.center_box;
    let center_dist = Uniform::new(lo, hi);
    let centers: Vec<[f64; 1]> = (0..k).map(|_| [center_dist.sample(&mut rng)]).collect();

    let base = cfg.n_samples / k;
    let extra = cfg.n_samples % k;

    let mut paired: Vec<([f64; 1], usize)> = Vec::with_capacity(cfg.n_samples);
    for (label, center) in centers.iter().enumerate() {
        let count = base + usize::from(label < extra);
        let noise = Normal::new(center[0], cfg.cluster_std).unwrap();
        for _ in 0..count {
            paired.push(([noise.sample(&mut rng)], label));
        }
    }
    paired.shuffle(&mut rng);

    let (samples, labels) = paired.into_iter().unzip();
    BlobSet {
        samples,
        labels,
        centers,
    }
}
