mod sampler;

#[cfg(test)]
mod tests;

pub use sampler::{sample_blobs, BlobConfig, BlobSet};

/// Cluster count used when the caller does not request one
pub const DEFAULT_CENTERS: usize = 3;

/// Coordinate box blob centers are drawn from
pub const CENTER_BOX: (f64, f64) = (0.0, 100.0);

/// Standard deviation of each blob
pub const CLUSTER_STD: f64 = 1.0;
