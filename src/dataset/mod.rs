mod error;
mod files;
mod record;


pub use error::DatasetError;
pub use files::{read_float_lines, write_blobs, write_lines};
pub use record::{ClusteringRun, LabeledSample, Variant};

/// Sample coordinates, one float per line
pub const VALUES: &str = "values";

/// Ground-truth cluster id per sample, line-aligned with [`VALUES`]
pub const MEMBERSHIPS_OLD: &str = "memberships_o";

/// Ground-truth centroid coordinates, one per cluster, order arbitrary
pub const CENTROIDS_OLD: &str = "centroids_o";

/// Under-test cluster id per sample, line-aligned with [`VALUES`]
pub const MEMBERSHIPS_NEW: &str = "memberships_n";

/// Under-test centroid coordinates
pub const CENTROIDS_NEW: &str = "centroids_n";

/// Optional ignore-everything marker emitted by the generator
pub const GITIGNORE: &str = ".gitignore";

/// Rendered ground-truth strip plot
pub const PLOT_OLD: &str = "plot_o.jpg";

/// Rendered under-test strip plot
pub const PLOT_NEW: &str = "plot_n.jpg";
