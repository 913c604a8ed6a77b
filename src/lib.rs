// Public API exports
pub mod blobs;
pub mod dataset;
pub mod plot;

// Re-export main types for convenience
pub use blobs::{sample_blobs, BlobConfig, BlobSet, CENTER_BOX, CLUSTER_STD, DEFAULT_CENTERS};

pub use dataset::{
    read_float_lines, write_blobs, write_lines, ClusteringRun, DatasetError, LabeledSample,
    Variant,
};

pub use plot::{color_for, render_strip, PlotError, FIG_HEIGHT_PX, FIG_WIDTH_PX};
