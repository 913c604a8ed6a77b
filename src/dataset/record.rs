use std::path::Path;

use crate::dataset::files::read_float_lines;
use crate::dataset::{
    DatasetError, CENTROIDS_NEW, CENTROIDS_OLD, MEMBERSHIPS_NEW, MEMBERSHIPS_OLD, PLOT_NEW,
    PLOT_OLD, VALUES,
};

/// Which of the two parallel clustering results to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Ground truth, the `_o` ("old") files written by the generator
    GroundTruth,
    /// External algorithm output, the `_n` ("new") files
    UnderTest,
}

impl Variant {
    pub fn memberships_file(self) -> &'static str {
        match self {
            Variant::GroundTruth => MEMBERSHIPS_OLD,
            Variant::UnderTest => MEMBERSHIPS_NEW,
        }
    }

    pub fn centroids_file(self) -> &'static str {
        match self {
            Variant::GroundTruth => CENTROIDS_OLD,
            Variant::UnderTest => CENTROIDS_NEW,
        }
    }

    pub fn plot_file(self) -> &'static str {
        match self {
            Variant::GroundTruth => PLOT_OLD,
            Variant::UnderTest => PLOT_NEW,
        }
    }
}

/// One sample joined with its cluster assignment.
///
/// Values and memberships are correlated purely by line index; pairing them
/// at load time keeps later reordering from silently misaligning the two
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledSample {
    pub value: f64,
    /// Cluster id, used only as a categorical hue key
    pub membership: f64,
}

/// One clustering result over the shared sample set
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringRun {
    pub samples: Vec<LabeledSample>,
    /// Centroid coordinates; count may differ from the distinct label count
    pub centroids: Vec<f64>,
}

impl ClusteringRun {
    /// Load one variant from `dir`, pairing [`VALUES`] with the variant's
    /// membership file line by line.
    ///
    /// A membership count that differs from the value count is an error;
    /// no truncation or padding.
    pub fn load(dir: &Path, variant: Variant) -> Result<Self, DatasetError> {
        let values = read_float_lines(&dir.join(VALUES))?;
        let memberships = read_float_lines(&dir.join(variant.memberships_file()))?;
        let centroids = read_float_lines(&dir.join(variant.centroids_file()))?;

        if memberships.len() != values.len() {
            return Err(DatasetError::LengthMismatch {
                file: variant.memberships_file().to_string(),
                expected: values.len(),
                actual: memberships.len(),
            });
        }

        let samples = values
            .into_iter()
            .zip(memberships)
            .map(|(value, membership)| LabeledSample { value, membership })
            .collect();

        Ok(Self { samples, centroids })
    }

    /// Distinct membership values in ascending order; sizes the plot palette.
    pub fn distinct_memberships(&self) -> Vec<f64> {
        let mut out: Vec<f64> = self.samples.iter().map(|s| s.membership).collect();
        out.sort_by(|a, b| a.total_cmp(b));
        out.dedup();
        out
    }
}
