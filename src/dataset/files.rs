use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::blobs::BlobSet;
use crate::dataset::{DatasetError, CENTROIDS_OLD, GITIGNORE, MEMBERSHIPS_OLD, VALUES};

fn io_err(path: &Path, source: std::io::Error) -> DatasetError {
    DatasetError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse a newline-delimited list of floats, skipping blank lines.
///
/// A non-numeric line fails the whole read with the path and 1-based line
/// number; there is no partial result.
pub fn read_float_lines(path: &Path) -> Result<Vec<f64>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;

    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: f64 = line.parse().map_err(|_| DatasetError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            text: line.to_string(),
        })?;
        out.push(value);
    }
    Ok(out)
}

/// Write one record per line, `\n`-terminated, no header.
///
/// Overwrites any existing file at `path`.
pub fn write_lines<T: Display>(path: &Path, records: &[T]) -> Result<(), DatasetError> {
    let mut body = String::new();
    for record in records {
        body.push_str(&record.to_string());
        body.push('\n');
    }
    fs::write(path, body).map_err(|e| io_err(path, e))
}

/// Persist a generated blob set under the directory file contract.
///
/// Creates `dir` and any missing parents, then writes [`VALUES`],
/// [`MEMBERSHIPS_OLD`] and [`CENTROIDS_OLD`], overwriting silently. The
/// single-feature `[f64; 1]` rows are flattened to bare scalars here. With
/// `gitignore` set, also writes an ignore-everything [`GITIGNORE`] marker.
///
/// `progress` is invoked with each file path immediately before that file is
/// written, so a failed run never narrates files it did not reach.
pub fn write_blobs(
    dir: &Path,
    blobs: &BlobSet,
    gitignore: bool,
    mut progress: impl FnMut(&Path),
) -> Result<(), DatasetError> {
    fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;

    let values: Vec<f64> = blobs.samples.iter().map(|[x]| *x).collect();
    let centroids: Vec<f64> = blobs.centers.iter().map(|[c]| *c).collect();

    let path = dir.join(VALUES);
    progress(&path);
    write_lines(&path, &values)?;

    let path = dir.join(MEMBERSHIPS_OLD);
    progress(&path);
    write_lines(&path, &blobs.labels)?;

    let path = dir.join(CENTROIDS_OLD);
    progress(&path);
    write_lines(&path, &centroids)?;

    if gitignore {
        let path = dir.join(GITIGNORE);
        progress(&path);
        fs::write(&path, "*\n").map_err(|e| io_err(&path, e))?;
    }

    Ok(())
}
