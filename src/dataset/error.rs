use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed number in {path} line {line}: {text:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("{file} has {actual} entries but values has {expected}")]
    LengthMismatch {
        file: String,
        expected: usize,
        actual: usize,
    },
}
