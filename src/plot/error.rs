use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to render {path}: {message}")]
    Backend { path: PathBuf, message: String },
}
