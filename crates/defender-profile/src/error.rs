use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("failed to read profile at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write profile at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("profile is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize profile: {0}")]
    Serialize(#[source] serde_json::Error),
}
