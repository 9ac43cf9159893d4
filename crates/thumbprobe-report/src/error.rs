use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot write to '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to write report row: {0}")]
    Write(#[from] csv::Error),

    #[error("row for '{filename}' has no unique id but the report requires one")]
    MissingId { filename: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
