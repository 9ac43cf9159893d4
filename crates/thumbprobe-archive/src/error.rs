use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open archive '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("archive is corrupted: {reason}")]
    Corrupted { reason: String },

    #[error("failed to read entry '{name}': {reason}")]
    EntryRead { name: String, reason: String },

    #[error("unrecognized image format")]
    UnknownImageFormat,

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the container was reachable but structurally invalid.
    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::Corrupted { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
