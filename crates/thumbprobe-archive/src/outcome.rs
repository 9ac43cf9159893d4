use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::probe::ImageInfo;

/// One archive scheduled for inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveRef {
    id: Option<String>,
    path: PathBuf,
    display_name: String,
}

impl ArchiveRef {
    /// Reference named after the final component of `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            id: None,
            path,
            display_name,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Classified result of inspecting one archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InspectionOutcome {
    Found { thumbnail: String, info: ImageInfo },
    DecodeFailed { thumbnail: String },
    NoThumbnail,
    ArchiveNotFound,
    ArchiveCorrupt,
}

impl InspectionOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Found { .. } => OutcomeKind::Found,
            Self::DecodeFailed { .. } => OutcomeKind::DecodeFailed,
            Self::NoThumbnail => OutcomeKind::NoThumbnail,
            Self::ArchiveNotFound => OutcomeKind::ArchiveNotFound,
            Self::ArchiveCorrupt => OutcomeKind::ArchiveCorrupt,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Text for the report's thumbnail column: the entry name on success,
    /// otherwise a status string.
    pub fn status(&self) -> Cow<'_, str> {
        match self {
            Self::Found { thumbnail, .. } => Cow::Borrowed(thumbnail),
            Self::DecodeFailed { thumbnail } => Cow::Owned(format!("Failed to open {thumbnail}")),
            Self::NoThumbnail => Cow::Borrowed("No Thumbnail"),
            Self::ArchiveNotFound => Cow::Borrowed("ZIP File Not Found"),
            Self::ArchiveCorrupt => Cow::Borrowed("Bad ZIP File"),
        }
    }

    pub fn image(&self) -> Option<&ImageInfo> {
        match self {
            Self::Found { info, .. } => Some(info),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutcomeKind {
    Found,
    DecodeFailed,
    NoThumbnail,
    ArchiveNotFound,
    ArchiveCorrupt,
}

impl OutcomeKind {
    pub const ALL: [Self; 5] = [
        Self::Found,
        Self::NoThumbnail,
        Self::DecodeFailed,
        Self::ArchiveCorrupt,
        Self::ArchiveNotFound,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Found => "Found",
            Self::DecodeFailed => "Failed to open",
            Self::NoThumbnail => "No Thumbnail",
            Self::ArchiveNotFound => "ZIP File Not Found",
            Self::ArchiveCorrupt => "Bad ZIP File",
        }
    }
}
