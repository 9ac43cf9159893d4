/// Placeholder for metadata cells of archives without a decoded thumbnail.
pub const NOT_AVAILABLE: &str = "NA";

const DIRECTORY_HEADER: [&str; 6] = [
    "Filename",
    "Thumbnail",
    "Width(px)",
    "Height(px)",
    "Format",
    "Color Mode",
];

const MANIFEST_HEADER: [&str; 7] = [
    "Unique ID",
    "Filename",
    "Thumbnail",
    "Width(px)",
    "Height(px)",
    "Format",
    "Color Mode",
];

/// Column layout of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    /// Archives discovered on disk.
    Directory,
    /// Archives listed in a manifest; the external id comes first.
    Manifest,
}

impl Schema {
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Directory => &DIRECTORY_HEADER,
            Self::Manifest => &MANIFEST_HEADER,
        }
    }

    pub fn has_id(self) -> bool {
        matches!(self, Self::Manifest)
    }

    pub fn width(self) -> usize {
        self.header().len()
    }
}
