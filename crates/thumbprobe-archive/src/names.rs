/// Entry names recognized as thumbnails, in selection priority order.
pub const THUMBNAIL_NAMES: [&str; 4] = [
    "thumbnail.jpg",
    "thumbnail.png",
    "thumbnail.gif",
    "thumbnail.jpeg",
];

/// The fixed set of thumbnail entry names.
///
/// Matching is exact and case-sensitive against the name as stored in the
/// archive, so only root-level entries qualify: `sub/thumbnail.png` and
/// `Thumbnail.PNG` are never candidates.
///
/// When several candidates coexist, the one listed first in
/// [`THUMBNAIL_NAMES`] wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailNameSet;

impl ThumbnailNameSet {
    pub fn contains(&self, name: &str) -> bool {
        Self::priority(name).is_some()
    }

    /// Pick the highest-priority candidate among `names`.
    pub fn select<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Option<&'static str> {
        names
            .into_iter()
            .filter_map(Self::priority)
            .min()
            .map(|index| THUMBNAIL_NAMES[index])
    }

    /// All candidates present in `names`, in priority order.
    pub fn candidates<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'static str> {
        let mut found: Vec<usize> = names.into_iter().filter_map(Self::priority).collect();
        found.sort_unstable();
        found.dedup();
        found.into_iter().map(|index| THUMBNAIL_NAMES[index]).collect()
    }

    fn priority(name: &str) -> Option<usize> {
        THUMBNAIL_NAMES.iter().position(|candidate| *candidate == name)
    }
}
