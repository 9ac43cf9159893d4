use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use thumbprobe_archive::ArchiveRef;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

const ARCHIVE_PATTERN: &str = "*.zip";

fn archive_matcher() -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(ARCHIVE_PATTERN)
        .literal_separator(true)
        .build()
        .with_context(|| format!("invalid archive pattern {ARCHIVE_PATTERN}"))?;
    Ok(glob.compile_matcher())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Files named `*.zip` under `root`, sorted by path.
///
/// Only immediate children are considered unless `recursive` is set. Hidden
/// files and directories are skipped, as are directories whose name happens
/// to end in `.zip`. Unreadable directories are logged and skipped.
pub fn find_archives(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let matcher = archive_matcher()?;
    let max_depth = if recursive { usize::MAX } else { 1 };

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut archives = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable path: {err}");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            archives.push(entry.into_path());
        }
    }

    Ok(archives)
}

/// Archive references named relative to `root`.
pub fn archive_refs(root: &Path, recursive: bool) -> Result<Vec<ArchiveRef>> {
    let refs = find_archives(root, recursive)?
        .into_iter()
        .map(|path| {
            let name = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();
            ArchiveRef::new(path).with_display_name(name)
        })
        .collect();
    Ok(refs)
}
