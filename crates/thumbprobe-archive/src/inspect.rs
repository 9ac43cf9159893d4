//! Per-archive inspection.
//!
//! [`Inspector::inspect`] never fails: every problem with an individual
//! archive is folded into an [`InspectionOutcome`], so a batch of N archives
//! always yields N outcomes.

use tracing::{info, warn};

use crate::names::ThumbnailNameSet;
use crate::outcome::{ArchiveRef, InspectionOutcome};
use crate::probe::{HeaderProbe, ImageInfo, ImageProbe};
use crate::source::ZipSource;

/// Pixel count above which a thumbnail is flagged as a possible decompression bomb.
pub const DEFAULT_MAX_PIXELS: u64 = 89_478_485;

/// Bytes of a thumbnail entry handed to the probe. Headers of the supported
/// formats sit well inside this prefix.
pub const DEFAULT_MAX_ENTRY_BYTES: u64 = 8 << 20;

#[derive(Clone, Copy, Debug)]
pub struct InspectOptions {
    pub bomb_warning: bool,
    pub max_pixels: u64,
    pub max_entry_bytes: u64,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            bomb_warning: true,
            max_pixels: DEFAULT_MAX_PIXELS,
            max_entry_bytes: DEFAULT_MAX_ENTRY_BYTES,
        }
    }
}

impl InspectOptions {
    pub fn bomb_warning(mut self, enabled: bool) -> Self {
        self.bomb_warning = enabled;
        self
    }

    pub fn max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    pub fn max_entry_bytes(mut self, max_entry_bytes: u64) -> Self {
        self.max_entry_bytes = max_entry_bytes;
        self
    }

    pub fn exceeds_pixel_limit(&self, info: &ImageInfo) -> bool {
        info.pixel_count() > self.max_pixels
    }
}

pub struct Inspector<P = HeaderProbe> {
    probe: P,
    names: ThumbnailNameSet,
    options: InspectOptions,
}

impl Inspector<HeaderProbe> {
    pub fn new(options: InspectOptions) -> Self {
        Self::with_probe(HeaderProbe, options)
    }
}

impl Default for Inspector<HeaderProbe> {
    fn default() -> Self {
        Self::new(InspectOptions::default())
    }
}

impl<P: ImageProbe> Inspector<P> {
    pub fn with_probe(probe: P, options: InspectOptions) -> Self {
        Self {
            probe,
            names: ThumbnailNameSet,
            options,
        }
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    /// Classify one archive.
    ///
    /// The archive is opened, searched and closed within this call.
    pub fn inspect(&self, archive: &ArchiveRef) -> InspectionOutcome {
        let path = archive.path();
        info!("inspecting {}", path.display());

        let mut source = match ZipSource::open(path) {
            Ok(source) => source,
            Err(err) if err.is_corrupted() => {
                info!("bad zip file {}: {err}", path.display());
                return InspectionOutcome::ArchiveCorrupt;
            }
            Err(err) => {
                info!("zip file not found {}: {err}", path.display());
                return InspectionOutcome::ArchiveNotFound;
            }
        };

        let candidates = self.names.candidates(source.entry_names());
        let Some(&thumbnail) = candidates.first() else {
            info!("  no thumbnail");
            return InspectionOutcome::NoThumbnail;
        };
        if candidates.len() > 1 {
            info!("  found {}, using {thumbnail}", candidates.join(", "));
        } else {
            info!("  found {thumbnail}");
        }

        let decoded = source
            .read_entry(thumbnail, self.options.max_entry_bytes)
            .and_then(|bytes| self.probe.probe(&bytes));

        match decoded {
            Ok(info) => {
                info!(
                    "  ({}x{})px, {} {}",
                    info.width, info.height, info.format, info.color_mode
                );
                if self.options.bomb_warning && self.options.exceeds_pixel_limit(&info) {
                    warn!(
                        "{}: {thumbnail} is {} pixels, exceeding the limit of {}; possible decompression bomb",
                        archive.display_name(),
                        info.pixel_count(),
                        self.options.max_pixels
                    );
                }
                InspectionOutcome::Found {
                    thumbnail: thumbnail.to_owned(),
                    info,
                }
            }
            Err(err) => {
                info!("  failed to open {thumbnail}: {err}");
                InspectionOutcome::DecodeFailed {
                    thumbnail: thumbnail.to_owned(),
                }
            }
        }
    }
}
