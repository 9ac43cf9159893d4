//! Thumbnail lookup and image header probing for zip archives.
//!
//! # Architecture
//!
//! - `names.rs` - Fixed thumbnail name set and selection order
//! - `source.rs` - Zip container access and open-failure classification
//! - `probe.rs` - Image header probing (dimensions, format, color mode)
//! - `outcome.rs` - Archive references and per-archive outcomes
//! - `inspect.rs` - The per-archive inspection state machine

pub use error::{Error, Result};
pub use inspect::{InspectOptions, Inspector};
pub use names::{THUMBNAIL_NAMES, ThumbnailNameSet};
pub use outcome::{ArchiveRef, InspectionOutcome, OutcomeKind};
pub use probe::{HeaderProbe, ImageInfo, ImageProbe};
pub use source::ZipSource;

mod error;
pub mod inspect;
pub mod names;
pub mod outcome;
pub mod probe;
pub mod source;
