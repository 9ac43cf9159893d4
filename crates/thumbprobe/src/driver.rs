//! Batch orchestration: enumerate archives, inspect each one in order and
//! stream one report row per archive.

use anyhow::{Context, Result};
use thumbprobe_archive::{ArchiveRef, HeaderProbe, ImageProbe, Inspector};
use thumbprobe_report::{ReportRow, ReportWriter, Summary};
use tracing::info;

use crate::config::{Mode, RunConfig};
use crate::discover::archive_refs;
use crate::manifest::read_manifest;
use crate::ui::tracker::{ProgressTracker, Tracker};

#[derive(Debug)]
pub enum RunOutcome {
    Completed(Summary),
    /// Directory mode found nothing to inspect; no report was written.
    NoArchives,
}

pub struct BatchDriver<P = HeaderProbe> {
    config: RunConfig,
    inspector: Inspector<P>,
}

impl BatchDriver<HeaderProbe> {
    pub fn new(config: RunConfig) -> Self {
        let inspector = Inspector::new(config.inspect_options());
        Self { config, inspector }
    }
}

impl<P: ImageProbe> BatchDriver<P> {
    pub fn run(&self) -> Result<RunOutcome> {
        let archives = match &self.config.mode {
            Mode::Directory { recursive } => {
                let archives = archive_refs(self.config.search_root(), *recursive)?;
                if archives.is_empty() {
                    return Ok(RunOutcome::NoArchives);
                }
                archives
            }
            Mode::Manifest { manifest } => read_manifest(manifest)?
                .into_iter()
                .map(|row| {
                    ArchiveRef::new(self.config.resolve(&row.filename))
                        .with_id(row.id)
                        .with_display_name(row.filename)
                })
                .collect(),
        };

        self.process(&archives).map(RunOutcome::Completed)
    }

    fn process(&self, archives: &[ArchiveRef]) -> Result<Summary> {
        let output = &self.config.output;
        let mut writer = ReportWriter::create(output, self.config.schema())
            .with_context(|| format!("Cannot write to {}", output.display()))?;
        info!("writing {} rows to {}", archives.len(), output.display());

        let tracker = ProgressTracker::new(archives.len(), !self.config.verbose);
        for archive in archives {
            let outcome = self.inspector.inspect(archive);
            writer
                .write_row(&ReportRow::new(archive, outcome))
                .with_context(|| format!("failed to write row for {}", archive.display_name()))?;
            tracker.step(archive.display_name());
        }
        tracker.finish();

        writer
            .finish()
            .with_context(|| format!("failed to finish {}", output.display()))
    }
}
