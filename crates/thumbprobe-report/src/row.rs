use thumbprobe_archive::{ArchiveRef, InspectionOutcome};

use crate::error::{Error, Result};
use crate::schema::{NOT_AVAILABLE, Schema};

/// One archive paired with its outcome, ready to serialize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    id: Option<String>,
    filename: String,
    outcome: InspectionOutcome,
}

impl ReportRow {
    pub fn new(archive: &ArchiveRef, outcome: InspectionOutcome) -> Self {
        Self {
            id: archive.id().map(str::to_owned),
            filename: archive.display_name().to_owned(),
            outcome,
        }
    }

    pub fn outcome(&self) -> &InspectionOutcome {
        &self.outcome
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Cells of this row laid out for `schema`.
    pub fn record(&self, schema: Schema) -> Result<Vec<String>> {
        let mut cells = Vec::with_capacity(schema.width());

        if schema.has_id() {
            let id = self.id.as_ref().ok_or_else(|| Error::MissingId {
                filename: self.filename.clone(),
            })?;
            cells.push(id.clone());
        }

        cells.push(self.filename.clone());
        cells.push(self.outcome.status().into_owned());

        match self.outcome.image() {
            Some(info) => cells.extend([
                info.width.to_string(),
                info.height.to_string(),
                info.format.clone(),
                info.color_mode.clone(),
            ]),
            None => cells.extend(std::iter::repeat_n(NOT_AVAILABLE.to_owned(), 4)),
        }

        Ok(cells)
    }
}
