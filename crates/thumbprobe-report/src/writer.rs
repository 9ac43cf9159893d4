use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::row::ReportRow;
use crate::schema::Schema;
use crate::summary::Summary;

/// Sole owner of the report output.
///
/// The header is written on construction; every row is flushed before
/// [`write_row`](Self::write_row) returns.
pub struct ReportWriter<W: Write> {
    csv: csv::Writer<W>,
    schema: Schema,
    summary: Summary,
}

impl ReportWriter<File> {
    pub fn create(path: impl AsRef<Path>, schema: Schema) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = Self::from_writer(file, schema)?;
        writer.summary = Summary::new(Some(path.to_path_buf()));
        Ok(writer)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(inner: W, schema: Schema) -> Result<Self> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        csv.write_record(schema.header())?;
        csv.flush()?;

        Ok(Self {
            csv,
            schema,
            summary: Summary::default(),
        })
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn rows_written(&self) -> usize {
        self.summary.total()
    }

    pub fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        let record = row.record(self.schema)?;
        self.csv.write_record(&record)?;
        self.csv.flush()?;
        self.summary.record(row.outcome().kind());
        debug!("wrote row {} for {}", self.summary.total(), row.filename());
        Ok(())
    }

    /// Output written so far.
    pub fn get_ref(&self) -> &W {
        self.csv.get_ref()
    }

    pub fn finish(mut self) -> Result<Summary> {
        self.csv.flush()?;
        Ok(self.summary)
    }
}
