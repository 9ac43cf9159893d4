use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// One `(id, filename)` line of an input manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestRow {
    pub id: String,
    pub filename: String,
}

pub fn read_manifest(path: &Path) -> Result<Vec<ManifestRow>> {
    let file = File::open(path).with_context(|| {
        format!(
            "Error reading input file {}\nExpect CSV file with unique id(column 1) and zip filename (column 2)",
            path.display()
        )
    })?;
    parse_manifest(file).with_context(|| format!("invalid manifest {}", path.display()))
}

/// Parse every row up front so a malformed line aborts before any output
/// is produced. Columns past the second are ignored; blank lines are skipped.
pub fn parse_manifest<R: Read>(reader: R) -> Result<Vec<ManifestRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse manifest row")?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map_or(0, |pos| pos.line());
        let (Some(id), Some(filename)) = (record.get(0), record.get(1)) else {
            bail!(
                "line {line}: expected unique id and zip filename, found {} column(s)",
                record.len()
            );
        };

        rows.push(ManifestRow {
            id: id.to_owned(),
            filename: filename.to_owned(),
        });
    }

    Ok(rows)
}
