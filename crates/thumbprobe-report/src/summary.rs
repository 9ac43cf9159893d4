use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};
use thumbprobe_archive::OutcomeKind;

/// Outcome tallies for one run. Printed to the operator, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    destination: Option<PathBuf>,
    counts: BTreeMap<OutcomeKind, usize>,
}

#[derive(Tabled)]
struct SummaryLine {
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Archives")]
    count: usize,
}

impl Summary {
    pub fn new(destination: Option<PathBuf>) -> Self {
        Self {
            destination,
            counts: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, kind: OutcomeKind) {
        *self.counts.entry(kind).or_default() += 1;
    }

    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Archives with a decodable thumbnail.
    pub fn passed(&self) -> usize {
        self.count(OutcomeKind::Found)
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub fn table(&self) -> Table {
        let lines = OutcomeKind::ALL
            .into_iter()
            .filter(|kind| self.count(*kind) > 0)
            .map(|kind| SummaryLine {
                status: kind.label(),
                count: self.count(kind),
            });

        let mut table = Table::new(lines);
        table.with(Panel::footer(format!(
            "{} archives: {} passed, {} failed",
            self.total(),
            self.passed(),
            self.failed()
        )));
        table.with(Style::blank());
        table
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.table())?;
        if let Some(path) = &self.destination {
            write!(f, "\nSee {}", path.display())?;
        }
        Ok(())
    }
}
