use std::path::{Path, PathBuf};

use thumbprobe_archive::InspectOptions;
use thumbprobe_report::Schema;

use crate::cli::Args;

pub const DEFAULT_OUTPUT: &str = "results.csv";

const VERBOSE_FILTER: &str = "warn,thumbprobe=info,thumbprobe_archive=info,thumbprobe_report=info";
const QUIET_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Directory { recursive: bool },
    Manifest { manifest: PathBuf },
}

/// Settings for one run, fixed once the command line is parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// Search root in directory mode, base for manifest filenames otherwise.
    pub base: Option<PathBuf>,
    pub output: PathBuf,
    pub verbose: bool,
    pub bomb_warning: bool,
}

impl RunConfig {
    pub fn from_args(args: &Args) -> Self {
        let mode = match &args.manifest {
            Some(manifest) => Mode::Manifest {
                manifest: manifest.clone(),
            },
            None => Mode::Directory {
                recursive: args.recursive,
            },
        };

        let output = match (&args.out, &mode) {
            (Some(out), _) => out.clone(),
            (None, Mode::Manifest { manifest }) => manifest_output(manifest),
            (None, Mode::Directory { .. }) => PathBuf::from(DEFAULT_OUTPUT),
        };

        Self {
            mode,
            base: args.path.clone(),
            output,
            verbose: args.verbose,
            bomb_warning: !args.no_bomb_warning,
        }
    }

    pub fn search_root(&self) -> &Path {
        self.base.as_deref().unwrap_or(Path::new("."))
    }

    /// Location of an archive named in the manifest.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(filename),
            None => PathBuf::from(filename),
        }
    }

    pub fn schema(&self) -> Schema {
        match self.mode {
            Mode::Directory { .. } => Schema::Directory,
            Mode::Manifest { .. } => Schema::Manifest,
        }
    }

    pub fn inspect_options(&self) -> InspectOptions {
        InspectOptions::default().bomb_warning(self.bomb_warning)
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { VERBOSE_FILTER } else { QUIET_FILTER }
    }
}

/// `<stem>-results.csv` in the working directory, where the stem is the
/// manifest file name up to its first dot.
fn manifest_output(manifest: &Path) -> PathBuf {
    let name = manifest
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').find(|part| !part.is_empty()).unwrap_or("manifest");
    PathBuf::from(format!("{stem}-results.csv"))
}
