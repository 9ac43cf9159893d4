use std::path::PathBuf;

use clap::{CommandFactory, Parser};

const LONG_ABOUT: &str = "Search for thumbnails in zip files and print report.
 - *.zip in current dir
 - *.zip in [-p path]
 - zip files listed in [-f csvfile]

Recognized thumbnail entries (root level, exact case):
thumbnail.jpg, thumbnail.png, thumbnail.gif, thumbnail.jpeg";

#[derive(Clone, Debug, Parser)]
#[command(
    name = "thumbprobe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Search for thumbnails in zip files and print report",
    long_about = LONG_ABOUT
)]
pub struct Args {
    /// CSV file with id,zip filename
    #[arg(short = 'f', long = "file", value_name = "csvfile")]
    pub manifest: Option<PathBuf>,

    /// Path to zip file(s)
    #[arg(short, long, value_name = "path")]
    pub path: Option<PathBuf>,

    /// Path to output file
    #[arg(short, long, value_name = "outfile")]
    pub out: Option<PathBuf>,

    /// Search for zip files recursively under the path
    #[arg(short, long, conflicts_with = "manifest")]
    pub recursive: bool,

    /// Print status messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable decompression bomb warning
    #[arg(short = 'w', long = "warning")]
    pub no_bomb_warning: bool,
}

pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
