use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

pub trait Tracker {
    fn step(&self, archive: &str);
    fn finish(self);
}

const PB_STYLE: &str = "{spinner:.blue} {prefix:>10.cyan.bold} {wide_bar:.cyan/blue} {pos}/{len} {wide_msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// Bar currently drawn on stderr, if any.
static ACTIVE_BAR: Lazy<Mutex<Option<ProgressBar>>> = Lazy::new(|| Mutex::new(None));

fn active_bar() -> MutexGuard<'static, Option<ProgressBar>> {
    ACTIVE_BAR.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Stderr writer for log output that hides the active progress bar while a
/// line is written, so bar redraws and log lines never interleave.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match active_bar().as_ref() {
            Some(pb) => pb.suspend(|| io::stderr().write(buf)),
            None => io::stderr().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match active_bar().as_ref() {
            Some(pb) => pb.suspend(|| io::stderr().write_all(buf)),
            None => io::stderr().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Per-archive progress on stderr. Hidden in verbose mode, where every
/// archive is logged instead.
pub struct ProgressTracker {
    pb: ProgressBar,
    visible: bool,
}

impl ProgressTracker {
    pub fn new(len: usize, visible: bool) -> Self {
        let pb = if visible {
            ProgressBar::new(len as u64)
        } else {
            ProgressBar::hidden()
        };
        let pb = match PB_TEMPLATE.as_ref() {
            Some(style) => pb.with_style(style.clone()),
            None => pb,
        };
        pb.set_prefix("Inspecting");
        if visible {
            *active_bar() = Some(pb.clone());
        }

        Self { pb, visible }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.pb.position()
    }
}

impl Tracker for ProgressTracker {
    fn step(&self, archive: &str) {
        self.pb.set_message(archive.to_owned());
        self.pb.inc(1);
    }

    fn finish(self) {
        if self.visible {
            active_bar().take();
        }
        self.pb.finish_and_clear();
    }
}
