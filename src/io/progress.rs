//! Directory and mask progress bars for batch runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::Path;
use std::sync::LazyLock;
use tracing_subscriber::fmt::MakeWriter;

/// Coordinates a directory bar and a per-directory mask bar
///
/// All update methods take `&self` so the analyzer can report through a
/// shared reference.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    directory_bar: Option<ProgressBar>,
    mask_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static DIRECTORY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Directories: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static MASK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "             Masks:       [{{bar:{PROGRESS_BAR_WIDTH}.green/white}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            directory_bar: None,
            mask_bar: None,
        }
    }

    /// Create both bars for a batch of `directory_count` directories
    pub fn initialize(&mut self, directory_count: usize) {
        let directory_bar = ProgressBar::new(directory_count as u64);
        directory_bar.set_style(DIRECTORY_STYLE.clone());
        self.directory_bar = Some(self.multi_progress.add(directory_bar));

        let mask_bar = ProgressBar::new(0);
        mask_bar.set_style(MASK_STYLE.clone());
        self.mask_bar = Some(self.multi_progress.add(mask_bar));
    }

    /// Reset the mask bar for a new directory
    pub fn start_directory(&self, dir: &Path, mask_count: usize) {
        if let Some(ref bar) = self.directory_bar {
            bar.set_message(display_name(dir));
        }
        if let Some(ref bar) = self.mask_bar {
            bar.set_length(mask_count as u64);
            bar.set_position(0);
            bar.set_message(String::new());
        }
    }

    /// Report that a mask has been handled, successfully or not
    pub fn complete_mask(&self, mask: &Path) {
        if let Some(ref bar) = self.mask_bar {
            bar.inc(1);
            bar.set_message(display_name(mask));
        }
    }

    /// Advance the directory bar
    pub fn complete_directory(&self) {
        if let Some(ref bar) = self.directory_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.mask_bar {
            bar.finish_and_clear();
        }
        if let Some(ref bar) = self.directory_bar {
            bar.finish_with_message("All directories processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Log sink that writes to stderr between redraws of these bars
    pub fn log_writer(&self) -> ProgressLogWriter {
        ProgressLogWriter {
            multi_progress: Some(self.multi_progress.clone()),
        }
    }

    /// Position of the directory bar, zero before initialization
    pub fn directories_completed(&self) -> u64 {
        self.directory_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Position of the mask bar, zero before initialization
    pub fn masks_completed(&self) -> u64 {
        self.mask_bar.as_ref().map_or(0, ProgressBar::position)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Stderr writer for log lines that hides attached progress bars while writing
///
/// Without bars it writes straight to stderr.
#[derive(Clone, Default)]
pub struct ProgressLogWriter {
    multi_progress: Option<MultiProgress>,
}

impl Write for ProgressLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi_progress.as_ref().map_or_else(
            || io::stderr().write(buf),
            |mp| mp.suspend(|| io::stderr().write(buf)),
        )
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.multi_progress.as_ref().map_or_else(
            || io::stderr().write_all(buf),
            |mp| mp.suspend(|| io::stderr().write_all(buf)),
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for ProgressLogWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
