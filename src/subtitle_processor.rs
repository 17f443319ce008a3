use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::errors::{CaptionError, CaptionResult};

// @module: SubRip rendering and writing

/// Last second a `00:00:SS` timestamp can express
pub const MAX_TIMESTAMP_SECONDS: u64 = 59;

// @struct: Single timed caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionEntry {
    // @field: 1-based sequence number
    pub index: usize,

    // @field: Start time in seconds
    pub start_time: u64,

    // @field: End time in seconds
    pub end_time: u64,

    // @field: Caption line shown on screen
    pub text: String,
}

impl CaptionEntry {
    pub fn new(index: usize, start_time: u64, end_time: u64, text: String) -> Self {
        CaptionEntry {
            index,
            start_time,
            end_time,
            text,
        }
    }

    /// Screen time in seconds
    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time)
    }

    /// Format whole seconds as `00:00:SS,000`.
    ///
    /// There is no minutes rollover: 75 seconds renders as `00:00:75,000`.
    /// Timelines longer than `MAX_TIMESTAMP_SECONDS` are outside what this
    /// format supports.
    pub fn format_timestamp(seconds: u64) -> String {
        format!("00:00:{:02},000", seconds)
    }

    /// Same entry with its text passed through `post_process`
    fn with_text<F>(&self, post_process: &F) -> Self
    where
        F: Fn(&str) -> String,
    {
        CaptionEntry {
            text: post_process(&self.text),
            ..self.clone()
        }
    }
}

impl fmt::Display for CaptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Render entries as SRT text
pub fn format_srt(entries: &[CaptionEntry]) -> String {
    format_srt_with(entries, |text| text.to_string())
}

/// Render entries as SRT text, transforming each caption's text first.
///
/// Timing is never affected by `post_process`.
pub fn format_srt_with<F>(entries: &[CaptionEntry], post_process: F) -> String
where
    F: Fn(&str) -> String,
{
    if let Some(last) = entries.last() {
        if last.end_time > MAX_TIMESTAMP_SECONDS {
            warn!(
                "Timeline of {}s exceeds the {}s range of SRT timestamps without minutes; \
                 timestamps past that point will not be valid SubRip",
                last.end_time, MAX_TIMESTAMP_SECONDS
            );
        }
    }

    entries
        .iter()
        .map(|entry| entry.with_text(&post_process).to_string())
        .collect()
}

/// Write entries to an SRT file and return the total duration in seconds.
///
/// The whole document is rendered before the file is opened. An existing
/// file is truncated; missing parent directories are an error.
pub fn write_srt_file<P, F>(entries: &[CaptionEntry], path: P, post_process: F) -> CaptionResult<u64>
where
    P: AsRef<Path>,
    F: Fn(&str) -> String,
{
    let content = format_srt_with(entries, post_process);
    write_srt_text(path, &content)?;

    Ok(entries.last().map_or(0, |entry| entry.end_time))
}

/// Write already rendered SRT text in one call, truncating an existing file
pub fn write_srt_text<P: AsRef<Path>>(path: P, content: &str) -> CaptionResult<()> {
    let path = path.as_ref();

    let io_error = |source| CaptionError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;

    debug!("Wrote {} bytes of captions to {}", content.len(), path.display());
    Ok(())
}
