/*!
 * Timeline allocation for packed caption lines.
 *
 * Every line gets the same fixed slot and lines follow each other without
 * gaps, so the timeline length is simply `slot * line_count`. Sentence
 * grouping only fixes the order of the lines.
 */

use log::debug;

use crate::errors::{CaptionError, CaptionResult};
use crate::subtitle_processor::CaptionEntry;

/// Screen time of a single caption line in seconds
pub const DEFAULT_SECONDS_PER_LINE: u64 = 3;

/// Timed caption entries plus the overall duration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<CaptionEntry>,
    total_duration: u64,
}

impl Timeline {
    pub fn entries(&self) -> &[CaptionEntry] {
        &self.entries
    }

    /// Duration in seconds, equal to the last entry's end time
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assigns start and end times to caption lines
#[derive(Debug, Clone)]
pub struct TimelineAllocator {
    seconds_per_line: u64,
}

impl TimelineAllocator {
    pub fn new(seconds_per_line: u64) -> CaptionResult<Self> {
        if seconds_per_line == 0 {
            return Err(CaptionError::InvalidConfig(
                "seconds_per_line must be greater than zero".to_string(),
            ));
        }

        Ok(Self { seconds_per_line })
    }

    pub fn seconds_per_line(&self) -> u64 {
        self.seconds_per_line
    }

    /// Allocate a contiguous timeline starting at 0.
    ///
    /// Indices start at 1 and keep counting across sentence groups.
    pub fn allocate<S: AsRef<str>>(&self, groups: &[Vec<S>]) -> Timeline {
        let mut entries = Vec::with_capacity(groups.iter().map(Vec::len).sum());
        let mut start_time = 0;

        for line in groups.iter().flatten() {
            let end_time = start_time + self.seconds_per_line;
            entries.push(CaptionEntry::new(
                entries.len() + 1,
                start_time,
                end_time,
                line.as_ref().to_string(),
            ));
            start_time = end_time;
        }

        debug!(
            "Allocated {} caption entries over {} sentence groups, {}s total",
            entries.len(),
            groups.len(),
            start_time
        );

        Timeline {
            entries,
            total_duration: start_time,
        }
    }
}

impl Default for TimelineAllocator {
    fn default() -> Self {
        Self {
            seconds_per_line: DEFAULT_SECONDS_PER_LINE,
        }
    }
}
