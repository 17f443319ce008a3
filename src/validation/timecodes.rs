/*!
 * Timeline validation for caption entries.
 *
 * This module checks that a caption timeline is:
 * - Sequentially numbered from 1
 * - Starting at 0 with `end >= start` for every entry
 * - Contiguous (no gaps, no overlaps)
 * - Within the range `00:00:SS` timestamps can express
 */

use log::debug;

use crate::subtitle_processor::{CaptionEntry, MAX_TIMESTAMP_SECONDS};

/// Result of timeline validation for a single entry
#[derive(Debug, Clone)]
pub struct TimelineEntryResult {
    /// Index of the entry
    pub index: usize,
    /// Whether the entry passed validation
    pub passed: bool,
    /// Issues found
    pub issues: Vec<TimelineIssue>,
}

impl TimelineEntryResult {
    fn new(index: usize) -> Self {
        Self {
            index,
            passed: true,
            issues: vec![],
        }
    }

    fn fail(&mut self, issue: TimelineIssue) {
        self.passed = false;
        self.issues.push(issue);
    }
}

/// Types of timeline issues
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineIssue {
    /// Index does not continue the sequence
    NonSequentialIndex {
        expected: usize,
        found: usize,
    },
    /// End time is before start time
    InvalidTimeRange {
        start: u64,
        end: u64,
    },
    /// First entry does not start at 0
    LateStart {
        start: u64,
    },
    /// Gap after the previous entry
    Gap {
        prev_index: usize,
        gap: u64,
    },
    /// Overlaps the previous entry
    Overlap {
        prev_index: usize,
        overlap: u64,
    },
    /// End time cannot be written as `00:00:SS`
    BeyondTimestampRange {
        end: u64,
    },
}

impl std::fmt::Display for TimelineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineIssue::NonSequentialIndex { expected, found } => {
                write!(f, "Expected index {} but found {}", expected, found)
            }
            TimelineIssue::InvalidTimeRange { start, end } => {
                write!(f, "Invalid time range: start {}s > end {}s", start, end)
            }
            TimelineIssue::LateStart { start } => {
                write!(f, "Timeline starts at {}s instead of 0s", start)
            }
            TimelineIssue::Gap { prev_index, gap } => {
                write!(f, "Gap of {}s after entry {}", gap, prev_index)
            }
            TimelineIssue::Overlap { prev_index, overlap } => {
                write!(f, "Overlaps with entry {} by {}s", prev_index, overlap)
            }
            TimelineIssue::BeyondTimestampRange { end } => {
                write!(
                    f,
                    "End time {}s exceeds the {}s timestamp range",
                    end, MAX_TIMESTAMP_SECONDS
                )
            }
        }
    }
}

/// Result of validating a whole timeline
#[derive(Debug, Clone)]
pub struct TimelineValidationResult {
    /// Overall pass/fail status
    pub passed: bool,
    /// Results for each entry
    pub entry_results: Vec<TimelineEntryResult>,
    /// Total number of issues, warnings included
    pub total_issues: usize,
}

impl TimelineValidationResult {
    /// Get all failed entries
    pub fn failed_entries(&self) -> Vec<&TimelineEntryResult> {
        self.entry_results.iter().filter(|r| !r.passed).collect()
    }

    /// All issues in entry order
    pub fn issues(&self) -> impl Iterator<Item = &TimelineIssue> {
        self.entry_results.iter().flat_map(|r| r.issues.iter())
    }
}

/// Configuration for timeline validation
#[derive(Debug, Clone)]
pub struct TimelineValidatorConfig {
    /// Whether gaps between entries fail validation
    pub require_contiguous: bool,
    /// Whether to warn about end times past the timestamp range
    pub check_timestamp_range: bool,
}

impl Default for TimelineValidatorConfig {
    fn default() -> Self {
        Self {
            require_contiguous: true,
            check_timestamp_range: true,
        }
    }
}

/// Timeline validator for caption entries
#[derive(Default)]
pub struct TimelineValidator {
    config: TimelineValidatorConfig,
}

impl TimelineValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: TimelineValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate an ordered timeline
    pub fn validate_timeline(&self, entries: &[CaptionEntry]) -> TimelineValidationResult {
        let mut entry_results = Vec::with_capacity(entries.len());
        let mut previous: Option<&CaptionEntry> = None;

        for (position, entry) in entries.iter().enumerate() {
            let mut result = TimelineEntryResult::new(entry.index);

            if entry.index != position + 1 {
                result.fail(TimelineIssue::NonSequentialIndex {
                    expected: position + 1,
                    found: entry.index,
                });
            }

            if entry.end_time < entry.start_time {
                result.fail(TimelineIssue::InvalidTimeRange {
                    start: entry.start_time,
                    end: entry.end_time,
                });
            }

            match previous {
                None if entry.start_time != 0 => {
                    result.fail(TimelineIssue::LateStart {
                        start: entry.start_time,
                    });
                }
                Some(prev) if prev.end_time > entry.start_time => {
                    result.fail(TimelineIssue::Overlap {
                        prev_index: prev.index,
                        overlap: prev.end_time - entry.start_time,
                    });
                }
                Some(prev) if prev.end_time < entry.start_time => {
                    let issue = TimelineIssue::Gap {
                        prev_index: prev.index,
                        gap: entry.start_time - prev.end_time,
                    };
                    if self.config.require_contiguous {
                        result.fail(issue);
                    } else {
                        result.issues.push(issue);
                    }
                }
                _ => {}
            }

            // Out-of-range timestamps are a documented limitation, not a failure
            if self.config.check_timestamp_range && entry.end_time > MAX_TIMESTAMP_SECONDS {
                result.issues.push(TimelineIssue::BeyondTimestampRange {
                    end: entry.end_time,
                });
            }

            entry_results.push(result);
            previous = Some(entry);
        }

        let total_issues: usize = entry_results.iter().map(|r| r.issues.len()).sum();
        let passed = entry_results.iter().all(|r| r.passed);

        debug!(
            "Timeline validation: {} entries, {} issues",
            entries.len(),
            total_issues
        );

        TimelineValidationResult {
            passed,
            entry_results,
            total_issues,
        }
    }
}
