/*!
 * Line length validation for caption entries.
 *
 * Checks every caption line against the packer budget:
 * - No empty lines
 * - No line longer than `max_line_length` characters
 */

use log::debug;

use crate::subtitle_processor::CaptionEntry;

/// Result of length validation for a single entry
#[derive(Debug, Clone)]
pub struct LineLengthEntryResult {
    /// Entry index
    pub index: usize,
    /// Whether validation passed
    pub passed: bool,
    /// Issues found
    pub issues: Vec<LineLengthIssue>,
    /// Line length in characters
    pub length: usize,
}

/// Types of length issues
#[derive(Debug, Clone, PartialEq)]
pub enum LineLengthIssue {
    /// Caption line is empty
    EmptyLine,
    /// Caption line exceeds the budget
    LineTooLong { length: usize, max_length: usize },
}

impl std::fmt::Display for LineLengthIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineLengthIssue::EmptyLine => write!(f, "Caption line is empty"),
            LineLengthIssue::LineTooLong { length, max_length } => {
                write!(f, "Caption line too long: {} chars (max: {})", length, max_length)
            }
        }
    }
}

/// Result of validating lengths for a timeline
#[derive(Debug, Clone)]
pub struct LineLengthValidationResult {
    /// Overall pass/fail status
    pub passed: bool,
    /// Results for each entry
    pub entry_results: Vec<LineLengthEntryResult>,
    /// Longest line seen, in characters
    pub longest_line: usize,
}

impl LineLengthValidationResult {
    /// Get all failed entries
    pub fn failed_entries(&self) -> Vec<&LineLengthEntryResult> {
        self.entry_results.iter().filter(|r| !r.passed).collect()
    }
}

/// Length validator for caption lines
pub struct LineLengthValidator {
    max_line_length: usize,
}

impl LineLengthValidator {
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    /// Validate a single caption entry
    pub fn validate_entry(&self, entry: &CaptionEntry) -> LineLengthEntryResult {
        let length = entry.text.chars().count();
        let mut issues = Vec::new();

        if entry.text.trim().is_empty() {
            issues.push(LineLengthIssue::EmptyLine);
        } else if length > self.max_line_length {
            issues.push(LineLengthIssue::LineTooLong {
                length,
                max_length: self.max_line_length,
            });
        }

        LineLengthEntryResult {
            index: entry.index,
            passed: issues.is_empty(),
            issues,
            length,
        }
    }

    /// Validate every entry of a timeline
    pub fn validate_collection(&self, entries: &[CaptionEntry]) -> LineLengthValidationResult {
        let entry_results: Vec<LineLengthEntryResult> =
            entries.iter().map(|e| self.validate_entry(e)).collect();

        let passed = entry_results.iter().all(|r| r.passed);
        let longest_line = entry_results.iter().map(|r| r.length).max().unwrap_or(0);

        debug!(
            "Line length validation: {} entries, longest {} chars (max: {})",
            entries.len(),
            longest_line,
            self.max_line_length
        );

        LineLengthValidationResult {
            passed,
            entry_results,
            longest_line,
        }
    }
}
