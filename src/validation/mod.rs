/*!
 * Validation of generated caption timelines.
 *
 * - `timecodes`: numbering, contiguity and timestamp range
 * - `length`: caption line budgets
 */

pub mod length;
pub mod timecodes;

use log::{debug, warn};

use crate::subtitle_processor::CaptionEntry;

// Re-export main types
pub use length::{LineLengthIssue, LineLengthValidator};
pub use timecodes::{TimelineIssue, TimelineValidator, TimelineValidatorConfig};

/// Run both validators and log every finding.
///
/// Returns whether the timeline passed; timestamps past the one-minute range
/// do not fail it and are only logged at debug level here.
pub fn check_captions(entries: &[CaptionEntry], max_line_length: usize) -> bool {
    let timeline = TimelineValidator::new().validate_timeline(entries);
    let lengths = LineLengthValidator::new(max_line_length).validate_collection(entries);

    // The timestamp range limitation is reported once by the SRT renderer
    for result in &timeline.entry_results {
        for issue in &result.issues {
            match issue {
                TimelineIssue::BeyondTimestampRange { .. } => {
                    debug!("Caption {}: {}", result.index, issue)
                }
                _ => warn!("Caption {}: {}", result.index, issue),
            }
        }
    }

    for result in lengths.failed_entries() {
        for issue in &result.issues {
            warn!("Caption {}: {}", result.index, issue);
        }
    }

    timeline.passed && lengths.passed
}
