/*!
 * Tests for caption entries and SRT rendering
 */

use anyhow::Result;
use encremagique::errors::CaptionError;
use encremagique::subtitle_processor::{self, CaptionEntry};
use crate::common;

fn sample_entries() -> Vec<CaptionEntry> {
    vec![
        CaptionEntry::new(1, 0, 3, "This is a".to_string()),
        CaptionEntry::new(2, 3, 6, "test.".to_string()),
    ]
}

/// Test timestamp formatting without minutes rollover
#[test]
fn test_format_timestamp_shouldPadSeconds() {
    assert_eq!(CaptionEntry::format_timestamp(0), "00:00:00,000");
    assert_eq!(CaptionEntry::format_timestamp(9), "00:00:09,000");
    assert_eq!(CaptionEntry::format_timestamp(59), "00:00:59,000");
    assert_eq!(CaptionEntry::format_timestamp(75), "00:00:75,000");
}

/// Test that a single entry renders as one SRT block
#[test]
fn test_display_shouldRenderSrtBlock() {
    let entry = CaptionEntry::new(3, 6, 9, "这是第二个长句子。".to_string());
    assert_eq!(entry.to_string(), "3\n00:00:06,000 --> 00:00:09,000\n这是第二个长句子。\n\n");
    assert_eq!(entry.duration(), 3);
}

/// Test that rendering concatenates blocks in order
#[test]
fn test_format_srt_shouldConcatenateBlocks() {
    let srt = subtitle_processor::format_srt(&sample_entries());
    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:03,000\nThis is a\n\n2\n00:00:03,000 --> 00:00:06,000\ntest.\n\n"
    );
}

/// Test that rendering twice gives the same text
#[test]
fn test_format_srt_shouldBeIdempotent() {
    let entries = sample_entries();
    assert_eq!(subtitle_processor::format_srt(&entries), subtitle_processor::format_srt(&entries));
}

/// Test that empty input renders nothing
#[test]
fn test_format_srt_withNoEntries_shouldBeEmpty() {
    assert_eq!(subtitle_processor::format_srt(&[]), "");
}

/// Test that the post-process hook changes text only
#[test]
fn test_format_srt_with_withUppercase_shouldKeepTiming() {
    let srt = subtitle_processor::format_srt_with(&sample_entries(), |text| text.to_uppercase());
    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:03,000\nTHIS IS A\n\n2\n00:00:03,000 --> 00:00:06,000\nTEST.\n\n"
    );
}

/// Test that writing returns the last end time and the rendered text
#[test]
fn test_write_srt_file_shouldWriteAndReturnDuration() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("captions.srt");

    let duration = subtitle_processor::write_srt_file(&sample_entries(), &path, |t| t.to_string())?;

    assert_eq!(duration, 6);
    assert_eq!(std::fs::read_to_string(&path)?, subtitle_processor::format_srt(&sample_entries()));
    Ok(())
}

/// Test that an existing file is truncated
#[test]
fn test_write_srt_file_withExistingFile_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "captions.srt", &"stale\n".repeat(100))?;

    subtitle_processor::write_srt_file(&sample_entries()[..1], &path, |t| t.to_string())?;

    assert_eq!(
        std::fs::read_to_string(&path)?,
        "1\n00:00:00,000 --> 00:00:03,000\nThis is a\n\n"
    );
    Ok(())
}

/// Test that a missing parent directory is an I/O error
#[test]
fn test_write_srt_file_withMissingDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing").join("captions.srt");

    let err = subtitle_processor::write_srt_file(&sample_entries(), &path, |t| t.to_string()).unwrap_err();

    match err {
        CaptionError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {}", other),
    }
    Ok(())
}
