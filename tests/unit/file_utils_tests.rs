/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use encremagique::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "narration.txt", "你好。")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that generate_output_path swaps the extension for srt
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(Path::new("/tmp/input/story.txt"), Path::new("/tmp/output"));
    assert_eq!(output_path, Path::new("/tmp/output/story.srt"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;
    FileManager::ensure_dir(&nested)?;

    assert!(FileManager::dir_exists(&nested));
    Ok(())
}

/// Test that find_files walks subdirectories and filters by extension
#[test]
fn test_find_files_shouldReturnMatchingFilesSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sub_dir = temp_dir.path().join("chapter");
    FileManager::ensure_dir(&sub_dir)?;

    common::create_test_file(temp_dir.path(), "b.txt", "b")?;
    common::create_test_file(temp_dir.path(), "a.TXT", "a")?;
    common::create_test_file(temp_dir.path(), "notes.md", "skip")?;
    common::create_test_file(&sub_dir, "c.txt", "c")?;

    let files = FileManager::find_files(temp_dir.path(), ".txt")?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();

    assert_eq!(names, vec!["a.TXT", "b.txt", "c.txt"]);
    Ok(())
}

/// Test that read_to_string reports missing files
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let err = FileManager::read_to_string("missing_narration.txt").unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
