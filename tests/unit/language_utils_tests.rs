/*!
 * Tests for ISO language tag utilities
 */

use encremagique::language_utils::{get_language_name, normalize_language_tag};

/// Test that all ISO spellings normalize to 639-1
#[test]
fn test_normalize_language_tag_withIsoVariants_shouldReturnPart1() {
    assert_eq!(normalize_language_tag("zh").unwrap(), "zh");
    assert_eq!(normalize_language_tag("zho").unwrap(), "zh");
    assert_eq!(normalize_language_tag("chi").unwrap(), "zh");
    assert_eq!(normalize_language_tag("ENG").unwrap(), "en");
}

/// Test that invalid tags are rejected
#[test]
fn test_normalize_language_tag_withInvalidTag_shouldFail() {
    assert!(normalize_language_tag("zzz").is_err());
    assert!(normalize_language_tag("english").is_err());
}

/// Test that language names are resolved
#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("chi").unwrap(), "Chinese");
    assert!(get_language_name("xx").is_err());
}
