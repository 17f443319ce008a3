use anyhow::{Result, anyhow};
use isolang::Language;

// @module: Language tag utilities
// Caption processors are registered under ISO 639-1 codes. These helpers
// accept the spellings users type (`zh`, `ZH`, `zho`, `chi`, `eng`) and
// reduce them to that canonical form.

/// ISO 639-2/B codes whose 639-2/T form differs
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("chi", "zho"),
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("cze", "ces"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

fn part2b_to_part2t(code: &str) -> &str {
    PART2B_TO_PART2T
        .iter()
        .find(|(b, _)| *b == code)
        .map_or(code, |(_, t)| *t)
}

/// Resolve a tag to an isolang language, accepting 639-1, 639-2/T and 639-2/B
fn resolve(tag: &str) -> Option<Language> {
    let code = tag.trim().to_lowercase();
    match code.len() {
        2 => Language::from_639_1(&code),
        3 => Language::from_639_3(part2b_to_part2t(&code)),
        _ => None,
    }
}

/// Normalize a language tag to ISO 639-1 if possible, ISO 639-2/T otherwise
pub fn normalize_language_tag(tag: &str) -> Result<String> {
    let lang = resolve(tag).ok_or_else(|| anyhow!("Invalid language code: {}", tag))?;

    Ok(lang
        .to_639_1()
        .map(str::to_string)
        .unwrap_or_else(|| lang.to_639_3().to_string()))
}

/// Get the English language name for a tag
pub fn get_language_name(tag: &str) -> Result<String> {
    resolve(tag)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", tag))
}
