/*!
 * Per-language sentence splitting and tokenization.
 *
 * Every supported language implements `LanguageProcessor`. Processors are
 * created through a registry keyed by ISO 639-1 code so that an unknown tag
 * is rejected before any text is touched.
 *
 * - `chinese`: jieba segmentation, full-width terminators, clause repacking
 * - `english`: whitespace tokens, `. ! ?` terminators
 */

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::errors::{CaptionError, CaptionResult};
use crate::language_utils;

pub mod chinese;
pub mod english;

pub use chinese::ChineseProcessor;
pub use english::EnglishProcessor;

/// Default clause repacking threshold in characters
pub const DEFAULT_CLAUSE_THRESHOLD: usize = 10;

/// A sentence produced by a splitter.
///
/// `body` never carries the terminal punctuation it was split on; the
/// consumed punctuation is kept in `terminator` so captions can show the
/// sentence as it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    body: String,
    terminator: String,
}

impl Sentence {
    pub fn new(body: impl Into<String>, terminator: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            terminator: terminator.into(),
        }
    }

    /// Sentence text without its terminal punctuation
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Punctuation the sentence was split on, empty at end of text
    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    /// Text shown on screen: the body followed by its terminator
    pub fn caption_text(&self) -> String {
        format!("{}{}", self.body, self.terminator)
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

/// Options shared by all processor factories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationOptions {
    /// Clause fragments are merged while their combined length stays below this
    pub clause_threshold: usize,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            clause_threshold: DEFAULT_CLAUSE_THRESHOLD,
        }
    }
}

/// Language-specific text segmentation
pub trait LanguageProcessor: Send + Sync {
    /// ISO 639-1 code this processor handles
    fn code(&self) -> &'static str;

    /// Split text into ordered sentences, keeping the consumed terminators
    fn segment(&self, text: &str) -> Vec<Sentence>;

    /// Split text into ordered, trimmed, non-empty sentence bodies
    fn split_sentences(&self, text: &str) -> Vec<String> {
        self.segment(text)
            .into_iter()
            .map(Sentence::into_body)
            .collect()
    }

    /// Split a sentence into word-like tokens
    fn tokenize(&self, sentence: &str) -> Vec<String>;

    /// Separator placed between tokens on one caption line
    fn word_separator(&self) -> &'static str;

    /// Caption line budget used when the caller does not set one
    fn default_max_line_length(&self) -> usize {
        20
    }
}

/// Factory building a processor from segmentation options
pub type ProcessorFactory = fn(&SegmentationOptions) -> Box<dyn LanguageProcessor>;

fn chinese_factory(options: &SegmentationOptions) -> Box<dyn LanguageProcessor> {
    Box::new(ChineseProcessor::with_clause_threshold(options.clause_threshold))
}

fn english_factory(_options: &SegmentationOptions) -> Box<dyn LanguageProcessor> {
    Box::new(EnglishProcessor::new())
}

static REGISTRY: Lazy<HashMap<&'static str, ProcessorFactory>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, ProcessorFactory> = HashMap::new();
    registry.insert("zh", chinese_factory);
    registry.insert("en", english_factory);
    registry
});

/// Codes with a registered processor, sorted
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = REGISTRY.keys().copied().collect();
    codes.sort_unstable();
    codes
}

/// Whether a tag resolves to a registered processor
pub fn is_supported(tag: &str) -> bool {
    language_utils::normalize_language_tag(tag)
        .map(|code| REGISTRY.contains_key(code.as_str()))
        .unwrap_or(false)
}

/// Create the processor registered for a language tag.
///
/// The tag may be any ISO 639 spelling of a supported language.
pub fn create_processor(
    tag: &str,
    options: &SegmentationOptions,
) -> CaptionResult<Box<dyn LanguageProcessor>> {
    let code = language_utils::normalize_language_tag(tag)
        .map_err(|_| CaptionError::UnsupportedLanguage(tag.to_string()))?;

    let factory = REGISTRY
        .get(code.as_str())
        .ok_or_else(|| CaptionError::UnsupportedLanguage(tag.to_string()))?;

    debug!("Using {} processor for language tag '{}'", code, tag);
    Ok(factory(options))
}

/// Split `text` after every run of terminator characters accepted by `accept`.
///
/// `accept` receives the text following the run and decides whether the run
/// is a real boundary. Bodies are trimmed and empty ones dropped.
pub(crate) fn split_on_terminators<F>(text: &str, terminators: &[char], accept: F) -> Vec<Sentence>
where
    F: Fn(&str) -> bool,
{
    let mut sentences = Vec::new();
    let mut body_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if !terminators.contains(&c) {
            continue;
        }

        let mut run_end = pos + c.len_utf8();
        while let Some(&(next_pos, next)) = chars.peek() {
            if !terminators.contains(&next) {
                break;
            }
            run_end = next_pos + next.len_utf8();
            chars.next();
        }

        if !accept(&text[run_end..]) {
            continue;
        }

        let body = text[body_start..pos].trim();
        if !body.is_empty() {
            sentences.push(Sentence::new(body, &text[pos..run_end]));
        }
        body_start = run_end;
    }

    let tail = text[body_start..].trim();
    if !tail.is_empty() {
        sentences.push(Sentence::new(tail, ""));
    }

    sentences
}
