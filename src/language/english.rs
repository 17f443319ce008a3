/*!
 * English text segmentation.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{LanguageProcessor, Sentence, split_on_terminators};

// @const: Runs of whitespace inside a sentence, including wrapped lines
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Sentence terminators
const TERMINATORS: &[char] = &['.', '!', '?'];

/// Processor for English (`en`)
#[derive(Debug, Clone, Default)]
pub struct EnglishProcessor;

impl EnglishProcessor {
    pub fn new() -> Self {
        Self
    }

    // A terminator run only ends a sentence before whitespace or end of text,
    // which keeps "3.14" and "node.js" in one piece
    fn is_boundary(rest: &str) -> bool {
        rest.chars().next().is_none_or(char::is_whitespace)
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn code(&self) -> &'static str {
        "en"
    }

    fn segment(&self, text: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = split_on_terminators(text, TERMINATORS, Self::is_boundary)
            .into_iter()
            .map(|sentence| {
                let body = WHITESPACE_REGEX.replace_all(sentence.body(), " ");
                Sentence::new(body, sentence.terminator())
            })
            .collect();

        debug!("Split English text into {} sentences", sentences.len());
        sentences
    }

    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    fn word_separator(&self) -> &'static str {
        " "
    }
}
