/*!
 * Chinese text segmentation.
 *
 * Sentences end at full-width terminators. Each sentence is then cut at
 * full-width commas and short clauses are glued back together.
 */

use jieba_rs::Jieba;
use log::debug;
use once_cell::sync::Lazy;

use super::{DEFAULT_CLAUSE_THRESHOLD, LanguageProcessor, Sentence, split_on_terminators};

// Dictionary is loaded once per process
static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// Sentence terminators
const TERMINATORS: &[char] = &['。', '！', '？'];

/// Clause separator used for splitting and re-joining
const CLAUSE_SEPARATOR: char = '，';

/// Token standing for a whitespace run inside a sentence
const WORD_SPACE: &str = " ";

/// Processor for Chinese (`zh`)
#[derive(Debug, Clone)]
pub struct ChineseProcessor {
    clause_threshold: usize,
}

impl ChineseProcessor {
    pub fn new() -> Self {
        Self::with_clause_threshold(DEFAULT_CLAUSE_THRESHOLD)
    }

    pub fn with_clause_threshold(clause_threshold: usize) -> Self {
        Self { clause_threshold }
    }

    /// Re-pack the clauses of one sentence into sentence candidates.
    ///
    /// A fragment joins the open candidate only while
    /// `len(candidate) + len(fragment) < clause_threshold`. Closed candidates
    /// end on the clause separator; the last one inherits the sentence's own
    /// terminator.
    fn repack_clauses(&self, sentence: Sentence) -> Vec<Sentence> {
        let fragments = sentence
            .body()
            .split(CLAUSE_SEPARATOR)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty());

        let mut candidates = Vec::new();
        let mut candidate = String::new();

        for fragment in fragments {
            if candidate.is_empty() {
                candidate.push_str(fragment);
                continue;
            }

            if candidate.chars().count() + fragment.chars().count() < self.clause_threshold {
                candidate.push(CLAUSE_SEPARATOR);
                candidate.push_str(fragment);
            } else {
                let closed = std::mem::replace(&mut candidate, fragment.to_string());
                candidates.push(Sentence::new(closed, CLAUSE_SEPARATOR.to_string()));
            }
        }

        if !candidate.is_empty() {
            candidates.push(Sentence::new(candidate, sentence.terminator()));
        }

        candidates
    }
}

impl Default for ChineseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for ChineseProcessor {
    fn code(&self) -> &'static str {
        "zh"
    }

    fn segment(&self, text: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = split_on_terminators(text, TERMINATORS, |_| true)
            .into_iter()
            .flat_map(|sentence| self.repack_clauses(sentence))
            .collect();

        debug!("Split Chinese text into {} sentences", sentences.len());
        sentences
    }

    /// Jieba words in order. Whitespace between embedded Latin words is kept
    /// as a single `" "` token; leading and trailing whitespace is dropped.
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();

        for word in JIEBA.cut(sentence, true) {
            if !word.trim().is_empty() {
                tokens.push(word.to_string());
            } else if tokens.last().is_some_and(|last| last != WORD_SPACE) {
                tokens.push(WORD_SPACE.to_string());
            }
        }

        if tokens.last().is_some_and(|last| last == WORD_SPACE) {
            tokens.pop();
        }

        tokens
    }

    fn word_separator(&self) -> &'static str {
        ""
    }
}
