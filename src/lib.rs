/*!
 * # Encremagique - narration text to SRT captions
 *
 * A Rust library that turns a block of narration text into SRT captions for
 * short-form video assembly.
 *
 * ## Features
 *
 * - Sentence segmentation for Chinese and English
 *   - Chinese clause fragments merged into readable captions
 *   - Chinese word segmentation with jieba
 * - Greedy packing of words into fixed-budget caption lines
 * - Contiguous fixed-slot timeline starting at zero
 * - SRT rendering with an optional text post-processing hook
 * - ISO 639-1, 639-2 and 639-3 language tags
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `language`: Per-language sentence splitting and tokenization
 *   - `language::chinese`: Chinese processor (jieba)
 *   - `language::english`: English processor
 * - `captions`: Line packing and timeline allocation
 * - `subtitle_processor`: Caption entries and SRT output
 * - `srt_generator`: The text to SRT pipeline
 * - `validation`: Timeline and line length checks
 * - `app_config`: Configuration management
 * - `app_controller`: File and folder runs for the command line
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod captions;
pub mod errors;
pub mod file_utils;
pub mod language;
pub mod language_utils;
pub mod srt_generator;
pub mod subtitle_processor;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::{CaptionConfig, Config, TextCase};
pub use errors::{CaptionError, CaptionResult};
pub use language::{LanguageProcessor, Sentence};
pub use language_utils::{get_language_name, normalize_language_tag};
pub use srt_generator::SrtGenerator;
pub use subtitle_processor::CaptionEntry;
