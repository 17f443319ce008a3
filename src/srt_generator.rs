use std::path::Path;

use log::{debug, info};

use crate::app_config::{CaptionConfig, TextCase};
use crate::captions::{LinePacker, Timeline, TimelineAllocator};
use crate::errors::CaptionResult;
use crate::language::{self, LanguageProcessor};
use crate::subtitle_processor::{self, CaptionEntry};
use crate::validation;

// @module: Text to SRT pipeline

/// Turns narration text into timed SRT captions.
///
/// The language is resolved when the generator is built, so an unsupported
/// tag fails before any text is processed.
pub struct SrtGenerator {
    // @field: Sentence splitter and tokenizer for the language
    processor: Box<dyn LanguageProcessor>,

    // @field: Narration text
    text: String,

    // @field: Caption line packer
    packer: LinePacker,

    // @field: Timeline allocator
    allocator: TimelineAllocator,

    // @field: Case applied to the in-memory SRT and default file output
    text_case: TextCase,

    // @field: Timeline from the last conversion
    timeline: Timeline,

    // @field: SRT text from the last conversion
    srt: String,
}

impl SrtGenerator {
    /// Create a generator with the default caption settings
    pub fn new(language: &str, text: impl Into<String>) -> CaptionResult<Self> {
        Self::with_config(language, text, &CaptionConfig::default())
    }

    /// Create a generator with custom caption settings
    pub fn with_config(
        language: &str,
        text: impl Into<String>,
        config: &CaptionConfig,
    ) -> CaptionResult<Self> {
        let processor = language::create_processor(language, &config.segmentation_options())?;
        let max_line_length = config
            .max_line_length
            .unwrap_or_else(|| processor.default_max_line_length());

        let packer = LinePacker::new(max_line_length, processor.word_separator())?;
        let allocator = TimelineAllocator::new(config.seconds_per_line)?;

        Ok(Self {
            processor,
            text: text.into(),
            packer,
            allocator,
            text_case: config.text_case,
            timeline: Timeline::default(),
            srt: String::new(),
        })
    }

    /// ISO 639-1 code of the selected language
    pub fn language(&self) -> &'static str {
        self.processor.code()
    }

    pub fn max_line_length(&self) -> usize {
        self.packer.max_line_length()
    }

    /// Caption lines grouped by source sentence, in reading order
    pub fn caption_groups(&self) -> Vec<Vec<String>> {
        self.processor
            .segment(&self.text)
            .iter()
            .map(|sentence| {
                let tokens = self.processor.tokenize(&sentence.caption_text());
                self.packer.pack(&tokens)
            })
            .filter(|lines| !lines.is_empty())
            .collect()
    }

    /// Run the pipeline, keep the SRT text and entries in memory and return
    /// the total duration in seconds
    pub fn convert_to_srt(&mut self) -> u64 {
        let text_case = self.text_case;
        self.render(|text| text_case.apply(text))
    }

    // Build the timeline and render it once with `post_process`
    fn render<F>(&mut self, post_process: F) -> u64
    where
        F: Fn(&str) -> String,
    {
        let groups = self.caption_groups();
        let timeline = self.allocator.allocate(&groups);

        let passed = validation::check_captions(timeline.entries(), self.max_line_length());
        debug!("Caption timeline validation passed: {}", passed);

        self.srt = subtitle_processor::format_srt_with(timeline.entries(), post_process);
        self.timeline = timeline;

        info!(
            "Generated {} captions from {} sentences, {}s total",
            self.timeline.len(),
            groups.len(),
            self.timeline.total_duration()
        );

        self.timeline.total_duration()
    }

    /// SRT text from the last conversion or file write
    pub fn srt(&self) -> &str {
        &self.srt
    }

    /// Caption entries from the last conversion
    pub fn entries(&self) -> &[CaptionEntry] {
        self.timeline.entries()
    }

    /// Total duration of the last conversion in seconds
    pub fn total_duration(&self) -> u64 {
        self.timeline.total_duration()
    }

    /// Run the pipeline and write the SRT file, returning the total duration
    pub fn create_srt_file<P: AsRef<Path>>(&mut self, path: P) -> CaptionResult<u64> {
        let text_case = self.text_case;
        self.create_srt_file_with(path, |text| text_case.apply(text))
    }

    /// Run the pipeline and write the SRT file, passing every caption's text
    /// through `post_process` first. Returns the total duration.
    ///
    /// `srt()` afterwards returns exactly what was written.
    pub fn create_srt_file_with<P, F>(&mut self, path: P, post_process: F) -> CaptionResult<u64>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> String,
    {
        let duration = self.render(post_process);
        subtitle_processor::write_srt_text(path, &self.srt)?;
        Ok(duration)
    }
}

impl std::fmt::Debug for SrtGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SrtGenerator")
            .field("language", &self.language())
            .field("max_line_length", &self.max_line_length())
            .field("entries", &self.timeline.len())
            .finish()
    }
}
