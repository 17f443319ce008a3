use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::captions::DEFAULT_SECONDS_PER_LINE;
use crate::language::{self, DEFAULT_CLAUSE_THRESHOLD, SegmentationOptions};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Narration language tag (ISO)
    #[serde(default = "default_language")]
    pub language: String,

    /// Caption generation settings
    #[serde(default)]
    pub caption: CaptionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Caption generation settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CaptionConfig {
    /// Maximum characters per caption line; the language default when unset
    #[serde(default)]
    pub max_line_length: Option<usize>,

    /// Clause fragments are merged while their combined length stays below this
    #[serde(default = "default_clause_threshold")]
    pub clause_threshold: usize,

    /// Screen time of every caption line in seconds
    #[serde(default = "default_seconds_per_line")]
    pub seconds_per_line: u64,

    /// Case transformation applied to caption text when writing
    #[serde(default)]
    pub text_case: TextCase,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_line_length: None,
            clause_threshold: default_clause_threshold(),
            seconds_per_line: default_seconds_per_line(),
            text_case: TextCase::default(),
        }
    }
}

impl CaptionConfig {
    /// Segmentation options handed to the language processor
    pub fn segmentation_options(&self) -> SegmentationOptions {
        SegmentationOptions {
            clause_threshold: self.clause_threshold,
        }
    }
}

/// Case transformation for caption text
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    // @case: Text as written
    #[default]
    Unchanged,
    // @case: Upper case
    Upper,
    // @case: Lower case
    Lower,
}

impl TextCase {
    // @returns: Transformed caption text
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Unchanged => text.to_string(),
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
        }
    }
}

impl std::str::FromStr for TextCase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unchanged" | "none" => Ok(Self::Unchanged),
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            _ => Err(anyhow!("Invalid text case: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "zh".to_string()
}

fn default_clause_threshold() -> usize {
    DEFAULT_CLAUSE_THRESHOLD
}

fn default_seconds_per_line() -> u64 {
    DEFAULT_SECONDS_PER_LINE
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !language::is_supported(&self.language) {
            return Err(anyhow!(
                "Unsupported language '{}', expected one of: {}",
                self.language,
                language::supported_languages().join(", ")
            ));
        }

        if self.caption.max_line_length == Some(0) {
            return Err(anyhow!("max_line_length must be greater than zero"));
        }

        if self.caption.seconds_per_line == 0 {
            return Err(anyhow!("seconds_per_line must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            caption: CaptionConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
