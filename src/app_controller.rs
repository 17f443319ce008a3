use anyhow::{Context, Result, anyhow};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::{self, FileManager};
use crate::language_utils;
use crate::srt_generator::SrtGenerator;

// @module: Application controller for caption generation

/// Outcome of processing one narration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Captions were written
    Written { output_path: PathBuf, duration: u64 },
    /// Output already existed and overwriting was not requested
    Skipped { output_path: PathBuf },
}

/// Totals of a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Written caption files with their durations in seconds
    pub written: Vec<(PathBuf, u64)>,
}

impl FolderSummary {
    /// Sum of the durations of every written file
    pub fn total_duration(&self) -> u64 {
        self.written.iter().map(|(_, duration)| duration).sum()
    }
}

/// Main application controller for caption generation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: English name of the narration language, for log output
    language_name: String,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let language_name = language_utils::get_language_name(&config.language)?;

        Ok(Self {
            config,
            language_name,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    /// Generate captions for one narration file into `output_dir`
    pub fn run(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<FileOutcome> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(output_dir)?;

        let output_path = FileManager::generate_output_path(input_file, output_dir);
        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, captions already exist (use -f to force overwrite)",
                output_path
            );
            return Ok(FileOutcome::Skipped { output_path });
        }

        let text = FileManager::read_to_string(input_file)?;
        let mut generator = SrtGenerator::with_config(&self.config.language, text, &self.config.caption)?;
        let duration = generator
            .create_srt_file(&output_path)
            .with_context(|| format!("Failed to write captions for {:?}", input_file))?;

        info!(
            "Wrote {} {} captions to {:?} in {}",
            generator.entries().len(),
            self.language_name,
            output_path,
            Self::format_duration(start_time.elapsed())
        );

        Ok(FileOutcome::Written { output_path, duration })
    }

    /// Generate captions for every `.txt` file under `input_dir`.
    ///
    /// Captions land next to their input unless `output_dir` is given. A
    /// failing file is logged and counted, the rest still run.
    pub fn run_folder(
        &self,
        input_dir: &Path,
        output_dir: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let text_files = FileManager::find_files(input_dir, file_utils::TEXT_EXTENSION)?;
        if text_files.is_empty() {
            return Err(anyhow!("No text files found in directory: {:?}", input_dir));
        }

        let mut summary = FolderSummary::default();

        for text_file in &text_files {
            let target_dir = match (output_dir, text_file.parent()) {
                (Some(dir), _) => dir.to_path_buf(),
                (None, Some(parent)) => parent.to_path_buf(),
                (None, None) => input_dir.to_path_buf(),
            };

            match self.run(text_file, &target_dir, force_overwrite) {
                Ok(FileOutcome::Written { output_path, duration }) => {
                    summary.processed += 1;
                    summary.written.push((output_path, duration));
                }
                Ok(FileOutcome::Skipped { .. }) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {:?}: {:#}", text_file, e);
                    summary.errors += 1;
                }
            }
        }

        info!(
            "Folder processing completed: {} processed, {} skipped, {} errors",
            summary.processed, summary.skipped, summary.errors
        );

        Ok(summary)
    }

    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
