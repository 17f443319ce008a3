// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use encremagique::app_config::{self, Config, TextCase};
use encremagique::app_controller::{Controller, FileOutcome};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for TextCase to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTextCase {
    Upper,
    Lower,
}

impl From<CliTextCase> for TextCase {
    fn from(cli_case: CliTextCase) -> Self {
        match cli_case {
            CliTextCase::Upper => TextCase::Upper,
            CliTextCase::Lower => TextCase::Lower,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for encremagique
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Encremagique - narration text to SRT captions
///
/// Splits narration into sentences, packs them into short caption lines and
/// writes a contiguous SRT timeline for video assembly.
#[derive(Parser, Debug)]
#[command(name = "encremagique")]
#[command(version)]
#[command(about = "Narration text to SRT caption generator")]
#[command(long_about = "Encremagique turns narration text into SRT captions with fixed-length lines.

EXAMPLES:
    encremagique narration.txt                 # Captions next to the input, default config
    encremagique -l en script.txt              # English narration
    encremagique -m 16 -o out/ narration.txt   # Shorter lines, custom output directory
    encremagique --case upper script.txt       # Upper-case caption text
    encremagique -f scripts/                   # Every .txt file in a directory, overwriting
    encremagique completions bash > encremagique.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

OUTPUT:
    The total caption duration in seconds is printed on stdout for every
    generated file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Narration text file or directory of .txt files
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Narration language (zh, en)
    #[arg(short, long)]
    language: Option<String>,

    /// Output directory, defaults to the input's directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Maximum characters per caption line
    #[arg(short, long)]
    max_line_length: Option<usize>,

    /// Case transformation applied to caption text
    #[arg(long, value_enum)]
    case: Option<CliTextCase>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Label and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (label, colour) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                label,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config has been read
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "encremagique", &mut std::io::stdout());
        return Ok(());
    }

    run_generate(cli)
}

fn load_config(options: &CommandLineOptions) -> Result<Config> {
    let config_path = Path::new(&options.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", options.config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(language) = &options.language {
        config.language = language.clone();
    }

    if let Some(max_line_length) = options.max_line_length {
        config.caption.max_line_length = Some(max_line_length);
    }

    if let Some(case) = &options.case {
        config.caption.text_case = case.clone().into();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    Ok(config)
}

fn run_generate(options: CommandLineOptions) -> Result<()> {
    let input_path = options
        .input_path
        .clone()
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    // Apply the command line level before the config is read
    if let Some(cli_level) = &options.log_level {
        let level: app_config::LogLevel = cli_level.clone().into();
        log::set_max_level(LevelFilter::from(&level));
    }

    let config = load_config(&options)?;
    log::set_max_level(LevelFilter::from(&config.log_level));

    let controller = Controller::with_config(config)?;

    if input_path.is_file() {
        let output_dir = match &options.output {
            Some(dir) => dir.clone(),
            None => input_path.parent().unwrap_or(Path::new(".")).to_path_buf(),
        };

        if let FileOutcome::Written { output_path, duration } =
            controller.run(&input_path, &output_dir, options.force_overwrite)?
        {
            info!("Success: {:?}", output_path);
            println!("{}", duration);
        }
    } else if input_path.is_dir() {
        let summary =
            controller.run_folder(&input_path, options.output.as_deref(), options.force_overwrite)?;

        for (output_path, duration) in &summary.written {
            println!("{}\t{}", output_path.display(), duration);
        }

        if summary.errors > 0 {
            return Err(anyhow!("{} file(s) failed, see the log above", summary.errors));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    Ok(())
}
