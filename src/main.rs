// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, warn};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use mpl2srt::app_config::{Config, LineEnding, LogLevel};
use mpl2srt::app_controller::Controller;
use mpl2srt::file_utils::FileManager;

/// CLI Wrapper for LineEnding to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLineEnding {
    Native,
    Lf,
    Crlf,
}

impl From<CliLineEnding> for LineEnding {
    fn from(cli_ending: CliLineEnding) -> Self {
        match cli_ending {
            CliLineEnding::Native => LineEnding::Native,
            CliLineEnding::Lf => LineEnding::Lf,
            CliLineEnding::Crlf => LineEnding::CrLf,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for mpl2srt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// mpl2srt - MPL2 to SRT subtitle converter
///
/// Converts MPL2 subtitles to SubRip without changing the character encoding:
/// the output has the same encoding as the input.
#[derive(Parser, Debug)]
#[command(name = "mpl2srt")]
#[command(version)]
#[command(about = "MPL2 to SRT subtitle converter that preserves the input encoding")]
#[command(long_about = "mpl2srt converts MPL2 subtitles ([START][STOP]TEXT, times in tenths of a second) into SRT.
Text bytes are copied verbatim, so the output keeps the input encoding.

EXAMPLES:
    mpl2srt movie.txt -o movie.srt          # Convert a file
    mpl2srt < movie.txt > movie.srt         # Convert stdin to stdout
    mpl2srt --line-ending crlf movie.txt    # Force CRLF line endings
    mpl2srt completions bash > mpl2srt.bash # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// MPL2 input file (standard input when omitted or '-')
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// SRT output file (standard output when omitted or '-')
    #[arg(short, long, value_name = "OUTPUT")]
    out: Option<PathBuf>,

    /// Line terminator for the SRT output
    #[arg(long, value_enum)]
    line_ending: Option<CliLineEnding>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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

            // stdout may carry the SRT output, so logs only go to stderr
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // The logger accepts everything; log::max_level does the filtering
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }
    log::set_max_level(LogLevel::default().into());

    let cli = CommandLineOptions::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "mpl2srt", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it before loading the config
    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.into());
    }

    let mut config = load_config(&cli)?;

    if let Some(line_ending) = &cli.line_ending {
        config.line_ending = line_ending.clone().into();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    log::set_max_level(config.log_level.into());

    debug!("Using line ending: {}", config.line_ending);

    let input = FileManager::open_input(cli.input.as_deref())?;
    let output = FileManager::open_output(cli.out.as_deref())?;

    let controller = Controller::with_config(&config);
    controller
        .convert(input, output)
        .context("Conversion failed")?;

    Ok(())
}

fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let Some(config_path) = &cli.config else {
        return Ok(Config::default());
    };

    if config_path.exists() {
        let config = Config::load(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path.display()))?;
        Ok(config)
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path.display()
        );
        let config = Config::default();
        config
            .save(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path.display()))?;
        Ok(config)
    }
}
