//! Command-line interface for moodgen
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Applying argument overrides on top of the configuration
//! - Dispatching to the export, validate, list and config commands

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{Config, LogLevel};
use crate::error::Result;
use crate::exporter::{ExportOptions, ExportReport, Exporter};
use crate::record::{self, MoodRecord, RecordSource};

/// Mood button data generator
#[derive(Parser, Debug)]
#[command(
    name = "moodgen",
    version,
    about = "Generates the mood button data file for the MoodColor UI",
    long_about = "Writes the ordered list of mood buttons (id, label, color, icon) as a
pretty-printed JSON array. Moods come from a record file, the configuration file,
or the built-in set, in that order of preference."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Directory the data file is written to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Data file name
    #[arg(short = 'f', long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Record file to export (.json array or .toml with [[moods]] tables)
    #[arg(short = 'r', long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// JSON indentation width (0 for compact output)
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Skip record validation
    #[arg(long)]
    pub no_validate: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for moodgen
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the data file (default)
    Export,

    /// Check the moods without writing anything
    Validate,

    /// Print the moods that would be exported
    List {
        /// Print the exact JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Show version information
    Version,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,

    /// Configuration file the settings were read from
    config_source: Option<PathBuf>,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let (config, config_source) = Self::load_config(&args)?;
        Ok(Self {
            args,
            config,
            config_source,
        })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// `config --validate` inspects the file itself, so for that command a
    /// file that fails to load or validate falls back to defaults instead of
    /// aborting.
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<(Config, Option<PathBuf>)>` - Configuration and the file it came from
    fn load_config(args: &CliArgs) -> Result<(Config, Option<PathBuf>)> {
        let checking_file = matches!(args.command, Some(Commands::Config { validate: true, .. }));

        let loaded = Config::locate(args.config_file.as_deref()).and_then(|source| {
            let config = match &source {
                Some(path) => Config::read_file(path)?,
                None => Config::default(),
            };
            Ok((config, source))
        });

        let (mut config, source) = match loaded {
            Ok(loaded) => loaded,
            Err(_) if checking_file => (Config::default(), None),
            Err(e) => return Err(e),
        };

        // Apply CLI arguments to override config values
        Self::apply_args_to_config(&mut config, args);

        if !checking_file {
            config.validate()?;
        }
        Ok((config, source))
    }

    /// Get the configuration
    ///
    /// # Returns
    /// * `&Config` - Reference to configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    ///
    /// # Returns
    /// * `&CliArgs` - Reference to arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_export_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply export-related CLI arguments to configuration
    fn apply_export_args(config: &mut Config, args: &CliArgs) {
        if let Some(dir) = &args.output_dir {
            config.export.output_dir = dir.clone();
        }

        if let Some(filename) = &args.filename {
            config.export.filename = filename.clone();
        }

        if let Some(indent) = args.indent {
            config.export.indent = indent;
        }

        if args.no_validate {
            config.export.validate = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Build an exporter from the effective configuration
    pub fn exporter(&self) -> Exporter {
        Exporter::new(ExportOptions::from(&self.config.export))
    }

    /// Resolve the moods to work on
    ///
    /// # Returns
    /// * `Result<(Vec<MoodRecord>, RecordSource)>` - Records and their origin
    pub fn resolve_records(&self) -> Result<(Vec<MoodRecord>, RecordSource)> {
        let (records, source) =
            record::resolve_records(self.args.records.as_deref(), &self.config.moods)?;
        debug!("Using {} mood record(s) from {}", records.len(), source);
        Ok((records, source))
    }

    /// Run the selected command
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn run(&self) -> Result<()> {
        match &self.config_source {
            Some(path) => debug!("Loaded configuration from {}", path.display()),
            None => debug!("No configuration file found, using defaults"),
        }

        match self.args.command.clone().unwrap_or(Commands::Export) {
            Commands::Export => {
                let report = self.run_export()?;
                if let Some(line) = self.confirmation(&report) {
                    println!("{line}");
                }
            }
            Commands::Validate => self.run_validate()?,
            Commands::List { json } => self.run_list(json)?,
            Commands::Config { show, validate } => self.handle_config_command(show, validate)?,
            Commands::Version => self.show_version(),
        }

        Ok(())
    }

    /// Export the resolved moods to the configured location
    pub fn run_export(&self) -> Result<ExportReport> {
        let (records, _) = self.resolve_records()?;
        self.exporter().export(
            &records,
            &self.config.export.output_dir,
            &self.config.export.filename,
        )
    }

    /// Line announcing a finished export, unless in quiet mode
    fn confirmation(&self, report: &ExportReport) -> Option<String> {
        (!self.args.quiet).then(|| report.to_string())
    }

    /// Validate the resolved moods without writing
    fn run_validate(&self) -> Result<()> {
        let (records, source) = self.resolve_records()?;
        record::validate(&records)?;
        info!("Validated mood records from {}", source);
        println!("{} mood record(s) are valid", records.len());
        Ok(())
    }

    /// Print the resolved moods
    fn run_list(&self, json: bool) -> Result<()> {
        let (records, _) = self.resolve_records()?;

        if json {
            println!("{}", self.exporter().render(&records)?);
            return Ok(());
        }

        for line in Self::summary_lines(&records) {
            println!("{line}");
        }
        Ok(())
    }

    /// One aligned summary line per record
    fn summary_lines(records: &[MoodRecord]) -> Vec<String> {
        let id_width = records.iter().map(|r| r.id.chars().count()).max().unwrap_or(0);
        let text_width = records
            .iter()
            .map(|r| r.text.chars().count())
            .max()
            .unwrap_or(0);

        records
            .iter()
            .map(|r| {
                format!(
                    "{:<id_width$}  {}  {:<text_width$}  {}",
                    r.id, r.color_hex, r.text, r.icon_path
                )
            })
            .collect()
    }

    /// Show version information
    fn show_version(&self) {
        println!("moodgen version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            for line in self.config_file_report() {
                println!("{line}");
            }
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    ///
    /// # Returns
    /// * `Vec<String>` - Status lines to show the user
    fn config_file_report(&self) -> Vec<String> {
        let path = self.get_config_path();
        let mut lines = vec![format!("Validating configuration file: {}", path.display())];

        if !path.exists() {
            lines.push("❌ Configuration file does not exist".to_string());
            return lines;
        }

        let status = match Config::read_file(&path) {
            Ok(config) => match config.validate().and_then(|_| Self::check_moods(&config)) {
                Ok(_) => "✅ Configuration is valid".to_string(),
                Err(e) => format!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => format!("❌ Failed to load configuration: {}", e),
        };
        lines.push(status);
        lines
    }

    /// Validate configured moods, if any
    fn check_moods(config: &Config) -> Result<()> {
        if !config.moods.is_empty() {
            record::validate(&config.moods)?;
        }
        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .as_deref()
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_config_path)
    }
}
