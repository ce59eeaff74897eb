//! moodgen - mood button data generator
//!
//! Writes the mood button list consumed by the MoodColor UI as a JSON array.
//!
//! # Usage
//!
//! ```bash
//! # Export the built-in moods to Assets/Data/mood_buttons.json
//! moodgen
//!
//! # Export moods from a record file somewhere else
//! moodgen -r moods.toml -o build/Data
//! ```

use moodgen::cli::CliInterface;
use moodgen::error::Result;

/// Application entry point
fn main() {
    // Run the application and map any error to a non-zero exit code
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Run the selected command
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    cli.run()
}

/// Initialize logging system based on the effective log level
///
/// Verbosity flags have already been folded into the configuration.
///
/// # Arguments
/// * `cli` - CLI interface with the effective configuration
fn initialize_logging(cli: &CliInterface) {
    let logging = &cli.config().logging;

    // Logs go to stderr so stdout carries only command output
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(logging.level.to_tracing_level())
        .with_writer(std::io::stderr)
        .with_target(false);

    if logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
