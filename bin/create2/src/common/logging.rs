//! Logging configuration for the `create2` CLI tool.
//!
//! Provides CLI arguments for configuring tracing/logging output with support for:
//! - Verbosity levels via `-v/-vv/-vvv` flags
//! - Custom log filters via `RUST_LOG` environment variable
//! - Log file output via `--log.file` flag

use std::path::PathBuf;

use clap::Args;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events are shown when verbosity is set with `-v` flags.
const LOG_TARGETS: [&str; 2] = ["create2", "create2_deployer"];

/// Logging configuration arguments.
#[derive(Debug, Clone, Default, Args)]
#[command(next_help_heading = "Logging Options")]
pub struct LogArgs {
    /// Increase logging verbosity (-v = error, -vv = warn, -vvv = info, -vvvv = debug, -vvvvv =
    /// trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log file path. If specified, logs are written to this file instead of stderr.
    #[arg(long = "log.file", visible_aliases = ["log-file"], global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colorful console logging. Only applies when logging to stderr (no --log.file).
    #[arg(long = "log.no-color", visible_aliases = ["log-no-color"], global = true)]
    pub log_no_color: bool,
}

impl LogArgs {
    /// Returns the level selected by the `-v` flags, `None` if logging is off.
    pub const fn level(&self) -> Option<Level> {
        match self.verbose {
            0 => None,
            1 => Some(Level::ERROR),
            2 => Some(Level::WARN),
            3 => Some(Level::INFO),
            4 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }

    /// Builds the filter directive for the `-v` flags.
    pub fn directive(&self) -> String {
        match self.level() {
            None => "off".to_string(),
            Some(level) => {
                LOG_TARGETS.map(|target| format!("{target}={level}")).join(",")
            }
        }
    }

    /// Initialize the tracing subscriber based on the logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the `-v` flags. Log target is only shown for DEBUG
    /// level and above.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.directive())
        };
        let show_target = self.verbose >= 4;

        if let Some(ref log_file) = self.log_file {
            let file = std::fs::File::create(log_file)?;
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(file)
                .with_ansi(false)
                .try_init()
        } else {
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .with_ansi(!self.log_no_color)
                .try_init()
        }
    }
}
