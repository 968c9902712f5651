use clap::{Parser, Subcommand};

use crate::common::{CliError, LogArgs};

/// Predict and execute salted `CREATE2` deployments
#[derive(Parser, Debug)]
#[command(name = "create2", infer_subcommands = true, version)]
pub struct MainCmd {
    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `create2` CLI tool
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the address of a salted deployment
    Compute(crate::compute::Cmd),
    /// Deploy init code through a salted deployer on an in-memory state
    Deploy(crate::deploy::Cmd),
}

/// Error types for the main command system
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error raised by a subcommand
    #[error("{0}")]
    Cli(#[from] CliError),
    /// Logging could not be set up
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl MainCmd {
    /// Execute the main command
    pub fn run(&self) -> Result<(), Error> {
        self.log_args.init().map_err(|e| Error::Logging(e.to_string()))?;
        match &self.command {
            Command::Compute(cmd) => cmd.run()?,
            Command::Deploy(cmd) => cmd.run()?,
        }
        Ok(())
    }
}
