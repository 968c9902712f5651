use alloy_primitives::{hex::FromHexError, B256};
use create2_deployer::Create2Error;

/// Error types for the `create2` subcommands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The deployment was rejected or failed
    #[error("Deployment error: {0}")]
    Deploy(#[from] Create2Error),

    /// Failed to read or write a file
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Invalid hex string
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),

    /// JSON input or output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Code hash in the prestate does not match the code
    #[error("Code hash mismatch: expected {expected}, computed {computed}")]
    CodeHashMismatch {
        /// The hash given in the prestate
        expected: B256,
        /// The hash of the given code
        computed: B256,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the `create2` subcommands
pub type Result<T> = std::result::Result<T, CliError>;
