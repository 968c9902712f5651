//! Salt and init code arguments shared by `compute` and `deploy`

use std::path::PathBuf;

use alloy_primitives::{Bytes, B256};
use clap::Args;
use create2_deployer::salt_from_message;
use tracing::debug;

use super::{decode_hex, load_hex, CliError, Result};

/// Salt arguments. Exactly one of the two must be given.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SaltArgs {
    /// Salt as a 32-byte hex word
    #[arg(long = "salt")]
    pub salt: Option<B256>,

    /// Derive the salt as the keccak256 hash of this UTF-8 message
    #[arg(long = "salt-message", visible_aliases = ["salt-msg"])]
    pub salt_message: Option<String>,
}

impl SaltArgs {
    /// Resolves the salt.
    pub fn salt(&self) -> B256 {
        match (&self.salt, &self.salt_message) {
            (Some(salt), _) => *salt,
            (None, Some(message)) => salt_from_message(message),
            (None, None) => B256::ZERO,
        }
    }
}

/// Init code arguments
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Init Code Options")]
pub struct InitCodeArgs {
    /// Init code (creation code) as a hex string
    #[arg(long = "init-code", visible_aliases = ["code"], conflicts_with = "init_code_file")]
    pub init_code: Option<String>,

    /// File containing the init code as a hex string. Use `-` to read from stdin.
    #[arg(long = "init-code-file", visible_aliases = ["codefile"])]
    pub init_code_file: Option<PathBuf>,

    /// ABI-encoded constructor arguments appended to the init code, as a hex string
    #[arg(long = "constructor-args", visible_aliases = ["args"])]
    pub constructor_args: Option<String>,
}

impl InitCodeArgs {
    /// Loads the init code with constructor arguments appended. Returns `None` if no init code
    /// was given.
    pub fn load(&self) -> Result<Option<Bytes>> {
        let Some(code) = load_hex(self.init_code.as_deref(), self.init_code_file.as_deref())?
        else {
            return Ok(None);
        };
        let Some(args) = self.constructor_args.as_deref() else {
            return Ok(Some(code));
        };

        let args = decode_hex(args)?;
        debug!(code_len = code.len(), args_len = args.len(), "Appending constructor arguments");
        let mut init_code = code.to_vec();
        init_code.extend_from_slice(&args);
        Ok(Some(init_code.into()))
    }

    /// Loads the init code, failing if none was given.
    pub fn load_required(&self) -> Result<Bytes> {
        self.load()?.ok_or_else(|| {
            CliError::InvalidInput("missing init code: use --init-code or --init-code-file".into())
        })
    }
}
