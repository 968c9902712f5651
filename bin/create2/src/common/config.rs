use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Args;
use create2_deployer::DeployerConfig;
use tracing::{debug, info};

use super::Result;

/// Deployer configuration arguments
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Deployer Options")]
pub struct DeployerArgs {
    /// JSON file with a deployer configuration (`factory`, `operator`, `gasLimit`). Flags below
    /// override its fields.
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Address of the salted deployer account
    #[arg(long = "factory", env = "CREATE2_FACTORY")]
    pub factory: Option<Address>,

    /// Account that sends the forwarding call
    #[arg(long = "operator", visible_aliases = ["from"], env = "CREATE2_OPERATOR")]
    pub operator: Option<Address>,

    /// Gas limit of the forwarding call
    #[arg(long = "gas", visible_aliases = ["gas-limit"])]
    pub gas_limit: Option<u64>,
}

impl DeployerArgs {
    /// Builds the deployer configuration from the config file and flag overrides.
    pub fn config(&self) -> Result<DeployerConfig> {
        let mut config = if let Some(path) = &self.config {
            info!(config_path = ?path, "Loading deployer configuration");
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            DeployerConfig::default()
        };

        if let Some(factory) = self.factory {
            config = config.with_factory(factory);
        }
        if let Some(operator) = self.operator {
            config = config.with_operator(operator);
        }
        if let Some(gas_limit) = self.gas_limit {
            config = config.with_gas_limit(gas_limit);
        }
        debug!(?config, "Deployer configuration");
        Ok(config)
    }
}
