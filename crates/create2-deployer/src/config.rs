use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FACTORY_ADDRESS, DEFAULT_GAS_LIMIT, DEFAULT_OPERATOR_ADDRESS};

/// Configuration of a [`Create2Deployer`](crate::Create2Deployer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeployerConfig {
    /// Address of the deployer account. This is the `deployer` term of every address the
    /// deployer predicts, and the account whose balance funds deployments.
    pub factory: Address,
    /// Account that submits the forwarder call. It pays no gas (gas price is zero) and is
    /// never the source of deployment value.
    pub operator: Address,
    /// Gas limit of a single forwarder call, shared by the forwarder and the init code.
    pub gas_limit: u64,
}

impl Default for DeployerConfig {
    fn default() -> Self {
        Self {
            factory: DEFAULT_FACTORY_ADDRESS,
            operator: DEFAULT_OPERATOR_ADDRESS,
            gas_limit: DEFAULT_GAS_LIMIT,
        }
    }
}

impl DeployerConfig {
    /// Sets the deployer account address.
    pub const fn with_factory(mut self, factory: Address) -> Self {
        self.factory = factory;
        self
    }

    /// Sets the operator account address.
    pub const fn with_operator(mut self, operator: Address) -> Self {
        self.operator = operator;
        self
    }

    /// Sets the forwarder call gas limit.
    pub const fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }
}
