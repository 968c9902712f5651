use alloy_primitives::{Address, Bytes, B256, U256};
use create2_deployer::{encode_error_result, Create2Error, DeploymentRecord};
use serde::{Deserialize, Serialize};

/// Outcome of a `deploy` run, printed as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployOutcome {
    /// Whether the contract was created
    pub success: bool,
    /// The deployer account
    pub factory: Address,
    /// Address predicted before execution
    pub predicted: Address,
    /// Address the contract was created at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Value transferred to the new contract
    pub value: U256,
    /// The salt
    pub salt: B256,
    /// keccak256 of the init code
    pub init_code_hash: B256,
    /// The emitted deployment record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<DeploymentRecord>,
    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// ABI-encoded revert data of the failure, as a caller on the platform would see it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revert_data: Option<Bytes>,
}

impl DeployOutcome {
    /// Creates a pending outcome with the deployment inputs filled in.
    pub const fn new(
        factory: Address,
        predicted: Address,
        value: U256,
        salt: B256,
        init_code_hash: B256,
    ) -> Self {
        Self {
            success: false,
            factory,
            predicted,
            address: None,
            value,
            salt,
            init_code_hash,
            record: None,
            error: None,
            revert_data: None,
        }
    }

    /// Marks the outcome as succeeded.
    pub fn succeeded(self, record: DeploymentRecord) -> Self {
        Self { success: true, address: Some(record.addr), record: Some(record), ..self }
    }

    /// Marks the outcome as failed with `error`.
    pub fn failed(self, error: &Create2Error) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            revert_data: Some(encode_error_result(error)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use create2_deployer::decode_error_result;

    #[test]
    fn test_failed_outcome_json() {
        let error =
            Create2Error::InsufficientBalance { available: U256::ZERO, requested: U256::from(1) };
        let outcome =
            DeployOutcome::new(Address::ZERO, Address::ZERO, U256::from(1), B256::ZERO, B256::ZERO)
                .failed(&error);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("address").is_none());
        assert!(json.get("record").is_none());
        assert_eq!(json["error"], error.to_string());

        let revert_data = outcome.revert_data.unwrap();
        assert_eq!(decode_error_result(&revert_data), Some(error));
    }

    #[test]
    fn test_succeeded_outcome_json() {
        let record = DeploymentRecord { addr: Address::repeat_byte(1), value: U256::from(2) };
        let outcome =
            DeployOutcome::new(Address::ZERO, record.addr, record.value, B256::ZERO, B256::ZERO)
                .succeeded(record);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["address"], serde_json::to_value(record.addr).unwrap());
        assert!(json.get("revertData").is_none());
        let parsed: DeployOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, outcome);
    }
}
