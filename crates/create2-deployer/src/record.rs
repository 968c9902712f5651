use alloy_primitives::{Address, Log, U256};
use alloy_sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::ICreate2;

/// The fact emitted after a successful deployment: where the contract landed and how much
/// value it was funded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// The realized address of the new contract.
    pub addr: Address,
    /// The value transferred from the deployer to the new contract.
    pub value: U256,
}

impl DeploymentRecord {
    /// Encodes the record as an `ICreate2::Deployed` log emitted by `emitter`.
    pub fn to_log(&self, emitter: Address) -> Log {
        let data = ICreate2::Deployed { addr: self.addr, value: self.value }.encode_log_data();
        Log { address: emitter, data }
    }

    /// Decodes a record from an `ICreate2::Deployed` log. Returns `None` for any other log.
    pub fn from_log(log: &Log) -> Option<Self> {
        ICreate2::Deployed::decode_log_data(&log.data).ok().map(Into::into)
    }
}

impl From<ICreate2::Deployed> for DeploymentRecord {
    fn from(event: ICreate2::Deployed) -> Self {
        Self { addr: event.addr, value: event.value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, LogData, B256};

    #[test]
    fn test_log_topics() {
        let record = DeploymentRecord {
            addr: address!("1111111111111111111111111111111111111111"),
            value: U256::from(2),
        };
        let log = record.to_log(address!("000000000000000000000000000000000000c2e2"));

        let topics = log.data.topics();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0], ICreate2::Deployed::SIGNATURE_HASH);
        assert_eq!(topics[1], record.addr.into_word());
        assert_eq!(log.data.data.as_ref(), &U256::from(2).to_be_bytes::<32>());

        assert_eq!(DeploymentRecord::from_log(&log), Some(record));
    }

    #[test]
    fn test_from_foreign_log() {
        let log = Log {
            address: Address::ZERO,
            data: LogData::new_unchecked(vec![B256::ZERO], Default::default()),
        };
        assert_eq!(DeploymentRecord::from_log(&log), None);
    }
}
