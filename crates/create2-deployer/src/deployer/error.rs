//! Error types for salted deployment.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolError;

use crate::ICreate2;

/// Why a deployment was rejected or did not happen.
///
/// The first three variants are the ones the platform can tell apart. `FailedDeployment`
/// deliberately stays generic: `CREATE2` returns the zero address both when the target is
/// already occupied and when the init code aborts, and nothing in the return value separates
/// the two.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Create2Error {
    /// The init code was empty. Nothing was attempted.
    #[error("empty bytecode")]
    EmptyBytecode,
    /// The deployer cannot fund the requested value. Nothing was attempted.
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// The deployer's balance at the time of the call
        available: U256,
        /// The value the caller asked to transfer
        requested: U256,
    },
    /// `CREATE2` returned the zero address: either the target address is occupied or the init
    /// code failed. No value moved and no record was emitted.
    #[error("deployment failed")]
    FailedDeployment,
    /// The platform created the contract somewhere other than the predicted address. This is
    /// an execution-layer bug, not a normal failure path.
    #[error("deployed address {realized} does not match predicted address {predicted}")]
    AddressMismatch {
        /// The address derived off-platform
        predicted: Address,
        /// The address the platform reported
        realized: Address,
    },
    /// Crediting the account would overflow its balance. Nothing was written.
    #[error("balance overflow at {address}: balance {balance}, amount {amount}")]
    BalanceOverflow {
        /// The account being credited
        address: Address,
        /// Its balance before the credit
        balance: U256,
        /// The amount that did not fit
        amount: U256,
    },
    /// The operator account is the factory itself. The forwarder code installed at the factory
    /// makes it ineligible to send transactions.
    #[error("operator {0} must differ from the factory address")]
    OperatorIsFactory(Address),
    /// The backing database failed
    #[error("database error: {0}")]
    Database(String),
    /// The EVM rejected the forwarder call before executing it
    #[error("evm error: {0}")]
    Evm(String),
}

impl Create2Error {
    pub(crate) fn database(error: impl core::fmt::Display) -> Self {
        Self::Database(error.to_string())
    }
}

/// Encodes a deployment error as ABI-encoded revert data.
///
/// Internal variants have no Solidity counterpart and are reported as
/// `Create2FailedDeployment`, which is what a caller on the platform would observe.
pub fn encode_error_result(error: &Create2Error) -> Bytes {
    match error {
        Create2Error::EmptyBytecode => ICreate2::Create2EmptyBytecode {}.abi_encode().into(),
        Create2Error::InsufficientBalance { available, requested } => {
            ICreate2::Create2InsufficientBalance { balance: *available, needed: *requested }
                .abi_encode()
                .into()
        }
        Create2Error::FailedDeployment
        | Create2Error::AddressMismatch { .. }
        | Create2Error::BalanceOverflow { .. }
        | Create2Error::OperatorIsFactory(_)
        | Create2Error::Database(_)
        | Create2Error::Evm(_) => ICreate2::Create2FailedDeployment {}.abi_encode().into(),
    }
}

/// Decodes ABI-encoded revert data produced by [`encode_error_result`].
///
/// Returns `None` if the selector is not one of the deployer's errors.
pub fn decode_error_result(output: &[u8]) -> Option<Create2Error> {
    let selector: [u8; 4] = output.get(..4)?.try_into().ok()?;
    if selector == ICreate2::Create2EmptyBytecode::SELECTOR {
        ICreate2::Create2EmptyBytecode::abi_decode(output).ok()?;
        Some(Create2Error::EmptyBytecode)
    } else if selector == ICreate2::Create2InsufficientBalance::SELECTOR {
        let error = ICreate2::Create2InsufficientBalance::abi_decode(output).ok()?;
        Some(Create2Error::InsufficientBalance {
            available: error.balance,
            requested: error.needed,
        })
    } else if selector == ICreate2::Create2FailedDeployment::SELECTOR {
        ICreate2::Create2FailedDeployment::abi_decode(output).ok()?;
        Some(Create2Error::FailedDeployment)
    } else {
        None
    }
}
