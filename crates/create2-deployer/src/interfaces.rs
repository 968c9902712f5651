//! Solidity ABI of the salted deployer.
//!
//! The error names and fields follow the ones Solidity helper libraries use for `CREATE2`, so
//! revert data produced here is decoded by existing tooling without extra ABI files.

#![allow(missing_docs)]

use alloy_sol_types::sol;

sol! {
    /// Events and errors of the salted deployer.
    #[derive(Debug, PartialEq, Eq)]
    interface ICreate2 {
        /// Emitted after a successful deployment.
        event Deployed(address indexed addr, uint256 value);

        /// The init code was empty.
        error Create2EmptyBytecode();

        /// The deployer cannot fund the requested value.
        error Create2InsufficientBalance(uint256 balance, uint256 needed);

        /// The `CREATE2` opcode returned the zero address.
        error Create2FailedDeployment();
    }
}
