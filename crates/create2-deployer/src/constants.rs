//! Constants for salted deployment.
//!
//! Address-derivation constants are fixed by EIP-1014; the remaining ones are defaults for a
//! [`Create2Deployer`](crate::Create2Deployer) running on a local revm database.

use alloy_primitives::{address, Address};

/// Constants fixed by EIP-1014.
pub mod eip1014 {
    /// The one-byte discriminator prepended to the `CREATE2` hash preimage. It cannot collide
    /// with an RLP-encoded `CREATE` preimage, which always starts with a list header.
    pub const PREFIX: u8 = 0xff;

    /// Length of the hash preimage: `0xff ‖ deployer ‖ salt ‖ init_code_hash`.
    pub const PREIMAGE_LEN: usize = 1 + 20 + 32 + 32;

    /// Offset of the address inside the 32-byte keccak digest.
    pub const ADDRESS_OFFSET: usize = 12;
}

/// Layout of the calldata accepted by the forwarder contract.
pub mod forwarder {
    /// Offset of the 32-byte big-endian value word.
    pub const VALUE_OFFSET: usize = 0x00;
    /// Offset of the 32-byte salt word.
    pub const SALT_OFFSET: usize = 0x20;
    /// Offset of the init code; everything after it is copied into memory.
    pub const INIT_CODE_OFFSET: usize = 0x40;
}

/// Default address of the deployer account when none is configured.
pub const DEFAULT_FACTORY_ADDRESS: Address = address!("0x000000000000000000000000000000000000c2e2");

/// Default externally-owned account that submits forwarder calls.
pub const DEFAULT_OPERATOR_ADDRESS: Address =
    address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Default gas limit for a single forwarder call. Kept below the EIP-7825 transaction cap.
pub const DEFAULT_GAS_LIMIT: u64 = 10_000_000;
