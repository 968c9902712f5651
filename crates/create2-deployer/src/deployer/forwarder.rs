//! The on-platform half of the deployer: a minimal `CREATE2` forwarder contract.
//!
//! Calldata layout is `value(32) ‖ salt(32) ‖ init_code`. The forwarder copies the init code
//! into memory, executes `CREATE2(value, 0, len, salt)` from its own account and returns the
//! resulting address as a single 32-byte word. A failed creation returns the zero word; the
//! forwarder never reverts on its own.

use alloy_primitives::{Address, Bytes, B256, U256};
use revm::{
    bytecode::opcode::{
        CALLDATACOPY, CALLDATALOAD, CALLDATASIZE, CREATE2, DUP1, MSTORE, PUSH1, RETURN, SUB, SWAP1,
    },
    state::Bytecode,
};

use crate::constants::forwarder::{INIT_CODE_OFFSET, SALT_OFFSET, VALUE_OFFSET};

/// Runtime code of the forwarder.
pub const FORWARDER_CODE: [u8; 28] = [
    // size = calldatasize - 0x40
    PUSH1,
    INIT_CODE_OFFSET as u8,
    CALLDATASIZE,
    SUB,
    // memory[0..size] = calldata[0x40..]
    DUP1,
    PUSH1,
    INIT_CODE_OFFSET as u8,
    PUSH1,
    0x00,
    CALLDATACOPY,
    // stack: [salt, size]
    PUSH1,
    SALT_OFFSET as u8,
    CALLDATALOAD,
    SWAP1,
    // stack: [value, 0, size, salt]
    PUSH1,
    0x00,
    PUSH1,
    VALUE_OFFSET as u8,
    CALLDATALOAD,
    CREATE2,
    // return the address word
    PUSH1,
    0x00,
    MSTORE,
    PUSH1,
    0x20,
    PUSH1,
    0x00,
    RETURN,
];

/// Returns the forwarder runtime code as a [`Bytecode`].
pub fn forwarder_bytecode() -> Bytecode {
    Bytecode::new_legacy(Bytes::from_static(&FORWARDER_CODE))
}

/// Encodes a forwarder call.
pub fn encode_forwarder_call(value: U256, salt: B256, init_code: &[u8]) -> Bytes {
    let mut calldata = Vec::with_capacity(INIT_CODE_OFFSET + init_code.len());
    calldata.extend_from_slice(&value.to_be_bytes::<32>());
    calldata.extend_from_slice(salt.as_slice());
    calldata.extend_from_slice(init_code);
    calldata.into()
}

/// Decodes the forwarder's return data into the created address.
///
/// Returns `None` unless the output is exactly one 32-byte word. The zero address is returned
/// as-is; interpreting it is the caller's job.
pub fn decode_forwarder_output(output: &[u8]) -> Option<Address> {
    let word = B256::try_from(output).ok()?;
    Some(Address::from_word(word))
}
