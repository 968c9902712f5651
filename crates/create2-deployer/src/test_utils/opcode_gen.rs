//! This module provides utility functions to generate EVM bytecode.

use alloy_primitives::Bytes;
use revm::bytecode::opcode::{
    CODECOPY, CODESIZE, DUP1, MLOAD, MSTORE, PUSH0, RETURN, REVERT, SLOAD, SSTORE, SUB,
};

/// A builder for assembling EVM bytecode.
#[derive(Debug, Default, Clone)]
pub struct BytecodeBuilder {
    code: Vec<u8>,
}

impl BytecodeBuilder {
    /// Build the bytecode.
    pub fn build(self) -> Bytes {
        self.code.into()
    }

    /// Get the length of the bytecode.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Check if the bytecode is empty.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Append a single opcode or byte.
    pub fn append(mut self, opcode: u8) -> Self {
        self.code.push(opcode);
        self
    }

    /// Append a series of opcodes or bytes.
    pub fn append_many(mut self, items: impl IntoIterator<Item = u8>) -> Self {
        self.code.extend(items);
        self
    }

    /// Append a PUSH opcode and the bytes to push.
    pub fn push_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        let bytes: &[u8] = bytes.as_ref();
        assert!(!bytes.is_empty() && bytes.len() <= 32);
        self.code.push(PUSH0 + bytes.len() as u8);
        self.code.extend_from_slice(bytes);
        self
    }

    /// Append a PUSH opcode sized to the integer type and the number to push.
    pub fn push_number<T: Into<u128> + Copy>(self, number: T) -> Self {
        let num = number.into();
        let bytes = match core::mem::size_of::<T>() {
            1 => (num as u8).to_be_bytes().to_vec(),
            2 => (num as u16).to_be_bytes().to_vec(),
            8 => (num as u64).to_be_bytes().to_vec(),
            16 => num.to_be_bytes().to_vec(),
            _ => panic!("Unsupported integer size"),
        };
        self.push_bytes(bytes)
    }

    /// Copy the last 32 bytes of the running code into storage slot `slot`.
    ///
    /// In init code this picks up a single ABI-encoded constructor argument appended after
    /// the creation code.
    pub fn store_trailing_word(self, slot: u8) -> Self {
        self.push_number(0x20_u8)
            .push_number(0x20_u8)
            .append(CODESIZE)
            .append(SUB)
            .push_number(0x00_u8)
            .append(CODECOPY)
            .push_number(0x00_u8)
            .append(MLOAD)
            .push_number(slot)
            .append(SSTORE)
    }

    /// Return the value of storage slot `slot` as a single word.
    pub fn return_slot(self, slot: u8) -> Self {
        self.push_number(slot)
            .append(SLOAD)
            .push_number(0x00_u8)
            .append(MSTORE)
            .push_number(0x20_u8)
            .push_number(0x00_u8)
            .append(RETURN)
    }

    /// Append a REVERT opcode with empty return data.
    pub fn revert(self) -> Self {
        self.push_number(0x00_u8).push_number(0x00_u8).append(REVERT)
    }

    /// Append code returning `runtime` as the deployed code, followed by `runtime` itself.
    ///
    /// Everything appended before this call runs first, as the constructor body.
    pub fn return_runtime(self, runtime: impl AsRef<[u8]>) -> Self {
        let runtime = runtime.as_ref();
        // PUSH2 len, DUP1, PUSH1 offset, PUSH1 0, CODECOPY, PUSH1 0, RETURN
        const COPIER_LEN: usize = 12;
        let offset = self.len() + COPIER_LEN;
        assert!(offset <= u8::MAX as usize, "constructor body too long");
        assert!(runtime.len() <= u16::MAX as usize, "runtime too long");

        self.push_number(runtime.len() as u16)
            .append(DUP1)
            .push_number(offset as u8)
            .push_number(0x00_u8)
            .append(CODECOPY)
            .push_number(0x00_u8)
            .append(RETURN)
            .append_many(runtime.iter().copied())
    }
}
