//! Ready-made init code for deployment tests.

use alloy_primitives::{hex, Bytes};

use super::BytecodeBuilder;

/// Runtime code that always returns the 32-byte word `0x2a`.
pub const ANSWER_RUNTIME: [u8; 10] = hex!("602a60005260206000f3");

/// Init code deploying `runtime` as-is, with no constructor logic.
pub fn constructor_code(runtime: impl AsRef<[u8]>) -> Bytes {
    BytecodeBuilder::default().return_runtime(runtime).build()
}

/// Init code that stores a single trailing constructor argument in slot 0 and deploys a
/// runtime returning that slot.
///
/// Append one ABI-encoded word (e.g. with [`crate::init_code_with_args`] and a 1-tuple) before
/// deploying; without it the constructor stores whatever the last 32 bytes of the code are.
pub fn owner_constructor_code() -> Bytes {
    let runtime = BytecodeBuilder::default().return_slot(0).build();
    BytecodeBuilder::default().store_trailing_word(0).return_runtime(runtime).build()
}

/// Init code whose constructor always reverts.
pub fn reverting_init_code() -> Bytes {
    BytecodeBuilder::default().revert().build()
}
