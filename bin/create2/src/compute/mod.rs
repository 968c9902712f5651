//! Off-platform address prediction
//!
//! Computes `keccak256(0xff ‖ deployer ‖ salt ‖ keccak256(init_code))[12..]` without
//! executing anything. The init code may be replaced by its hash.

mod cmd;

pub use cmd::*;
