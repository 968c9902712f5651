//! Deterministic `CREATE2` address derivation and guarded salted deployment.
//!
//! The crate has two halves:
//!
//! - [`compute_address`] and friends: pure EIP-1014 address derivation, usable without any
//!   state.
//! - [`Create2Deployer`]: an account on a revm database that forwards salted creations through
//!   the platform's own `CREATE2` opcode, validating preconditions first and checking the
//!   realized address against the prediction afterwards.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub use alloy_primitives;
pub use alloy_sol_types;
pub use revm;

pub mod constants;

mod address;
pub use address::*;

mod config;
pub use config::*;

mod deployer;
pub use deployer::*;

mod interfaces;
pub use interfaces::*;

mod record;
pub use record::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
