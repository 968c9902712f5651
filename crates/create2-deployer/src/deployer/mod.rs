//! Guarded salted deployment on a revm database.
//!
//! # Overview
//!
//! A [`Create2Deployer`] owns an account (the *factory*) holding the forwarder runtime code
//! and a balance. [`Create2Deployer::deploy`] runs through these stages, all-or-nothing from
//! the caller's point of view:
//!
//! 1. **Validating**: the init code must be non-empty and the factory balance must cover the
//!    requested value. Violations are reported before anything executes.
//! 2. **Computing**: the target address is predicted off-platform with [`compute_address`].
//! 3. **Creating**: the forwarder is called; it executes `CREATE2` with the value, salt and
//!    init code, so the platform moves the value atomically with creation.
//! 4. **Succeeded / Failed**: a zero address becomes [`Create2Error::FailedDeployment`] and the
//!    execution state is discarded. Otherwise the realized address is checked against the
//!    prediction, the state is committed and a [`DeploymentRecord`] is emitted.
//!
//! # Known limitation
//!
//! `CREATE2` signals every failure with the zero address. An occupied target and an aborting
//! constructor are indistinguishable from that signal, so both surface as
//! [`Create2Error::FailedDeployment`]. Retrying with the same salt and init code fails the same
//! way; choosing a new salt is the caller's decision.
//!
//! # Module Structure
//!
//! - `execution` - [`Create2Deployer`] and the deploy flow
//! - `forwarder` - the forwarder runtime code and its calldata codec
//! - `state` - account reads and writes against the generic database
//! - `error` - [`Create2Error`] and its Solidity revert-data encoding
//!
//! [`compute_address`]: crate::compute_address
//! [`DeploymentRecord`]: crate::DeploymentRecord

mod error;
mod execution;
mod forwarder;
mod state;

pub use error::*;
pub use execution::*;
pub use forwarder::*;
