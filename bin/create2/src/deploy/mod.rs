//! Salted deployment against an in-memory state
//!
//! The state is seeded from `--prestate`, `--balance` and `--faucet`, a deployer is installed at
//! the factory address and the init code is deployed through it. The outcome is printed as
//! JSON whether or not the deployment succeeds.

mod cmd;
mod outcome;

pub use cmd::*;
pub use outcome::*;
