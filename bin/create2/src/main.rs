//! `create2` CLI tool for predicting and executing salted contract deployments
//!
//! `compute` derives the address a `CREATE2` deployment would land at without touching any
//! state. `deploy` runs the deployment against an in-memory EVM state seeded from the command
//! line and prints the outcome as JSON.

use clap::Parser;

mod cmd;
pub use cmd::*;

/// Shared argument groups, input loading and errors
pub mod common;
/// Address prediction
pub mod compute;
/// Deployment against an in-memory state
pub mod deploy;

fn main() -> Result<(), Error> {
    set_thread_panic_hook();
    MainCmd::parse().run().inspect_err(|e| eprintln!("{e}"))
}

/// Sets thread panic hook, useful for having tests that panic.
fn set_thread_panic_hook() {
    use std::{
        backtrace::Backtrace,
        panic::{set_hook, take_hook},
        process::exit,
    };
    let orig_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        eprintln!("Custom backtrace: {}", Backtrace::capture());
        orig_hook(panic_info);
        exit(1);
    }));
}
