//! Test utilities for salted deployment.

mod database;
mod init_code;
mod opcode_gen;

pub use database::*;
pub use init_code::*;
pub use opcode_gen::*;
