mod config;
mod error;
mod hex;
mod input;
mod logging;
mod state;

pub use config::*;
pub use error::*;
pub use hex::*;
pub use input::*;
pub use logging::*;
pub use state::*;
