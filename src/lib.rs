//! bypassh - OpenSSH-compatible proxy that runs ssh inside WSL2
//!
//! Windows tools that expect an `ssh` binary can be pointed at bypassh
//! instead. It:
//! - rewrites Windows paths in the arguments into their WSL equivalents
//! - runs ssh inside the configured distro through the WSL launcher
//! - forwards interrupts to the child and exits with the child's exit code

pub mod cli;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod logging;
pub mod proxy;
pub mod translate;

pub use error::{BypasshError, Result};
