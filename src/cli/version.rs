//! Version banner for the OpenSSH binary probe
//!
//! Tools that detect ssh by running `ssh -V` give up if it takes too long, and
//! starting a WSL distro just to ask ssh for its version is slow. The banner
//! is printed directly instead.

use std::io::{self, Write};

use crate::error::Result;

pub fn banner() -> String {
    format!(
        "bypassh {} WSL2 OpenSSH-compatible proxy binary",
        env!("CARGO_PKG_VERSION")
    )
}

pub fn run() -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", banner())?;
    Ok(())
}
