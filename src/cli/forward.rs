//! Forwarding to ssh inside WSL

use std::ffi::OsString;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::proxy::{self, ProxyCommand};
use crate::translate::translate_arg;

/// Build the WSL launcher command running ssh with translated `args`.
///
/// Arguments that are not valid Unicode cannot hold a recognisable Windows
/// path and are passed through untouched.
pub fn build_command(config: &Config, args: Vec<OsString>) -> ProxyCommand {
    let ssh_args = args
        .into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) => OsString::from(translate_arg(s, &config.distro)),
            None => arg,
        })
        .collect::<Vec<_>>();

    debug!(?ssh_args, "translated arguments");

    ProxyCommand::new(&config.wsl_path, config.launcher_args(ssh_args))
}

/// Run ssh and return the exit code bypassh should exit with
pub fn run(config: &Config, args: Vec<OsString>) -> Result<i32> {
    proxy::run_blocking(build_command(config, args))
}
