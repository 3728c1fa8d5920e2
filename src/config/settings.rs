//! Configuration structures

use std::ffi::OsString;

use serde::{Deserialize, Serialize};

/// Distro used when none is configured
pub const DEFAULT_DISTRO: &str = "Ubuntu";

/// Location of the ssh client inside the distro
pub const DEFAULT_SSH_PATH: &str = "/usr/bin/ssh";

/// Location of the WSL launcher on the Windows host
pub const DEFAULT_WSL_PATH: &str = r"C:\Windows\system32\wsl.exe";

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Target WSL2 distro
    pub distro: String,
    /// Path to the ssh binary inside WSL
    pub ssh_path: String,
    /// Path to the WSL binary in Windows
    pub wsl_path: String,
}

impl Config {
    /// Arguments passed to the WSL launcher: `-d <distro> <ssh_path> <args...>`
    pub fn launcher_args(&self, ssh_args: Vec<OsString>) -> Vec<OsString> {
        let mut args = Vec::with_capacity(ssh_args.len() + 3);
        args.push(OsString::from("-d"));
        args.push(OsString::from(&self.distro));
        args.push(OsString::from(&self.ssh_path));
        args.extend(ssh_args);
        args
    }

    /// Apply the non-empty fields of a config file on top of `self`
    pub(super) fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(distro) = file.distro.filter(|s| !s.is_empty()) {
            self.distro = distro;
        }
        if let Some(ssh_path) = file.ssh_path.filter(|s| !s.is_empty()) {
            self.ssh_path = ssh_path;
        }
        if let Some(wsl_path) = file.wsl_path.filter(|s| !s.is_empty()) {
            self.wsl_path = wsl_path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distro: DEFAULT_DISTRO.to_string(),
            ssh_path: DEFAULT_SSH_PATH.to_string(),
            wsl_path: DEFAULT_WSL_PATH.to_string(),
        }
    }
}

/// On-disk form, every field optional
#[derive(Debug, Default, Deserialize)]
pub(super) struct ConfigFile {
    #[serde(default)]
    pub distro: Option<String>,
    #[serde(default)]
    pub ssh_path: Option<String>,
    #[serde(default)]
    pub wsl_path: Option<String>,
}
