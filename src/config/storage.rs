//! Locating and reading the config file

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BypasshError, Result};

use super::settings::{Config, ConfigFile};

/// Config file name, looked up next to the executable
pub const CONFIG_FILE: &str = "bypassh.json";

/// Outcome of loading the config file.
///
/// Loading never fails: on error the defaults are used and the error is kept
/// so that `-P` can report it.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<BypasshError>,
}

/// Get the directory of the running executable
pub fn get_exe_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;

    exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or(BypasshError::ExeDir)
}

/// Get the path of the config file
pub fn config_path() -> Result<PathBuf> {
    Ok(get_exe_dir()?.join(CONFIG_FILE))
}

/// Load the config file next to the executable on top of `defaults`
pub fn load_config(defaults: Config) -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_from(&path, defaults),
        Err(e) => {
            debug!("config path unavailable: {}", e);
            ConfigLoad {
                config: defaults,
                error: Some(e),
            }
        }
    }
}

/// Load a config file from `path` on top of `defaults`
pub fn load_config_from(path: &Path, defaults: Config) -> ConfigLoad {
    match read_config_file(path) {
        Ok(file) => {
            debug!("loaded config from {}", path.display());
            ConfigLoad {
                config: defaults.merge(file),
                error: None,
            }
        }
        Err(e) => {
            debug!("using default config: {}", e);
            ConfigLoad {
                config: defaults,
                error: Some(e),
            }
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read(path).map_err(|source| BypasshError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&content).map_err(|source| BypasshError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
