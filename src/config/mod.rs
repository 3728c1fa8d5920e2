//! Configuration for bypassh
//!
//! Loaded from `bypassh.json` next to the executable. Every field is
//! optional; missing or empty fields keep their default value.

mod settings;
mod storage;

pub use settings::{Config, DEFAULT_DISTRO, DEFAULT_SSH_PATH, DEFAULT_WSL_PATH};
pub use storage::{
    config_path, get_exe_dir, load_config, load_config_from, ConfigLoad, CONFIG_FILE,
};
