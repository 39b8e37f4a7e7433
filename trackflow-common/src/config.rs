//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Default TCP port for trackflow-hub
pub const DEFAULT_PORT: u16 = 5740;

/// Environment variable naming the data root folder
pub const ROOT_FOLDER_ENV: &str = "TRACKFLOW_ROOT";

/// Environment variable naming the listen port
pub const PORT_ENV: &str = "TRACKFLOW_PORT";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `TRACKFLOW_ROOT` environment variable
/// 3. `root_folder` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Resolve the listen port: CLI argument, then `TRACKFLOW_PORT`, then default
pub fn resolve_port(cli_arg: Option<u16>) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }
    if let Ok(value) = std::env::var(PORT_ENV) {
        if let Ok(port) = value.parse::<u16>() {
            return port;
        }
    }
    DEFAULT_PORT
}

/// Path of the SQLite database inside the root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join("trackflow.db")
}

/// Directory holding uploaded demo audio inside the root folder
pub fn media_dir(root_folder: &Path) -> PathBuf {
    root_folder.join("media")
}

/// Create the root folder and media directory if missing
pub fn ensure_directories(root_folder: &Path) -> Result<()> {
    std::fs::create_dir_all(media_dir(root_folder))?;
    Ok(())
}

/// Get the configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir()
        .map(|d| d.join("trackflow").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if user_config.exists() {
        return Ok(user_config);
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/trackflow/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config(format!(
        "Config file not found: {}",
        user_config.display()
    )))
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("trackflow"))
        .unwrap_or_else(|| PathBuf::from("./trackflow_data"))
}
