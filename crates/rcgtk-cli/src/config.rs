//! Configuration discovery for the CLI.
//!
//! The first file found wins, in this order:
//!
//! 1. the path given with `--config` (must exist),
//! 2. `rcgtk/config.toml` in the working directory,
//! 3. `config.toml` in the platform configuration directory.
//!
//! Without any file the library defaults are used.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use rcgtk::{RcgtkError, config::AppConfig};

const LOCAL_CONFIG: &str = "rcgtk/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("missing configuration file {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for RcgtkError {
    fn from(err: ConfigError) -> Self {
        RcgtkError::Config(err.to_string())
    }
}

/// Loads the configuration for this run.
///
/// # Errors
///
/// Fails when the explicit file is missing, or when the selected file cannot
/// be read or parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RcgtkError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path, "explicit");
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return read_config(&local, "local");
    }

    match platform_config() {
        Some(system) if system.is_file() => return read_config(&system, "system"),
        Some(system) => debug!(path:? = system; "No platform configuration file"),
        None => debug!("No platform configuration directory"),
    }

    debug!("Using default configuration");
    Ok(AppConfig::default())
}

fn platform_config() -> Option<PathBuf> {
    ProjectDirs::from("com", "rcgtk", "rcgtk").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn read_config(path: &Path, origin: &str) -> Result<AppConfig, RcgtkError> {
    info!(path:? = path, origin; "Loading configuration");
    let content = fs::read_to_string(path)?;

    toml::from_str(&content).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string().trim().to_string(),
        }
        .into()
    })
}
