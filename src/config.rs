//! Configuration loading for the admin binary.
//!
//! Settings come from `config.toml` with serde defaults for every field, then
//! environment variables (loaded from `.env` by the binary) overlay the file.

use crate::{
    core::images::DEFAULT_MAX_IMAGE_BYTES,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Application settings.
#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the JSON slot files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Per-file cap for embedded images, in bytes.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
    /// Model identifier passed to the AI collaborator.
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

const fn default_max_image_bytes() -> usize {
    DEFAULT_MAX_IMAGE_BYTES
}

fn default_ai_model() -> String {
    "gemini-2.0-flash".to_string()
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            data_dir: default_data_dir(),
            max_image_bytes: default_max_image_bytes(),
            ai_model: default_ai_model(),
        }
    }
}

/// Parses an `AppConfig` from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] when the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("loading configuration from {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("failed to read config file {path_ref:?}: {e}"),
    })?;
    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

/// Loads the effective configuration: `config.toml` if present (path
/// overridable via `QUOTE_DESK_CONFIG`), defaults otherwise, then the
/// `QUOTE_DESK_DATA_DIR` and `QUOTE_DESK_AI_MODEL` environment overrides.
///
/// # Errors
/// Returns [`Error::Config`] only when a config file exists but is invalid;
/// a missing file is not an error.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = env::var("QUOTE_DESK_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let mut config = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        tracing::debug!("no config file at {path}, using defaults");
        AppConfig::default()
    };
    if let Ok(dir) = env::var("QUOTE_DESK_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Ok(model) = env::var("QUOTE_DESK_AI_MODEL") {
        config.ai_model = model;
    }
    Ok(config)
}
