//! Configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, TailorConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tailor.toml";

/// Load configuration from an explicit path, or from `./tailor.toml` when it
/// exists, or fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<TailorConfig, AppError> {
    match explicit {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    AppError::config_error(format!("Config file not found: {}", path.display()))
                } else {
                    AppError::Io(err)
                }
            })?;
            parse_config_content(&content)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(TailorConfig::default());
            }
            let content = fs::read_to_string(path)?;
            parse_config_content(&content)
        }
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<TailorConfig, AppError> {
    let config: TailorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
