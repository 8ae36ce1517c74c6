pub mod error;
pub mod settings;

pub use error::*;
pub use settings::{DEFAULT_TIMEOUT_SECS, DEFAULT_VENDOR, NimbusConfig, ProviderSettings};

use std::path::{Path, PathBuf};

/// Direct path to a config file, bypassing discovery
pub const CONFIG_PATH_ENV: &str = "NIMBUS_CONFIG_PATH";

/// Overrides `provider.region`
pub const REGION_ENV: &str = "NIMBUS_REGION";

/// Overrides `provider.endpoint`
pub const ENDPOINT_ENV: &str = "NIMBUS_ENDPOINT";

/// Overrides `provider.timeout_secs`
pub const TIMEOUT_ENV: &str = "NIMBUS_TIMEOUT_SECS";

const CANDIDATES: [&str; 2] = ["nimbus.local.yaml", "nimbus.yaml"];

/// Global config file (`~/.config/nimbus/config.yaml` on Linux)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nimbus").join("config.yaml"))
}

/// Locates the config file
///
/// Search order:
/// 1. `NIMBUS_CONFIG_PATH` (direct path)
/// 2. current directory: nimbus.local.yaml, nimbus.yaml
/// 3. ./.nimbus/ directory, same order
/// 4. global config file
pub fn find_config_file() -> Result<PathBuf> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
        tracing::warn!("{} points to a missing file: {}", CONFIG_PATH_ENV, path.display());
    }

    let current_dir = std::env::current_dir()?;

    for dir in [current_dir.clone(), current_dir.join(".nimbus")] {
        for filename in &CANDIDATES {
            let path = dir.join(filename);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    if let Some(global_config) = global_config_path()
        && global_config.exists()
    {
        return Ok(global_config);
    }

    Err(ConfigError::ConfigFileNotFound)
}

/// Reads and parses one config file
pub fn load(path: &Path) -> Result<NimbusConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: NimbusConfig =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.provider.validate()?;
    Ok(config)
}

/// Applies `NIMBUS_*` environment overrides on top of `config`
pub fn apply_env_overrides(config: &mut NimbusConfig) -> Result<()> {
    if let Ok(region) = std::env::var(REGION_ENV) {
        config.provider.region = region;
    }
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
        config.provider.endpoint = endpoint;
    }
    if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
        config.provider.timeout_secs = timeout
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: TIMEOUT_ENV,
                value: timeout.clone(),
            })?;
    }
    Ok(())
}

/// Discovers, loads and overrides the effective config
///
/// A missing config file is not an error: defaults are used and the
/// environment (or the command line) has to supply the rest.
pub fn load_config() -> Result<NimbusConfig> {
    let mut config = match find_config_file() {
        Ok(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load(&path)?
        }
        Err(ConfigError::ConfigFileNotFound) => {
            tracing::debug!("No config file found, using defaults");
            NimbusConfig::default()
        }
        Err(e) => return Err(e),
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}
