use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Config file not found. Looked in:\n\
        - $NIMBUS_CONFIG_PATH\n\
        - current directory: nimbus.local.yaml, nimbus.yaml\n\
        - ./.nimbus/ directory\n\
        - ~/.config/nimbus/config.yaml"
    )]
    ConfigFileNotFound,

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
