//! Config file schema

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gateway request timeout when the config does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Vendor used when the config does not name one
pub const DEFAULT_VENDOR: &str = "alibaba";

/// Root of `nimbus.yaml`
///
/// ```yaml
/// provider:
///   vendor: alibaba
///   region: cn-hangzhou
///   endpoint: https://cloud-gateway.internal
///   timeout_secs: 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NimbusConfig {
    pub provider: ProviderSettings,
}

/// Which vendor to talk to and how to reach it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Vendor identifier, e.g. "alibaba"
    pub vendor: String,

    /// Region the session is bound to
    pub region: String,

    /// Base URL of the signing gateway
    pub endpoint: String,

    /// Must be at least 1
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            vendor: DEFAULT_VENDOR.to_string(),
            region: String::new(),
            endpoint: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Rejects values no gateway call could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "provider.timeout_secs",
                value: self.timeout_secs.to_string(),
            });
        }
        Ok(())
    }
}
