pub mod billing;
pub mod compute;
pub mod inventory;
pub mod network;

use colored::Colorize;
use nimbus_cloud::CloudProvider;
use nimbus_config::ProviderSettings;
use serde::Serialize;

/// What every command handler works against
pub struct Context<'a> {
    pub provider: &'a dyn CloudProvider,
    pub settings: &'a ProviderSettings,
}

impl<'a> Context<'a> {
    pub fn new(provider: &'a dyn CloudProvider, settings: &'a ProviderSettings) -> Self {
        Self { provider, settings }
    }

    /// Region of the session; commands that address a region need one
    pub fn region(&self) -> anyhow::Result<&str> {
        if self.settings.region.is_empty() {
            anyhow::bail!(
                "No region configured. Pass --region, set {} or add provider.region to nimbus.yaml",
                nimbus_config::REGION_ENV
            );
        }
        Ok(&self.settings.region)
    }
}

/// Writes `value` to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line confirmation on stderr, keeping stdout parseable
pub fn print_done(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}
