//! Static provider registry

use nimbus_cloud::{CloudError, CloudProvider, Result};
use nimbus_cloud_alibaba::{AlibabaCloudProvider, GatewayConfig};
use nimbus_config::ProviderSettings;

/// Vendors this build can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Alibaba,
}

impl Vendor {
    /// Resolves a vendor identifier, ignoring case
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "alibaba" | "aliyun" | "alibabacloud" => Some(Vendor::Alibaba),
            _ => None,
        }
    }
}

/// Builds the provider named by `settings.vendor`
pub fn create_provider(settings: &ProviderSettings) -> Result<Box<dyn CloudProvider>> {
    let vendor = Vendor::parse(&settings.vendor)
        .ok_or_else(|| CloudError::ProviderNotFound(settings.vendor.clone()))?;

    tracing::debug!(
        "Creating {:?} provider (region: {}, endpoint: {})",
        vendor,
        settings.region,
        settings.endpoint
    );

    match vendor {
        Vendor::Alibaba => {
            let config = GatewayConfig::new(&settings.endpoint, &settings.region)
                .with_timeout(settings.timeout());
            Ok(Box::new(AlibabaCloudProvider::connect(config)?))
        }
    }
}
