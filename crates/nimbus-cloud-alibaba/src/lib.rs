//! Alibaba Cloud provider for Nimbus
//!
//! This crate implements the `CloudProvider` trait for Alibaba Cloud
//! (ECS, VPC and the BSS billing API).
//!
//! # Layers
//!
//! - `transport`: one vendor RPC per call, over an HTTPS gateway
//! - `types`: vendor payload shapes, all response fields optional
//! - `mapper`: payload → neutral model, pure functions
//! - `provider`: the facade, adding pagination, batching and billing fan-out
//!
//! # Requirements
//!
//! - A signing gateway reachable over HTTP(S) that forwards
//!   `POST /{product}/{version}/{action}` to the vendor
//!
//! # Example
//!
//! ```ignore
//! use nimbus_cloud::CloudProvider;
//! use nimbus_cloud_alibaba::{AlibabaCloudProvider, GatewayConfig};
//!
//! let provider = AlibabaCloudProvider::connect(GatewayConfig::new(
//!     "https://cloud-gateway.internal",
//!     "cn-hangzhou",
//! ))?;
//!
//! let instances = provider
//!     .get_instances_by_cluster("cn-hangzhou", "prod")
//!     .await?;
//! ```

pub mod error;
pub mod mapper;
pub mod provider;
pub mod transport;
pub mod types;

pub use error::{AlibabaError, Result};
pub use provider::AlibabaCloudProvider;
pub use transport::{AlibabaTransport, GatewayConfig, GatewayTransport};
