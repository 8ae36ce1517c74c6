//! Nimbus Cloud Provider Abstraction
//!
//! This crate defines the vendor-neutral surface that every cloud adapter
//! implements: compute lifecycle, networking, inventory and billing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                     caller                       │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                nimbus-cloud                      │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Provider Abstraction             │   │
//! │  │  trait CloudProvider { ... }              │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │   Paging     │  │ Batch limits │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │ alibaba-cloud │  transport → mapper → model
//! │   provider    │
//! └───────────────┘
//! ```

pub mod batch;
pub mod error;
pub mod model;
pub mod paging;
pub mod provider;
pub mod request;

// Re-exports
pub use batch::BatchLimit;
pub use error::{CloudError, Result};
pub use model::{
    CLUSTER_NAME_TAG, ChargeType, EXTEND_MAIN_ORDER_ID, EXTEND_ORDER_TYPE, Image, Instance,
    InstanceInfo, InstanceType, Network, Order, PayStatus, Region, RuleDirection, RulePeer,
    SecurityGroup, SecurityGroupRule, Switch, Tag, Vpc, Zone,
};
pub use paging::{PAGE_SIZE, Page, PageStyle, collect_pages};
pub use provider::CloudProvider;
pub use request::*;
