//! Vendor-neutral resource model
//!
//! Every value here is a read-only projection built fresh for each call.
//! Provider adapters fill these in from vendor payloads; nothing in this
//! module knows which vendor produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tag key used to group instances into a cluster
pub const CLUSTER_NAME_TAG: &str = "ClusterName";

/// Key/value label attached to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    /// Parses `key=value`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Tag::new(key, value)),
            _ => Err(format!("invalid tag '{}', expected key=value", s)),
        }
    }
}

/// Compute instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Vendor instance ID
    pub id: String,

    /// Billing model the instance was created with
    pub cost_way: String,

    /// Name of the provider that owns the instance
    pub provider: String,

    /// Comma-joined private addresses, in vendor order
    pub ip_inner: String,

    /// First public address, or empty
    pub ip_outer: String,

    pub image_id: String,

    pub network: Option<Network>,

    /// Vendor lifecycle status (e.g. "Running", "Stopped")
    pub status: String,
}

/// Network attachment of an instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub vpc_id: String,

    pub subnet_id: String,

    /// Comma-joined security group IDs
    pub security_group: String,

    pub internet_charge_type: String,

    /// Outbound bandwidth cap in Mbps; 0 means no public bandwidth
    pub internet_max_bandwidth_out: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vpc {
    pub vpc_id: String,
    pub vpc_name: String,
    pub cidr_block: String,
    pub switch_ids: Vec<String>,
    pub region_id: String,
    pub status: String,
    pub create_at: String,
}

/// Subnet (called a VSwitch by some vendors)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub vpc_id: String,
    pub switch_id: String,
    pub name: String,

    /// 1 when this is the zone's default subnet, otherwise 0
    pub is_default: i32,

    pub available_ip_address_count: i64,
    pub status: String,
    pub create_at: String,
    pub cidr_block: String,
    pub zone_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub security_group_id: String,
    pub security_group_type: String,
    pub security_group_name: String,
    pub create_at: String,
    pub vpc_id: String,
    pub region_id: String,
}

/// Traffic direction of a security group rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleDirection {
    Ingress,
    Egress,
}

impl RuleDirection {
    /// Parses a vendor direction tag; unknown values yield `None`
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "ingress" => Some(RuleDirection::Ingress),
            "egress" => Some(RuleDirection::Egress),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleDirection::Ingress => "ingress",
            RuleDirection::Egress => "egress",
        }
    }
}

impl std::fmt::Display for RuleDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The other end of a security group rule
///
/// For ingress rules this is the traffic source, for egress the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePeer {
    pub group_id: String,
    pub cidr_ip: String,
    pub prefix_list_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupRule {
    pub vpc_id: String,
    pub security_group_id: String,
    pub port_range: String,
    pub protocol: String,

    /// Direction tag as reported by the vendor
    pub direction: String,

    #[serde(flatten)]
    pub peer: RulePeer,

    pub create_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub region_id: String,
    pub local_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub zone_id: String,
    pub local_name: String,
}

/// Instance type offered in a zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceType {
    pub status: String,
    pub status_category: String,

    /// Instance type name, e.g. "ecs.g6.large"
    pub value: String,
}

/// Hardware spec of an instance type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub core: i32,

    /// Memory in GiB
    pub memory: i32,

    pub family: String,
    pub ins_type_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub os_type: String,
    pub os_name: String,
    pub image_id: String,
}

/// How a sub-order is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeType {
    /// Paid up front for a fixed term
    PrePaid,
    /// Pay-as-you-go
    PostPaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayStatus {
    Paid,
    Unpaid,
    Cancelled,
}

/// Extension key carrying the vendor main order a sub-order belongs to
pub const EXTEND_MAIN_ORDER_ID: &str = "main_order_id";

/// Extension key carrying the vendor order type (new, renew, upgrade, ...)
pub const EXTEND_ORDER_TYPE: &str = "order_type";

/// One billable sub-order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Sub-order ID
    pub order_id: String,

    pub order_time: Option<DateTime<Utc>>,
    pub product: String,
    pub quantity: i32,
    pub usage_start_time: Option<DateTime<Utc>>,
    pub usage_end_time: Option<DateTime<Utc>>,
    pub region_id: String,
    pub charge_type: Option<ChargeType>,
    pub pay_status: Option<PayStatus>,
    pub currency: String,
    pub cost: f32,

    /// Open extension map (see `EXTEND_*` keys)
    pub extend: HashMap<String, serde_json::Value>,
}

impl Order {
    /// Main order ID this sub-order was expanded from
    pub fn main_order_id(&self) -> Option<&str> {
        self.extend.get(EXTEND_MAIN_ORDER_ID).and_then(|v| v.as_str())
    }
}
