//! Request and response types of the provider interface

use crate::model::{
    Image, InstanceInfo, InstanceType, Network, Order, Region, SecurityGroup, SecurityGroupRule,
    Switch, Tag, Vpc, Zone,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Disk to attach at creation time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskSpec {
    /// Vendor disk category (e.g. "cloud_essd")
    pub category: String,

    /// Size in GiB
    pub size: i32,

    /// Performance tier, empty for the vendor default
    #[serde(default)]
    pub performance_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Disks {
    pub system_disk: DiskSpec,

    #[serde(default)]
    pub data_disks: Vec<DiskSpec>,
}

/// Parameters for a batch instance creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInstancesParams {
    pub region: String,

    /// Zone to place the instances in, empty to let the subnet decide
    #[serde(default)]
    pub zone: String,

    pub image_id: String,
    pub instance_type: String,
    pub network: Network,

    #[serde(skip_serializing, default)]
    pub password: String,

    pub disks: Disks,

    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateVpcRequest {
    pub region_id: String,
    pub vpc_name: String,
    pub cidr_block: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateVpcResponse {
    pub vpc_id: String,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetVpcRequest {
    pub vpc_id: String,
    pub region_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetVpcResponse {
    pub vpc: Vpc,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeVpcsRequest {
    pub region_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeVpcsResponse {
    pub vpcs: Vec<Vpc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSwitchRequest {
    pub region_id: String,
    pub zone_id: String,
    pub cidr_block: String,
    pub vpc_id: String,
    pub switch_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSwitchResponse {
    pub switch_id: String,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetSwitchRequest {
    pub switch_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetSwitchResponse {
    pub switch: Switch,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeSwitchesRequest {
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeSwitchesResponse {
    pub switches: Vec<Switch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSecurityGroupRequest {
    pub region_id: String,
    pub security_group_name: String,
    pub vpc_id: String,

    /// "normal" or "enterprise"
    pub security_group_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSecurityGroupResponse {
    pub security_group_id: String,
    pub request_id: String,
}

/// A rule to authorize on a security group
///
/// `group_id`, `cidr_ip` and `prefix_list_id` describe the peer: the source
/// for ingress rules, the destination for egress rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddSecurityGroupRuleRequest {
    pub region_id: String,
    pub security_group_id: String,
    pub ip_protocol: String,

    /// "from/to", e.g. "22/22"
    pub port_range: String,

    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub cidr_ip: String,
    #[serde(default)]
    pub prefix_list_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeSecurityGroupsRequest {
    pub region_id: String,
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeSecurityGroupsResponse {
    pub groups: Vec<SecurityGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeGroupRulesRequest {
    pub region_id: String,
    pub security_group_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeGroupRulesResponse {
    pub rules: Vec<SecurityGroupRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRegionsResponse {
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetZonesRequest {
    pub region_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetZonesResponse {
    pub zones: Vec<Zone>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeAvailableResourceRequest {
    pub region_id: String,
    pub zone_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeAvailableResourceResponse {
    /// Instance types offered, keyed by zone ID
    pub instance_types: HashMap<String, Vec<InstanceType>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeInstanceTypesRequest {
    pub type_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeInstanceTypesResponse {
    pub infos: Vec<InstanceInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeImagesRequest {
    pub region_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeImagesResponse {
    pub images: Vec<Image>,
}

/// Billing query over an order creation window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrdersRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    /// 1-based page of main orders
    pub page_num: i32,
    pub page_size: i32,
}

impl GetOrdersRequest {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            page_num: 1,
            page_size: 20,
        }
    }

    pub fn with_page(mut self, page_num: i32, page_size: i32) -> Self {
        self.page_num = page_num;
        self.page_size = page_size;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetOrdersResponse {
    pub orders: Vec<Order>,
}
