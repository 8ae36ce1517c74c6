//! Alibaba Cloud request and response payloads
//!
//! These mirror the vendor's OpenAPI shapes. Response fields are all
//! optional: the vendor omits fields freely and the mapper decides what an
//! absent value means. Nothing in here escapes this crate's mapper.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Alibaba Cloud API product a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    Ecs,
    Vpc,
    Bss,
}

impl Product {
    pub fn code(&self) -> &'static str {
        match self {
            Product::Ecs => "ecs",
            Product::Vpc => "vpc",
            Product::Bss => "bssopenapi",
        }
    }

    /// OpenAPI version the payloads in this module follow
    pub fn version(&self) -> &'static str {
        match self {
            Product::Ecs => "2014-05-26",
            Product::Vpc => "2016-04-28",
            Product::Bss => "2017-12-14",
        }
    }
}

/// A request that maps to exactly one vendor RPC
pub trait VendorRequest: Serialize + Send + Sync {
    const PRODUCT: Product;
    const ACTION: &'static str;

    type Response: DeserializeOwned + Send;
}

macro_rules! vendor_request {
    ($request:ty, $product:expr, $action:literal, $response:ty) => {
        impl VendorRequest for $request {
            const PRODUCT: Product = $product;
            const ACTION: &'static str = $action;
            type Response = $response;
        }
    };
}

/// Response carrying only the request ID
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AckResponse {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpAddressSet {
    #[serde(default)]
    pub ip_address: Vec<String>,
}

// ============ ECS: instances ============

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesSystemDisk {
    pub category: String,
    pub size: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesDataDisk {
    pub category: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagParam {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesRequest {
    pub region_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    pub image_id: String,
    pub instance_type: String,
    pub security_group_id: String,
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_charge_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_max_bandwidth_out: Option<i32>,
    pub password: String,
    pub system_disk: RunInstancesSystemDisk,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_disk: Vec<RunInstancesDataDisk>,
    pub amount: i32,
    pub min_amount: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<TagParam>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceIdSets {
    #[serde(default)]
    pub instance_id_set: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesResponse {
    pub request_id: Option<String>,
    pub instance_id_sets: Option<InstanceIdSets>,
}

vendor_request!(RunInstancesRequest, Product::Ecs, "RunInstances", RunInstancesResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<TagParam>,
    pub page_number: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcAttributes {
    pub vpc_id: Option<String>,
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: Option<String>,
    pub private_ip_address: Option<IpAddressSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupIdSet {
    #[serde(default)]
    pub security_group_id: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EcsInstance {
    pub instance_id: Option<String>,
    pub instance_charge_type: Option<String>,
    pub image_id: Option<String>,
    pub status: Option<String>,
    pub internet_charge_type: Option<String>,
    pub internet_max_bandwidth_out: Option<i32>,
    pub public_ip_address: Option<IpAddressSet>,
    pub vpc_attributes: Option<VpcAttributes>,
    pub security_group_ids: Option<SecurityGroupIdSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceSet {
    #[serde(default)]
    pub instance: Vec<EcsInstance>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesResponse {
    pub request_id: Option<String>,
    pub total_count: Option<i64>,
    pub instances: Option<InstanceSet>,
}

vendor_request!(
    DescribeInstancesRequest,
    Product::Ecs,
    "DescribeInstances",
    DescribeInstancesResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInstancesRequest {
    pub region_id: String,
    pub instance_id: Vec<String>,
    pub force: bool,
}

vendor_request!(DeleteInstancesRequest, Product::Ecs, "DeleteInstances", AckResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartInstanceRequest {
    pub instance_id: String,
}

vendor_request!(StartInstanceRequest, Product::Ecs, "StartInstance", AckResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopInstanceRequest {
    pub instance_id: String,
}

vendor_request!(StopInstanceRequest, Product::Ecs, "StopInstance", AckResponse);

// ============ VPC ============

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpcRequest {
    pub region_id: String,
    pub cidr_block: String,
    pub vpc_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpcResponse {
    pub request_id: Option<String>,
    pub vpc_id: Option<String>,
}

vendor_request!(CreateVpcRequest, Product::Vpc, "CreateVpc", CreateVpcResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcAttributeRequest {
    pub vpc_id: String,
    pub region_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VSwitchIdSet {
    #[serde(rename = "VSwitchId", default)]
    pub v_switch_id: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcAttributeResponse {
    pub request_id: Option<String>,
    pub vpc_id: Option<String>,
    pub vpc_name: Option<String>,
    pub cidr_block: Option<String>,
    pub status: Option<String>,
    pub region_id: Option<String>,
    pub creation_time: Option<String>,
    #[serde(rename = "VSwitchIds")]
    pub v_switch_ids: Option<VSwitchIdSet>,
}

vendor_request!(
    DescribeVpcAttributeRequest,
    Product::Vpc,
    "DescribeVpcAttribute",
    DescribeVpcAttributeResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcsRequest {
    pub region_id: String,
    pub page_number: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcRecord {
    pub vpc_id: Option<String>,
    pub vpc_name: Option<String>,
    pub cidr_block: Option<String>,
    pub status: Option<String>,
    pub region_id: Option<String>,
    pub creation_time: Option<String>,
    #[serde(rename = "VSwitchIds")]
    pub v_switch_ids: Option<VSwitchIdSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcSet {
    #[serde(default)]
    pub vpc: Vec<VpcRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcsResponse {
    pub request_id: Option<String>,
    pub total_count: Option<i64>,
    pub vpcs: Option<VpcSet>,
}

vendor_request!(DescribeVpcsRequest, Product::Vpc, "DescribeVpcs", DescribeVpcsResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVSwitchRequest {
    pub region_id: String,
    pub zone_id: String,
    pub cidr_block: String,
    pub vpc_id: String,
    #[serde(rename = "VSwitchName")]
    pub v_switch_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVSwitchResponse {
    pub request_id: Option<String>,
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: Option<String>,
}

vendor_request!(CreateVSwitchRequest, Product::Vpc, "CreateVSwitch", CreateVSwitchResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVSwitchAttributesRequest {
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: String,
}

/// Subnet record; the attribute call returns the same fields at top level
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VSwitchRecord {
    pub vpc_id: Option<String>,
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: Option<String>,
    #[serde(rename = "VSwitchName")]
    pub v_switch_name: Option<String>,
    pub is_default: Option<bool>,
    pub available_ip_address_count: Option<i64>,
    pub status: Option<String>,
    pub creation_time: Option<String>,
    pub cidr_block: Option<String>,
    pub zone_id: Option<String>,
}

vendor_request!(
    DescribeVSwitchAttributesRequest,
    Product::Vpc,
    "DescribeVSwitchAttributes",
    VSwitchRecord
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVSwitchesRequest {
    pub vpc_id: String,
    pub page_number: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VSwitchSet {
    #[serde(rename = "VSwitch", default)]
    pub v_switch: Vec<VSwitchRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVSwitchesResponse {
    pub request_id: Option<String>,
    pub total_count: Option<i64>,
    #[serde(rename = "VSwitches")]
    pub v_switches: Option<VSwitchSet>,
}

vendor_request!(
    DescribeVSwitchesRequest,
    Product::Vpc,
    "DescribeVSwitches",
    DescribeVSwitchesResponse
);

// ============ ECS: security groups ============

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecurityGroupRequest {
    pub region_id: String,
    pub security_group_name: String,
    pub vpc_id: String,
    pub security_group_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecurityGroupResponse {
    pub request_id: Option<String>,
    pub security_group_id: Option<String>,
}

vendor_request!(
    CreateSecurityGroupRequest,
    Product::Ecs,
    "CreateSecurityGroup",
    CreateSecurityGroupResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizeSecurityGroupRequest {
    pub region_id: String,
    pub security_group_id: String,
    pub ip_protocol: String,
    pub port_range: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_group_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_cidr_ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_prefix_list_id: String,
}

vendor_request!(
    AuthorizeSecurityGroupRequest,
    Product::Ecs,
    "AuthorizeSecurityGroup",
    AckResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizeSecurityGroupEgressRequest {
    pub region_id: String,
    pub security_group_id: String,
    pub ip_protocol: String,
    pub port_range: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dest_group_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dest_cidr_ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dest_prefix_list_id: String,
}

vendor_request!(
    AuthorizeSecurityGroupEgressRequest,
    Product::Ecs,
    "AuthorizeSecurityGroupEgress",
    AckResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsRequest {
    pub region_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vpc_id: String,
    pub page_number: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupRecord {
    pub security_group_id: Option<String>,
    pub security_group_type: Option<String>,
    pub security_group_name: Option<String>,
    pub creation_time: Option<String>,
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupSet {
    #[serde(default)]
    pub security_group: Vec<SecurityGroupRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsResponse {
    pub request_id: Option<String>,
    pub total_count: Option<i64>,
    pub security_groups: Option<SecurityGroupSet>,
}

vendor_request!(
    DescribeSecurityGroupsRequest,
    Product::Ecs,
    "DescribeSecurityGroups",
    DescribeSecurityGroupsResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupAttributeRequest {
    pub region_id: String,
    pub security_group_id: String,
}

/// One rule of a security group
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Permission {
    pub direction: Option<String>,
    pub ip_protocol: Option<String>,
    pub port_range: Option<String>,
    pub source_group_id: Option<String>,
    pub source_cidr_ip: Option<String>,
    pub source_prefix_list_id: Option<String>,
    pub dest_group_id: Option<String>,
    pub dest_cidr_ip: Option<String>,
    pub dest_prefix_list_id: Option<String>,
    pub create_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionSet {
    #[serde(default)]
    pub permission: Vec<Permission>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupAttributeResponse {
    pub request_id: Option<String>,
    pub vpc_id: Option<String>,
    pub security_group_id: Option<String>,
    pub permissions: Option<PermissionSet>,
}

vendor_request!(
    DescribeSecurityGroupAttributeRequest,
    Product::Ecs,
    "DescribeSecurityGroupAttribute",
    DescribeSecurityGroupAttributeResponse
);

// ============ Inventory ============

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegionsRequest {
    pub accept_language: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionRecord {
    pub region_id: Option<String>,
    pub local_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionSet {
    #[serde(default)]
    pub region: Vec<RegionRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegionsResponse {
    pub request_id: Option<String>,
    pub regions: Option<RegionSet>,
}

vendor_request!(DescribeRegionsRequest, Product::Vpc, "DescribeRegions", DescribeRegionsResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesRequest {
    pub region_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneRecord {
    pub zone_id: Option<String>,
    pub local_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneSet {
    #[serde(default)]
    pub zone: Vec<ZoneRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesResponse {
    pub request_id: Option<String>,
    pub zones: Option<ZoneSet>,
}

vendor_request!(DescribeZonesRequest, Product::Vpc, "DescribeZones", DescribeZonesResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAvailableResourceRequest {
    pub region_id: String,
    pub zone_id: String,
    pub destination_resource: String,
    pub network_category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupportedResource {
    pub status: Option<String>,
    pub status_category: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupportedResourceSet {
    #[serde(default)]
    pub supported_resource: Vec<SupportedResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableResource {
    pub r#type: Option<String>,
    pub supported_resources: Option<SupportedResourceSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableResourceSet {
    #[serde(default)]
    pub available_resource: Vec<AvailableResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableZone {
    pub zone_id: Option<String>,
    pub status: Option<String>,
    pub available_resources: Option<AvailableResourceSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableZoneSet {
    #[serde(default)]
    pub available_zone: Vec<AvailableZone>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAvailableResourceResponse {
    pub request_id: Option<String>,
    pub available_zones: Option<AvailableZoneSet>,
}

vendor_request!(
    DescribeAvailableResourceRequest,
    Product::Ecs,
    "DescribeAvailableResource",
    DescribeAvailableResourceResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypesRequest {
    pub instance_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeRecord {
    pub instance_type_id: Option<String>,
    pub instance_type_family: Option<String>,
    pub cpu_core_count: Option<i32>,

    /// GiB, fractional for burstable types
    pub memory_size: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeSet {
    #[serde(default)]
    pub instance_type: Vec<InstanceTypeRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypesResponse {
    pub request_id: Option<String>,
    pub instance_types: Option<InstanceTypeSet>,
}

vendor_request!(
    DescribeInstanceTypesRequest,
    Product::Ecs,
    "DescribeInstanceTypes",
    DescribeInstanceTypesResponse
);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesRequest {
    pub region_id: String,
    pub page_number: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRecord {
    pub image_id: Option<String>,
    #[serde(rename = "OSType")]
    pub os_type: Option<String>,
    #[serde(rename = "OSName")]
    pub os_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSet {
    #[serde(default)]
    pub image: Vec<ImageRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesResponse {
    pub request_id: Option<String>,
    pub total_count: Option<i64>,
    pub images: Option<ImageSet>,
}

vendor_request!(DescribeImagesRequest, Product::Ecs, "DescribeImages", DescribeImagesResponse);

// ============ BSS: billing ============

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryOrdersRequest {
    pub create_time_start: String,
    pub create_time_end: String,
    pub page_num: i32,
    pub page_size: i32,
}

/// Order row; main-order listings and detail listings share this shape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderRecord {
    pub order_id: Option<String>,
    pub sub_order_id: Option<String>,
    pub create_time: Option<String>,
    pub product_code: Option<String>,
    pub quantity: Option<String>,
    pub usage_start_time: Option<String>,
    pub usage_end_time: Option<String>,
    pub region: Option<String>,
    pub subscription_type: Option<String>,
    pub payment_status: Option<String>,
    pub currency: Option<String>,
    pub pretax_amount: Option<String>,
    pub order_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderSet {
    #[serde(default)]
    pub order: Vec<OrderRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderData {
    pub total_count: Option<i64>,
    pub page_num: Option<i32>,
    pub page_size: Option<i32>,
    pub order_list: Option<OrderSet>,
}

/// Billing envelope: transport success does not imply business success
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrdersResponse {
    pub request_id: Option<String>,
    #[serde(default)]
    pub success: bool,
    pub code: Option<String>,
    pub message: Option<String>,
    pub data: Option<OrderData>,
}

impl OrdersResponse {
    pub fn orders(&self) -> &[OrderRecord] {
        self.data
            .as_ref()
            .and_then(|d| d.order_list.as_ref())
            .map(|l| l.order.as_slice())
            .unwrap_or_default()
    }
}

vendor_request!(QueryOrdersRequest, Product::Bss, "QueryOrders", OrdersResponse);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOrderDetailRequest {
    pub order_id: String,
}

vendor_request!(GetOrderDetailRequest, Product::Bss, "GetOrderDetail", OrdersResponse);
