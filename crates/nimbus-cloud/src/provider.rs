//! Cloud provider trait definition

use crate::error::Result;
use crate::model::{CLUSTER_NAME_TAG, Instance, Tag};
use crate::request::*;
use async_trait::async_trait;

/// Cloud provider abstraction trait
///
/// Each vendor adapter implements this trait over one vendor session bound to
/// a region. Implementations hold no mutable state, so a single provider can
/// serve concurrent callers. No operation retries on its own: a failed call
/// returns the error and the caller decides whether to run it again (see
/// [`CloudError::is_retryable`](crate::CloudError::is_retryable)).
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Returns the provider name (e.g., "AlibabaCloud")
    fn provider_type(&self) -> &str;

    // ---- Lifecycle ----

    /// Create `count` identical instances in one call.
    ///
    /// `count` is bounded by the vendor's per-call maximum; larger batches
    /// must be split by the caller.
    async fn batch_create(&self, params: &CreateInstancesParams, count: usize)
    -> Result<Vec<String>>;

    /// Describe instances by ID
    async fn get_instances(&self, ids: &[String]) -> Result<Vec<Instance>>;

    /// Describe every instance in `region` carrying all of `tags`
    async fn get_instances_by_tags(&self, region: &str, tags: &[Tag]) -> Result<Vec<Instance>>;

    /// Describe every instance tagged as a member of `cluster_name`
    async fn get_instances_by_cluster(
        &self,
        region: &str,
        cluster_name: &str,
    ) -> Result<Vec<Instance>> {
        self.get_instances_by_tags(region, &[Tag::new(CLUSTER_NAME_TAG, cluster_name)])
            .await
    }

    /// Force-delete instances
    async fn batch_delete(&self, ids: &[String], region: &str) -> Result<()>;

    async fn start_instance(&self, id: &str) -> Result<()>;

    async fn stop_instance(&self, id: &str) -> Result<()>;

    // ---- Networking ----

    async fn create_vpc(&self, req: &CreateVpcRequest) -> Result<CreateVpcResponse>;

    async fn get_vpc(&self, req: &GetVpcRequest) -> Result<GetVpcResponse>;

    async fn describe_vpcs(&self, req: &DescribeVpcsRequest) -> Result<DescribeVpcsResponse>;

    async fn create_switch(&self, req: &CreateSwitchRequest) -> Result<CreateSwitchResponse>;

    async fn get_switch(&self, req: &GetSwitchRequest) -> Result<GetSwitchResponse>;

    async fn describe_switches(
        &self,
        req: &DescribeSwitchesRequest,
    ) -> Result<DescribeSwitchesResponse>;

    async fn create_security_group(
        &self,
        req: &CreateSecurityGroupRequest,
    ) -> Result<CreateSecurityGroupResponse>;

    async fn add_ingress_security_group_rule(&self, req: &AddSecurityGroupRuleRequest)
    -> Result<()>;

    async fn add_egress_security_group_rule(&self, req: &AddSecurityGroupRuleRequest)
    -> Result<()>;

    async fn describe_security_groups(
        &self,
        req: &DescribeSecurityGroupsRequest,
    ) -> Result<DescribeSecurityGroupsResponse>;

    async fn describe_group_rules(
        &self,
        req: &DescribeGroupRulesRequest,
    ) -> Result<DescribeGroupRulesResponse>;

    // ---- Inventory ----

    async fn get_regions(&self) -> Result<GetRegionsResponse>;

    async fn get_zones(&self, req: &GetZonesRequest) -> Result<GetZonesResponse>;

    /// Instance types currently offered, grouped by zone
    async fn describe_available_resource(
        &self,
        req: &DescribeAvailableResourceRequest,
    ) -> Result<DescribeAvailableResourceResponse>;

    async fn describe_instance_types(
        &self,
        req: &DescribeInstanceTypesRequest,
    ) -> Result<DescribeInstanceTypesResponse>;

    async fn describe_images(&self, req: &DescribeImagesRequest) -> Result<DescribeImagesResponse>;

    // ---- Billing ----

    /// List sub-orders of every main order created in the requested window.
    ///
    /// Either all requested orders are returned or an error; a failure on any
    /// detail lookup discards the whole result.
    async fn get_orders(&self, req: &GetOrdersRequest) -> Result<GetOrdersResponse>;
}
