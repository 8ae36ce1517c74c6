//! Alibaba Cloud provider implementation

use crate::mapper::{self, CLOUD_NAME};
use crate::transport::{AlibabaTransport, GatewayConfig, GatewayTransport};
use crate::types::{self, VendorRequest};
use async_trait::async_trait;
use nimbus_cloud::{
    AddSecurityGroupRuleRequest, BatchLimit, CloudError, CloudProvider, CreateInstancesParams,
    CreateSecurityGroupRequest, CreateSecurityGroupResponse, CreateSwitchRequest,
    CreateSwitchResponse, CreateVpcRequest, CreateVpcResponse, DescribeAvailableResourceRequest,
    DescribeAvailableResourceResponse, DescribeGroupRulesRequest, DescribeGroupRulesResponse,
    DescribeImagesRequest, DescribeImagesResponse, DescribeInstanceTypesRequest,
    DescribeInstanceTypesResponse, DescribeSecurityGroupsRequest, DescribeSecurityGroupsResponse,
    DescribeSwitchesRequest, DescribeSwitchesResponse, DescribeVpcsRequest, DescribeVpcsResponse,
    DiskSpec, GetOrdersRequest, GetOrdersResponse, GetRegionsResponse, GetSwitchRequest,
    GetSwitchResponse, GetVpcRequest, GetVpcResponse, GetZonesRequest, GetZonesResponse, Instance,
    PAGE_SIZE, Page, PageStyle, Result, Tag, collect_pages,
};
use serde::Serialize;

/// RunInstances accepts at most 100 instances; larger batches are the caller's to split
pub const RUN_INSTANCES: BatchLimit = BatchLimit::new("RunInstances", 100);

/// DeleteInstances accepts at most 50 IDs per call
pub const DELETE_INSTANCES: BatchLimit = BatchLimit::new("DeleteInstances", 50);

/// DescribeInstances accepts at most 50 IDs per call
pub const DESCRIBE_INSTANCES: BatchLimit = BatchLimit::new("DescribeInstances", 50);

/// Language of region display names
pub const ACCEPT_LANGUAGE: &str = "zh-CN";

/// Average number of sub-orders per main order, used to size the result
const SUB_ORDERS_PER_MAIN: usize = 2;

/// BSS request timestamps
const BSS_REQUEST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Alibaba Cloud provider
///
/// One provider wraps one vendor session bound to a region.
pub struct AlibabaCloudProvider<T: AlibabaTransport = GatewayTransport> {
    transport: T,
}

impl AlibabaCloudProvider<GatewayTransport> {
    /// Opens a session against the HTTPS gateway
    pub fn connect(config: GatewayConfig) -> crate::error::Result<Self> {
        Ok(Self::with_transport(GatewayTransport::new(config)?))
    }
}

impl<T: AlibabaTransport> AlibabaCloudProvider<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn region(&self) -> &str {
        self.transport.region()
    }

    /// Issues one vendor call, logging the request on failure
    async fn invoke<R: VendorRequest>(&self, request: &R) -> Result<R::Response> {
        self.transport
            .call(request)
            .await
            .map_err(|e| rejected(request, CloudError::from(e)))
    }

    async fn describe_instance_page(
        &self,
        region_id: &str,
        tags: &[types::TagParam],
        page_number: i32,
    ) -> Result<Page<types::EcsInstance>> {
        let response = self
            .invoke(&types::DescribeInstancesRequest {
                region_id: Some(region_id.to_string()),
                tag: tags.to_vec(),
                page_number,
                page_size: PAGE_SIZE,
                ..Default::default()
            })
            .await?;

        Ok(Page::new(
            response.instances.map(|s| s.instance).unwrap_or_default(),
            response.total_count.unwrap_or_default(),
        ))
    }

    /// Expands one main order into its sub-orders
    async fn order_details(&self, order_id: &str) -> Result<Vec<types::OrderRecord>> {
        let request = types::GetOrderDetailRequest {
            order_id: order_id.to_string(),
        };
        let response = self.invoke(&request).await?;

        if !response.success {
            return Err(rejected(&request, business_error(&response)));
        }

        Ok(response.orders().to_vec())
    }
}

/// Request body for log output, with secrets removed
fn loggable<R: Serialize>(request: &R) -> serde_json::Value {
    let mut value = serde_json::to_value(request).unwrap_or_default();
    if let Some(fields) = value.as_object_mut() {
        fields.remove("Password");
    }
    value
}

/// Logs a failed call together with its request, then hands the error back
fn rejected<R: VendorRequest>(request: &R, error: CloudError) -> CloudError {
    tracing::error!(
        "{} failed: {} (request: {})",
        R::ACTION,
        error,
        loggable(request)
    );
    error
}

fn business_error(response: &types::OrdersResponse) -> CloudError {
    let message = response
        .message
        .clone()
        .or_else(|| response.code.clone())
        .unwrap_or_else(|| "request was not successful".to_string());
    CloudError::Business(message)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn tag_params(tags: &[Tag]) -> Vec<types::TagParam> {
    tags.iter()
        .map(|t| types::TagParam {
            key: t.key.clone(),
            value: t.value.clone(),
        })
        .collect()
}

fn data_disk(disk: &DiskSpec) -> types::RunInstancesDataDisk {
    types::RunInstancesDataDisk {
        category: disk.category.clone(),
        size: disk.size.to_string(),
        performance_level: non_empty(&disk.performance_level),
    }
}

fn run_instances_request(
    params: &CreateInstancesParams,
    count: usize,
) -> types::RunInstancesRequest {
    let network = &params.network;
    let amount = i32::try_from(count).unwrap_or(i32::MAX);

    // Bandwidth settings only apply when a public bandwidth is requested
    let public_bandwidth = network.internet_max_bandwidth_out != 0;
    let internet_charge_type = public_bandwidth
        .then(|| non_empty(&network.internet_charge_type))
        .flatten();
    let internet_max_bandwidth_out =
        public_bandwidth.then_some(network.internet_max_bandwidth_out);

    types::RunInstancesRequest {
        region_id: params.region.clone(),
        zone_id: non_empty(&params.zone),
        image_id: params.image_id.clone(),
        instance_type: params.instance_type.clone(),
        security_group_id: network.security_group.clone(),
        v_switch_id: network.subnet_id.clone(),
        internet_charge_type,
        internet_max_bandwidth_out,
        password: params.password.clone(),
        system_disk: types::RunInstancesSystemDisk {
            category: params.disks.system_disk.category.clone(),
            size: params.disks.system_disk.size.to_string(),
        },
        data_disk: params.disks.data_disks.iter().map(data_disk).collect(),
        amount,
        min_amount: amount,
        tag: tag_params(&params.tags),
    }
}

#[async_trait]
impl<T: AlibabaTransport> CloudProvider for AlibabaCloudProvider<T> {
    fn provider_type(&self) -> &str {
        CLOUD_NAME
    }

    async fn batch_create(
        &self,
        params: &CreateInstancesParams,
        count: usize,
    ) -> Result<Vec<String>> {
        let request = run_instances_request(params, count);
        RUN_INSTANCES
            .check(count)
            .map_err(|e| rejected(&request, e))?;

        let response = self.invoke(&request).await?;
        let ids = response
            .instance_id_sets
            .map(|s| s.instance_id_set)
            .unwrap_or_default();

        tracing::info!(
            "[RunInstances] created {} instance(s), requestId: {}",
            ids.len(),
            response.request_id.unwrap_or_default()
        );
        Ok(ids)
    }

    async fn get_instances(&self, ids: &[String]) -> Result<Vec<Instance>> {
        let mut records = Vec::with_capacity(ids.len());

        for chunk in DESCRIBE_INSTANCES.split(ids) {
            let response = self
                .invoke(&types::DescribeInstancesRequest {
                    region_id: Some(self.region().to_string()),
                    instance_ids: Some(chunk.to_vec()),
                    page_number: 1,
                    page_size: PAGE_SIZE,
                    ..Default::default()
                })
                .await?;
            records.extend(response.instances.map(|s| s.instance).unwrap_or_default());
        }

        Ok(mapper::instances(&records))
    }

    async fn get_instances_by_tags(&self, region: &str, tags: &[Tag]) -> Result<Vec<Instance>> {
        let tags = tag_params(tags);
        let records = collect_pages(PageStyle::ComputedMax, PAGE_SIZE, |page| {
            self.describe_instance_page(region, &tags, page)
        })
        .await?;

        Ok(mapper::instances(&records))
    }

    async fn batch_delete(&self, ids: &[String], region: &str) -> Result<()> {
        tracing::debug!(
            "[DeleteInstances] {} id(s) in {} call(s)",
            ids.len(),
            DELETE_INSTANCES.calls_for(ids.len())
        );
        for chunk in DELETE_INSTANCES.split(ids) {
            let response = self
                .invoke(&types::DeleteInstancesRequest {
                    region_id: region.to_string(),
                    instance_id: chunk.to_vec(),
                    force: true,
                })
                .await?;
            tracing::info!(
                "[DeleteInstances] {} instance(s), requestId: {}",
                chunk.len(),
                response.request_id.unwrap_or_default()
            );
        }
        Ok(())
    }

    async fn start_instance(&self, id: &str) -> Result<()> {
        let response = self
            .invoke(&types::StartInstanceRequest {
                instance_id: id.to_string(),
            })
            .await?;
        tracing::info!(
            "[StartInstance] {}, requestId: {}",
            id,
            response.request_id.unwrap_or_default()
        );
        Ok(())
    }

    async fn stop_instance(&self, id: &str) -> Result<()> {
        let response = self
            .invoke(&types::StopInstanceRequest {
                instance_id: id.to_string(),
            })
            .await?;
        tracing::info!(
            "[StopInstance] {}, requestId: {}",
            id,
            response.request_id.unwrap_or_default()
        );
        Ok(())
    }

    async fn create_vpc(&self, req: &CreateVpcRequest) -> Result<CreateVpcResponse> {
        let response = self
            .invoke(&types::CreateVpcRequest {
                region_id: req.region_id.clone(),
                cidr_block: req.cidr_block.clone(),
                vpc_name: req.vpc_name.clone(),
            })
            .await?;

        Ok(CreateVpcResponse {
            vpc_id: response.vpc_id.unwrap_or_default(),
            request_id: response.request_id.unwrap_or_default(),
        })
    }

    async fn get_vpc(&self, req: &GetVpcRequest) -> Result<GetVpcResponse> {
        let response = self
            .invoke(&types::DescribeVpcAttributeRequest {
                vpc_id: req.vpc_id.clone(),
                region_id: req.region_id.clone(),
            })
            .await?;

        Ok(GetVpcResponse {
            vpc: mapper::vpc_attribute(&response),
        })
    }

    async fn describe_vpcs(&self, req: &DescribeVpcsRequest) -> Result<DescribeVpcsResponse> {
        let records = collect_pages(PageStyle::CountBased, PAGE_SIZE, |page_number| async move {
            let response = self
                .invoke(&types::DescribeVpcsRequest {
                    region_id: req.region_id.clone(),
                    page_number,
                    page_size: PAGE_SIZE,
                })
                .await?;
            Ok(Page::new(
                response.vpcs.map(|s| s.vpc).unwrap_or_default(),
                response.total_count.unwrap_or_default(),
            ))
        })
        .await?;

        Ok(DescribeVpcsResponse {
            vpcs: records.iter().map(mapper::vpc).collect(),
        })
    }

    async fn create_switch(&self, req: &CreateSwitchRequest) -> Result<CreateSwitchResponse> {
        let response = self
            .invoke(&types::CreateVSwitchRequest {
                region_id: req.region_id.clone(),
                zone_id: req.zone_id.clone(),
                cidr_block: req.cidr_block.clone(),
                vpc_id: req.vpc_id.clone(),
                v_switch_name: req.switch_name.clone(),
            })
            .await?;

        Ok(CreateSwitchResponse {
            switch_id: response.v_switch_id.unwrap_or_default(),
            request_id: response.request_id.unwrap_or_default(),
        })
    }

    async fn get_switch(&self, req: &GetSwitchRequest) -> Result<GetSwitchResponse> {
        let response = self
            .invoke(&types::DescribeVSwitchAttributesRequest {
                v_switch_id: req.switch_id.clone(),
            })
            .await?;

        Ok(GetSwitchResponse {
            switch: mapper::switch(&response),
        })
    }

    async fn describe_switches(
        &self,
        req: &DescribeSwitchesRequest,
    ) -> Result<DescribeSwitchesResponse> {
        let records = collect_pages(PageStyle::CountBased, PAGE_SIZE, |page_number| async move {
            let response = self
                .invoke(&types::DescribeVSwitchesRequest {
                    vpc_id: req.vpc_id.clone(),
                    page_number,
                    page_size: PAGE_SIZE,
                })
                .await?;
            Ok(Page::new(
                response.v_switches.map(|s| s.v_switch).unwrap_or_default(),
                response.total_count.unwrap_or_default(),
            ))
        })
        .await?;

        Ok(DescribeSwitchesResponse {
            switches: records.iter().map(mapper::switch).collect(),
        })
    }

    async fn create_security_group(
        &self,
        req: &CreateSecurityGroupRequest,
    ) -> Result<CreateSecurityGroupResponse> {
        let response = self
            .invoke(&types::CreateSecurityGroupRequest {
                region_id: req.region_id.clone(),
                security_group_name: req.security_group_name.clone(),
                vpc_id: req.vpc_id.clone(),
                security_group_type: req.security_group_type.clone(),
            })
            .await?;

        Ok(CreateSecurityGroupResponse {
            security_group_id: response.security_group_id.unwrap_or_default(),
            request_id: response.request_id.unwrap_or_default(),
        })
    }

    async fn add_ingress_security_group_rule(
        &self,
        req: &AddSecurityGroupRuleRequest,
    ) -> Result<()> {
        self.invoke(&types::AuthorizeSecurityGroupRequest {
            region_id: req.region_id.clone(),
            security_group_id: req.security_group_id.clone(),
            ip_protocol: req.ip_protocol.clone(),
            port_range: req.port_range.clone(),
            source_group_id: req.group_id.clone(),
            source_cidr_ip: req.cidr_ip.clone(),
            source_prefix_list_id: req.prefix_list_id.clone(),
        })
        .await?;
        Ok(())
    }

    async fn add_egress_security_group_rule(
        &self,
        req: &AddSecurityGroupRuleRequest,
    ) -> Result<()> {
        self.invoke(&types::AuthorizeSecurityGroupEgressRequest {
            region_id: req.region_id.clone(),
            security_group_id: req.security_group_id.clone(),
            ip_protocol: req.ip_protocol.clone(),
            port_range: req.port_range.clone(),
            dest_group_id: req.group_id.clone(),
            dest_cidr_ip: req.cidr_ip.clone(),
            dest_prefix_list_id: req.prefix_list_id.clone(),
        })
        .await?;
        Ok(())
    }

    async fn describe_security_groups(
        &self,
        req: &DescribeSecurityGroupsRequest,
    ) -> Result<DescribeSecurityGroupsResponse> {
        let records = collect_pages(PageStyle::CountBased, PAGE_SIZE, |page_number| async move {
            let response = self
                .invoke(&types::DescribeSecurityGroupsRequest {
                    region_id: req.region_id.clone(),
                    vpc_id: req.vpc_id.clone(),
                    page_number,
                    page_size: PAGE_SIZE,
                })
                .await?;
            Ok(Page::new(
                response
                    .security_groups
                    .map(|s| s.security_group)
                    .unwrap_or_default(),
                response.total_count.unwrap_or_default(),
            ))
        })
        .await?;

        Ok(DescribeSecurityGroupsResponse {
            groups: records
                .iter()
                .map(|r| mapper::security_group(r, &req.region_id))
                .collect(),
        })
    }

    async fn describe_group_rules(
        &self,
        req: &DescribeGroupRulesRequest,
    ) -> Result<DescribeGroupRulesResponse> {
        let response = self
            .invoke(&types::DescribeSecurityGroupAttributeRequest {
                region_id: req.region_id.clone(),
                security_group_id: req.security_group_id.clone(),
            })
            .await?;

        let vpc_id = response.vpc_id.unwrap_or_default();
        let rules = response
            .permissions
            .map(|p| p.permission)
            .unwrap_or_default()
            .iter()
            .map(|p| mapper::security_group_rule(p, &vpc_id, &req.security_group_id))
            .collect();

        Ok(DescribeGroupRulesResponse { rules })
    }

    async fn get_regions(&self) -> Result<GetRegionsResponse> {
        let response = self
            .invoke(&types::DescribeRegionsRequest {
                accept_language: ACCEPT_LANGUAGE.to_string(),
            })
            .await?;

        Ok(GetRegionsResponse {
            regions: response
                .regions
                .map(|s| s.region)
                .unwrap_or_default()
                .iter()
                .map(mapper::region)
                .collect(),
        })
    }

    async fn get_zones(&self, req: &GetZonesRequest) -> Result<GetZonesResponse> {
        let response = self
            .invoke(&types::DescribeZonesRequest {
                region_id: req.region_id.clone(),
            })
            .await?;

        Ok(GetZonesResponse {
            zones: response
                .zones
                .map(|s| s.zone)
                .unwrap_or_default()
                .iter()
                .map(mapper::zone)
                .collect(),
        })
    }

    async fn describe_available_resource(
        &self,
        req: &DescribeAvailableResourceRequest,
    ) -> Result<DescribeAvailableResourceResponse> {
        let response = self
            .invoke(&types::DescribeAvailableResourceRequest {
                region_id: req.region_id.clone(),
                zone_id: req.zone_id.clone(),
                destination_resource: "InstanceType".to_string(),
                network_category: "vpc".to_string(),
            })
            .await?;

        let zones = response
            .available_zones
            .map(|s| s.available_zone)
            .unwrap_or_default();

        Ok(DescribeAvailableResourceResponse {
            instance_types: mapper::available_instance_types(&zones),
        })
    }

    async fn describe_instance_types(
        &self,
        req: &DescribeInstanceTypesRequest,
    ) -> Result<DescribeInstanceTypesResponse> {
        let response = self
            .invoke(&types::DescribeInstanceTypesRequest {
                instance_types: req.type_names.clone(),
            })
            .await?;

        Ok(DescribeInstanceTypesResponse {
            infos: response
                .instance_types
                .map(|s| s.instance_type)
                .unwrap_or_default()
                .iter()
                .map(mapper::instance_info)
                .collect(),
        })
    }

    async fn describe_images(&self, req: &DescribeImagesRequest) -> Result<DescribeImagesResponse> {
        let records = collect_pages(PageStyle::CountBased, PAGE_SIZE, |page_number| async move {
            let response = self
                .invoke(&types::DescribeImagesRequest {
                    region_id: req.region_id.clone(),
                    page_number,
                    page_size: PAGE_SIZE,
                })
                .await?;
            Ok(Page::new(
                response.images.map(|s| s.image).unwrap_or_default(),
                response.total_count.unwrap_or_default(),
            ))
        })
        .await?;

        Ok(DescribeImagesResponse {
            images: records.iter().map(mapper::image).collect(),
        })
    }

    async fn get_orders(&self, req: &GetOrdersRequest) -> Result<GetOrdersResponse> {
        let request = types::QueryOrdersRequest {
            create_time_start: req.start_time.format(BSS_REQUEST_TIME_FORMAT).to_string(),
            create_time_end: req.end_time.format(BSS_REQUEST_TIME_FORMAT).to_string(),
            page_num: req.page_num,
            page_size: req.page_size,
        };
        let response = self.invoke(&request).await?;

        if !response.success {
            return Err(rejected(&request, business_error(&response)));
        }

        let main_orders = response.orders();
        let mut orders = Vec::with_capacity(main_orders.len() * SUB_ORDERS_PER_MAIN);

        for main_order in main_orders {
            let order_id = main_order.order_id.as_deref().unwrap_or_default();
            let details = self.order_details(order_id).await?;
            orders.extend(details.iter().map(mapper::sub_order));
        }

        Ok(GetOrdersResponse { orders })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlibabaError;
    use chrono::{TimeZone, Utc};
    use nimbus_cloud::{ChargeType, Network};
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Transport that records every call and answers from a script
    #[derive(Default)]
    struct ScriptedTransport {
        calls: Mutex<Vec<(&'static str, Value)>>,
        replies: Mutex<VecDeque<std::result::Result<Value, AlibabaError>>>,
    }

    impl ScriptedTransport {
        fn reply(self, body: Value) -> Self {
            self.replies.lock().unwrap().push_back(Ok(body));
            self
        }

        fn fail(self, code: &str) -> Self {
            self.replies.lock().unwrap().push_back(Err(AlibabaError::Api {
                code: code.to_string(),
                message: format!("{code} injected"),
                request_id: None,
            }));
            self
        }

        fn next(
            &self,
            action: &'static str,
            payload: Value,
        ) -> std::result::Result<Value, AlibabaError> {
            self.calls.lock().unwrap().push((action, payload));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted reply for {action}"))
        }
    }

    #[async_trait]
    impl AlibabaTransport for ScriptedTransport {
        fn region(&self) -> &str {
            "cn-hangzhou"
        }

        async fn call<R: VendorRequest>(&self, request: &R) -> crate::error::Result<R::Response> {
            let payload = serde_json::to_value(request)?;
            let body = self.next(R::ACTION, payload)?;
            Ok(serde_json::from_value(body)?)
        }
    }

    fn provider(transport: ScriptedTransport) -> AlibabaCloudProvider<ScriptedTransport> {
        AlibabaCloudProvider::with_transport(transport)
    }

    fn calls(provider: &AlibabaCloudProvider<ScriptedTransport>) -> Vec<(&'static str, Value)> {
        provider.transport.calls.lock().unwrap().clone()
    }

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("i-{i:03}")).collect()
    }

    fn ack() -> Value {
        json!({"RequestId": "req-ack"})
    }

    #[tokio::test]
    async fn test_batch_delete_chunks_by_fifty() {
        let p = provider(ScriptedTransport::default().reply(ack()).reply(ack()).reply(ack()));

        p.batch_delete(&ids(120), "cn-hangzhou").await.unwrap();

        let calls = calls(&p);
        let sizes: Vec<usize> = calls
            .iter()
            .map(|(_, body)| body["InstanceId"].as_array().unwrap().len())
            .collect();
        assert_eq!(sizes, vec![50, 50, 20]);
        assert!(calls.iter().all(|(action, _)| *action == "DeleteInstances"));
        assert_eq!(calls[0].1["Force"], true);
        assert_eq!(calls[2].1["InstanceId"][0], "i-100");
    }

    #[tokio::test]
    async fn test_batch_delete_stops_at_first_failure() {
        let p = provider(ScriptedTransport::default().reply(ack()).fail("Throttling"));

        let err = p.batch_delete(&ids(120), "cn-hangzhou").await.unwrap_err();

        assert!(matches!(err, CloudError::Api { ref code, .. } if code == "Throttling"));
        assert_eq!(calls(&p).len(), 2);
    }

    #[tokio::test]
    async fn test_empty_id_lists_issue_no_calls() {
        let p = provider(ScriptedTransport::default());

        p.batch_delete(&[], "cn-hangzhou").await.unwrap();
        assert!(p.get_instances(&[]).await.unwrap().is_empty());
        assert!(calls(&p).is_empty());
    }

    #[tokio::test]
    async fn test_get_instances_chunks_and_maps() {
        let page = |id: &str| {
            json!({
                "TotalCount": 1,
                "Instances": {"Instance": [{
                    "InstanceId": id,
                    "Status": "Running",
                    "VpcAttributes": {"PrivateIpAddress": {"IpAddress": ["10.0.0.1", "10.0.0.2"]}}
                }]}
            })
        };
        let p = provider(ScriptedTransport::default().reply(page("i-a")).reply(page("i-b")));

        let instances = p.get_instances(&ids(51)).await.unwrap();

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].id, "i-a");
        assert_eq!(instances[1].ip_inner, "10.0.0.1,10.0.0.2");
        let calls = calls(&p);
        assert_eq!(calls[0].1["InstanceIds"].as_array().unwrap().len(), 50);
        assert_eq!(calls[1].1["InstanceIds"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_batch_create_rejects_oversized_count() {
        let p = provider(ScriptedTransport::default());

        let err = p
            .batch_create(&CreateInstancesParams::default(), 101)
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::InvalidRequest(_)));

        let err = p
            .batch_create(&CreateInstancesParams::default(), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::InvalidRequest(_)));

        assert!(calls(&p).is_empty());
    }

    #[tokio::test]
    async fn test_batch_create_sends_data_disks_and_tags() {
        let p = provider(ScriptedTransport::default().reply(json!({
            "RequestId": "req-run",
            "InstanceIdSets": {"InstanceIdSet": ["i-1", "i-2"]}
        })));

        let mut params = CreateInstancesParams {
            region: "cn-hangzhou".to_string(),
            image_id: "ubuntu_22_04".to_string(),
            instance_type: "ecs.g6.large".to_string(),
            network: Network {
                subnet_id: "vsw-1".to_string(),
                security_group: "sg-1".to_string(),
                ..Default::default()
            },
            password: "s3cret!".to_string(),
            tags: vec![Tag::new("ClusterName", "prod")],
            ..Default::default()
        };
        params.disks.system_disk = DiskSpec {
            category: "cloud_essd".to_string(),
            size: 40,
            ..Default::default()
        };
        params.disks.data_disks.push(DiskSpec {
            category: "cloud_essd".to_string(),
            size: 200,
            performance_level: "PL1".to_string(),
        });

        let created = p.batch_create(&params, 2).await.unwrap();
        assert_eq!(created, vec!["i-1", "i-2"]);

        let (action, body) = calls(&p).remove(0);
        assert_eq!(action, "RunInstances");
        assert_eq!(body["Amount"], 2);
        assert_eq!(body["MinAmount"], 2);
        assert_eq!(body["VSwitchId"], "vsw-1");
        assert_eq!(body["SystemDisk"]["Size"], "40");
        assert_eq!(body["DataDisk"][0]["Size"], "200");
        assert_eq!(body["DataDisk"][0]["PerformanceLevel"], "PL1");
        assert_eq!(body["Tag"][0]["Key"], "ClusterName");
        // No public bandwidth requested
        assert!(body.get("InternetMaxBandwidthOut").is_none());
        assert!(body.get("InternetChargeType").is_none());
    }

    #[test]
    fn test_loggable_strips_password() {
        let params = CreateInstancesParams {
            password: "s3cret!".to_string(),
            ..Default::default()
        };
        let value = loggable(&run_instances_request(&params, 1));
        assert!(value.get("Password").is_none());
        assert_eq!(value["Amount"], 1);
    }

    #[tokio::test]
    async fn test_instances_by_tags_reads_total_once() {
        let page = |total: i64| json!({"TotalCount": total, "Instances": {"Instance": [{}]}});
        let p = provider(
            ScriptedTransport::default()
                .reply(page(120))
                .reply(page(999))
                .reply(page(0)),
        );

        let instances = p
            .get_instances_by_cluster("cn-hangzhou", "prod")
            .await
            .unwrap();

        assert_eq!(instances.len(), 3);
        let calls = calls(&p);
        let pages: Vec<i64> = calls
            .iter()
            .map(|(_, body)| body["PageNumber"].as_i64().unwrap())
            .collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(calls[0].1["Tag"][0]["Key"], "ClusterName");
        assert_eq!(calls[0].1["Tag"][0]["Value"], "prod");
        assert_eq!(calls[0].1["RegionId"], "cn-hangzhou");
    }

    #[tokio::test]
    async fn test_instances_by_tags_with_no_matches() {
        let p = provider(ScriptedTransport::default().reply(json!({"TotalCount": 0})));

        let instances = p.get_instances_by_tags("cn-hangzhou", &[]).await.unwrap();

        assert!(instances.is_empty());
        assert_eq!(calls(&p).len(), 1);
    }

    #[tokio::test]
    async fn test_describe_vpcs_pages_until_total() {
        let page = |id: &str| {
            json!({
                "TotalCount": 101,
                "Vpcs": {"Vpc": [{"VpcId": id, "VSwitchIds": {"VSwitchId": ["vsw-1"]}}]}
            })
        };
        let p = provider(
            ScriptedTransport::default()
                .reply(page("vpc-1"))
                .reply(page("vpc-2"))
                .reply(page("vpc-3")),
        );

        let response = p
            .describe_vpcs(&DescribeVpcsRequest {
                region_id: "cn-hangzhou".to_string(),
            })
            .await
            .unwrap();

        let ids: Vec<&str> = response.vpcs.iter().map(|v| v.vpc_id.as_str()).collect();
        assert_eq!(ids, vec!["vpc-1", "vpc-2", "vpc-3"]);
        assert_eq!(response.vpcs[0].switch_ids, vec!["vsw-1"]);
        assert_eq!(calls(&p).len(), 3);
    }

    #[tokio::test]
    async fn test_describe_switches_failure_discards_pages() {
        let p = provider(
            ScriptedTransport::default()
                .reply(json!({"TotalCount": 80, "VSwitches": {"VSwitch": [{"VSwitchId": "vsw-1"}]}}))
                .fail("InternalError"),
        );

        let err = p
            .describe_switches(&DescribeSwitchesRequest {
                vpc_id: "vpc-1".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CloudError::Api { .. }));
        assert_eq!(calls(&p).len(), 2);
    }

    #[tokio::test]
    async fn test_security_groups_carry_request_region() {
        let p = provider(ScriptedTransport::default().reply(json!({
            "TotalCount": 1,
            "SecurityGroups": {"SecurityGroup": [{"SecurityGroupId": "sg-1", "VpcId": "vpc-1"}]}
        })));

        let response = p
            .describe_security_groups(&DescribeSecurityGroupsRequest {
                region_id: "cn-shanghai".to_string(),
                vpc_id: "vpc-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.groups.len(), 1);
        assert_eq!(response.groups[0].region_id, "cn-shanghai");
        assert_eq!(calls(&p)[0].1["VpcId"], "vpc-1");
    }

    #[tokio::test]
    async fn test_group_rules_pick_peer_by_direction() {
        let p = provider(ScriptedTransport::default().reply(json!({
            "VpcId": "vpc-1",
            "SecurityGroupId": "sg-self",
            "Permissions": {"Permission": [
                {"Direction": "ingress", "IpProtocol": "TCP", "PortRange": "22/22",
                 "SourceGroupId": "sg-1", "SourceCidrIp": "10.0.0.0/8", "DestCidrIp": "1.1.1.1/32"},
                {"Direction": "egress", "IpProtocol": "ALL", "PortRange": "-1/-1",
                 "SourceCidrIp": "10.0.0.0/8", "DestCidrIp": "0.0.0.0/0"}
            ]}
        })));

        let response = p
            .describe_group_rules(&DescribeGroupRulesRequest {
                region_id: "cn-hangzhou".to_string(),
                security_group_id: "sg-self".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.rules.len(), 2);
        assert_eq!(response.rules[0].peer.group_id, "sg-1");
        assert_eq!(response.rules[0].peer.cidr_ip, "10.0.0.0/8");
        assert_eq!(response.rules[1].peer.cidr_ip, "0.0.0.0/0");
        assert_eq!(response.rules[1].vpc_id, "vpc-1");
    }

    #[tokio::test]
    async fn test_rule_direction_routes_to_action() {
        let p = provider(ScriptedTransport::default().reply(ack()).reply(ack()));
        let rule = AddSecurityGroupRuleRequest {
            region_id: "cn-hangzhou".to_string(),
            security_group_id: "sg-1".to_string(),
            ip_protocol: "tcp".to_string(),
            port_range: "443/443".to_string(),
            cidr_ip: "0.0.0.0/0".to_string(),
            ..Default::default()
        };

        p.add_ingress_security_group_rule(&rule).await.unwrap();
        p.add_egress_security_group_rule(&rule).await.unwrap();

        let calls = calls(&p);
        assert_eq!(calls[0].0, "AuthorizeSecurityGroup");
        assert_eq!(calls[0].1["SourceCidrIp"], "0.0.0.0/0");
        assert_eq!(calls[1].0, "AuthorizeSecurityGroupEgress");
        assert_eq!(calls[1].1["DestCidrIp"], "0.0.0.0/0");
    }

    #[tokio::test]
    async fn test_available_resource_request_is_fixed_to_instance_types() {
        let p = provider(ScriptedTransport::default().reply(json!({})));

        let response = p
            .describe_available_resource(&DescribeAvailableResourceRequest {
                region_id: "cn-hangzhou".to_string(),
                zone_id: "cn-hangzhou-h".to_string(),
            })
            .await
            .unwrap();

        assert!(response.instance_types.is_empty());
        let body = &calls(&p)[0].1;
        assert_eq!(body["DestinationResource"], "InstanceType");
        assert_eq!(body["NetworkCategory"], "vpc");
    }

    #[tokio::test]
    async fn test_regions_request_language() {
        let p = provider(ScriptedTransport::default().reply(json!({
            "Regions": {"Region": [{"RegionId": "cn-hangzhou", "LocalName": "华东1（杭州）"}]}
        })));

        let response = p.get_regions().await.unwrap();

        assert_eq!(response.regions[0].region_id, "cn-hangzhou");
        assert_eq!(calls(&p)[0].1["AcceptLanguage"], ACCEPT_LANGUAGE);
    }

    fn window() -> GetOrdersRequest {
        GetOrdersRequest::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        )
    }

    fn main_orders(ids: &[&str]) -> Value {
        let orders: Vec<Value> = ids.iter().map(|id| json!({"OrderId": id})).collect();
        json!({"Success": true, "Data": {"TotalCount": ids.len(), "OrderList": {"Order": orders}}})
    }

    fn detail(main: &str, subs: &[&str]) -> Value {
        let orders: Vec<Value> = subs
            .iter()
            .map(|sub| {
                json!({
                    "OrderId": main,
                    "SubOrderId": sub,
                    "SubscriptionType": "Subscription",
                    "PaymentStatus": "Paid",
                    "Quantity": "1",
                    "PretaxAmount": "9.90"
                })
            })
            .collect();
        json!({"Success": true, "Data": {"OrderList": {"Order": orders}}})
    }

    #[tokio::test]
    async fn test_get_orders_expands_every_main_order() {
        let p = provider(
            ScriptedTransport::default()
                .reply(main_orders(&["m-1", "m-2"]))
                .reply(detail("m-1", &["s-1", "s-2"]))
                .reply(detail("m-2", &["s-3"])),
        );

        let response = p.get_orders(&window()).await.unwrap();

        let subs: Vec<&str> = response.orders.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(subs, vec!["s-1", "s-2", "s-3"]);
        assert_eq!(response.orders[2].main_order_id(), Some("m-2"));
        assert_eq!(response.orders[0].charge_type, Some(ChargeType::PrePaid));

        let calls = calls(&p);
        assert_eq!(calls[0].0, "QueryOrders");
        assert_eq!(calls[0].1["CreateTimeStart"], "2024-01-01T00:00:00Z");
        assert_eq!(calls[0].1["PageNum"], 1);
        assert_eq!(calls[0].1["PageSize"], 20);
        assert_eq!(calls[2].1["OrderId"], "m-2");
    }

    #[tokio::test]
    async fn test_get_orders_detail_failure_discards_everything() {
        let p = provider(
            ScriptedTransport::default()
                .reply(main_orders(&["m-1", "m-2"]))
                .reply(detail("m-1", &["s-1"]))
                .fail("ServiceUnavailable"),
        );

        let err = p.get_orders(&window()).await.unwrap_err();

        assert!(matches!(err, CloudError::Api { .. }));
        assert_eq!(calls(&p).len(), 3);
    }

    #[tokio::test]
    async fn test_get_orders_unsuccessful_detail_is_business_error() {
        let p = provider(
            ScriptedTransport::default()
                .reply(main_orders(&["m-1"]))
                .reply(json!({"Success": false, "Message": "order not visible"})),
        );

        let err = p.get_orders(&window()).await.unwrap_err();

        match err {
            CloudError::Business(message) => assert_eq!(message, "order not visible"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_orders_empty_listing() {
        let p = provider(ScriptedTransport::default().reply(main_orders(&[])));

        let response = p.get_orders(&window()).await.unwrap();

        assert!(response.orders.is_empty());
        assert_eq!(calls(&p).len(), 1);
    }

    #[tokio::test]
    async fn test_get_orders_unsuccessful_listing() {
        let p = provider(
            ScriptedTransport::default().reply(json!({"Success": false, "Code": "NotAuthorized"})),
        );

        let err = p.get_orders(&window()).await.unwrap_err();
        assert!(matches!(err, CloudError::Business(ref m) if m == "NotAuthorized"));
    }

    /// Collects fmt subscriber output for the current thread
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        (buffer, tracing::subscriber::set_default(subscriber))
    }

    #[tokio::test]
    async fn test_unsuccessful_listing_is_logged() {
        let (logs, _guard) = capture_logs();
        let p = provider(
            ScriptedTransport::default().reply(json!({"Success": false, "Message": "denied"})),
        );

        let err = p.get_orders(&window()).await.unwrap_err();

        assert!(matches!(err, CloudError::Business(ref m) if m == "denied"));
        let logs = logs.contents();
        assert!(logs.contains("ERROR"), "logs: {logs}");
        assert!(logs.contains("QueryOrders failed"), "logs: {logs}");
        assert!(logs.contains("\"PageNum\":1"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_unsuccessful_detail_is_logged() {
        let (logs, _guard) = capture_logs();
        let p = provider(
            ScriptedTransport::default()
                .reply(main_orders(&["m-1"]))
                .reply(json!({"Success": false, "Message": "order not visible"})),
        );

        p.get_orders(&window()).await.unwrap_err();

        let logs = logs.contents();
        assert!(logs.contains("GetOrderDetail failed"), "logs: {logs}");
        assert!(logs.contains("\"OrderId\":\"m-1\""), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_rejected_count_is_logged_without_password() {
        let (logs, _guard) = capture_logs();
        let p = provider(ScriptedTransport::default());
        let params = CreateInstancesParams {
            password: "s3cret!".to_string(),
            ..Default::default()
        };

        p.batch_create(&params, 101).await.unwrap_err();

        let logs = logs.contents();
        assert!(logs.contains("RunInstances failed"), "logs: {logs}");
        assert!(logs.contains("\"Amount\":101"), "logs: {logs}");
        assert!(!logs.contains("s3cret!"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_create_vpc() {
        let p = provider(
            ScriptedTransport::default().reply(json!({"RequestId": "req-vpc", "VpcId": "vpc-new"})),
        );

        let response = p
            .create_vpc(&CreateVpcRequest {
                region_id: "cn-hangzhou".to_string(),
                vpc_name: "prod".to_string(),
                cidr_block: "10.0.0.0/8".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.vpc_id, "vpc-new");
        assert_eq!(response.request_id, "req-vpc");
        let (action, body) = calls(&p).remove(0);
        assert_eq!(action, "CreateVpc");
        assert_eq!(body["RegionId"], "cn-hangzhou");
        assert_eq!(body["VpcName"], "prod");
        assert_eq!(body["CidrBlock"], "10.0.0.0/8");
    }

    #[tokio::test]
    async fn test_get_vpc_maps_attributes() {
        let p = provider(ScriptedTransport::default().reply(json!({
            "RequestId": "req-1",
            "VpcId": "vpc-1",
            "VpcName": "prod",
            "CidrBlock": "172.16.0.0/12",
            "Status": "Available",
            "RegionId": "cn-hangzhou",
            "CreationTime": "2024-03-01T08:00:00Z",
            "VSwitchIds": {"VSwitchId": ["vsw-1", "vsw-2"]}
        })));

        let response = p
            .get_vpc(&GetVpcRequest {
                vpc_id: "vpc-1".to_string(),
                region_id: "cn-hangzhou".to_string(),
            })
            .await
            .unwrap();

        let vpc = response.vpc;
        assert_eq!(vpc.vpc_id, "vpc-1");
        assert_eq!(vpc.region_id, "cn-hangzhou");
        assert_eq!(vpc.create_at, "2024-03-01T08:00:00Z");
        assert_eq!(vpc.switch_ids, vec!["vsw-1", "vsw-2"]);
        assert_eq!(vpc.status, "Available");

        let (action, body) = calls(&p).remove(0);
        assert_eq!(action, "DescribeVpcAttribute");
        assert_eq!(body["VpcId"], "vpc-1");
        assert_eq!(body["RegionId"], "cn-hangzhou");
    }

    #[tokio::test]
    async fn test_get_vpc_failure_returns_no_value() {
        let p = provider(ScriptedTransport::default().fail("InvalidVpcId.NotFound"));

        let result = p
            .get_vpc(&GetVpcRequest {
                vpc_id: "vpc-missing".to_string(),
                region_id: "cn-hangzhou".to_string(),
            })
            .await;

        match result {
            Err(CloudError::Api { code, .. }) => assert_eq!(code, "InvalidVpcId.NotFound"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_switch() {
        let p = provider(
            ScriptedTransport::default()
                .reply(json!({"RequestId": "req-vsw", "VSwitchId": "vsw-new"})),
        );

        let response = p
            .create_switch(&CreateSwitchRequest {
                region_id: "cn-hangzhou".to_string(),
                zone_id: "cn-hangzhou-h".to_string(),
                cidr_block: "10.1.0.0/16".to_string(),
                vpc_id: "vpc-1".to_string(),
                switch_name: "web".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.switch_id, "vsw-new");
        assert_eq!(response.request_id, "req-vsw");
        let (action, body) = calls(&p).remove(0);
        assert_eq!(action, "CreateVSwitch");
        assert_eq!(body["VSwitchName"], "web");
        assert_eq!(body["ZoneId"], "cn-hangzhou-h");
        assert_eq!(body["VpcId"], "vpc-1");
        assert_eq!(body["CidrBlock"], "10.1.0.0/16");
    }

    #[tokio::test]
    async fn test_get_switch_default_flag() {
        let record = |is_default: Value| {
            json!({
                "VSwitchId": "vsw-1",
                "VpcId": "vpc-1",
                "VSwitchName": "web",
                "IsDefault": is_default,
                "AvailableIpAddressCount": 250,
                "ZoneId": "cn-hangzhou-h"
            })
        };
        let p = provider(
            ScriptedTransport::default()
                .reply(record(json!(true)))
                .reply(record(json!(false)))
                .reply(record(Value::Null)),
        );
        let req = GetSwitchRequest {
            switch_id: "vsw-1".to_string(),
        };

        let first = p.get_switch(&req).await.unwrap().switch;
        let second = p.get_switch(&req).await.unwrap().switch;
        let third = p.get_switch(&req).await.unwrap().switch;

        assert_eq!(first.is_default, 1);
        assert_eq!(second.is_default, 0);
        assert_eq!(third.is_default, 0);
        assert_eq!(first.available_ip_address_count, 250);
        assert_eq!(first.zone_id, "cn-hangzhou-h");
        assert_eq!(first.name, "web");

        let calls = calls(&p);
        assert_eq!(calls[0].0, "DescribeVSwitchAttributes");
        assert_eq!(calls[0].1["VSwitchId"], "vsw-1");
    }

    #[tokio::test]
    async fn test_create_security_group() {
        let p = provider(
            ScriptedTransport::default()
                .reply(json!({"RequestId": "req-sg", "SecurityGroupId": "sg-new"})),
        );

        let response = p
            .create_security_group(&CreateSecurityGroupRequest {
                region_id: "cn-hangzhou".to_string(),
                security_group_name: "web".to_string(),
                vpc_id: "vpc-1".to_string(),
                security_group_type: "enterprise".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.security_group_id, "sg-new");
        assert_eq!(response.request_id, "req-sg");
        let (action, body) = calls(&p).remove(0);
        assert_eq!(action, "CreateSecurityGroup");
        assert_eq!(body["SecurityGroupType"], "enterprise");
        assert_eq!(body["SecurityGroupName"], "web");
        assert_eq!(body["VpcId"], "vpc-1");
    }

    #[tokio::test]
    async fn test_describe_instance_types() {
        let p = provider(ScriptedTransport::default().reply(json!({
            "InstanceTypes": {"InstanceType": [{
                "InstanceTypeId": "ecs.t6-c1m1.large",
                "InstanceTypeFamily": "ecs.t6",
                "CpuCoreCount": 2,
                "MemorySize": 2.5
            }]}
        })));

        let response = p
            .describe_instance_types(&DescribeInstanceTypesRequest {
                type_names: vec!["ecs.t6-c1m1.large".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(
            response.infos,
            vec![nimbus_cloud::InstanceInfo {
                core: 2,
                memory: 2,
                family: "ecs.t6".to_string(),
                ins_type_name: "ecs.t6-c1m1.large".to_string(),
            }]
        );
        let (action, body) = calls(&p).remove(0);
        assert_eq!(action, "DescribeInstanceTypes");
        assert_eq!(body["InstanceTypes"][0], "ecs.t6-c1m1.large");
    }

    #[tokio::test]
    async fn test_get_zones() {
        let p = provider(ScriptedTransport::default().reply(json!({
            "Zones": {"Zone": [
                {"ZoneId": "cn-hangzhou-h", "LocalName": "华东 1 可用区 H"},
                {"ZoneId": "cn-hangzhou-i"}
            ]}
        })));

        let response = p
            .get_zones(&GetZonesRequest {
                region_id: "cn-hangzhou".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.zones.len(), 2);
        assert_eq!(response.zones[0].local_name, "华东 1 可用区 H");
        assert_eq!(response.zones[1].zone_id, "cn-hangzhou-i");
        assert_eq!(response.zones[1].local_name, "");
        let (action, body) = calls(&p).remove(0);
        assert_eq!(action, "DescribeZones");
        assert_eq!(body["RegionId"], "cn-hangzhou");
    }
}
