//! Alibaba Cloud payload → neutral model
//!
//! Pure functions, one per entity. Absent vendor fields map to the zero value
//! of the neutral field (empty string, 0, `None` for timestamps); no function
//! here can fail.

use crate::types::{
    AvailableZone, DescribeVpcAttributeResponse, EcsInstance, ImageRecord, InstanceTypeRecord,
    IpAddressSet, OrderRecord, Permission, RegionRecord, SecurityGroupRecord, VSwitchIdSet,
    VSwitchRecord, VpcRecord, ZoneRecord,
};
use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use nimbus_cloud::{
    ChargeType, EXTEND_MAIN_ORDER_ID, EXTEND_ORDER_TYPE, Image, Instance, InstanceInfo,
    InstanceType, Network, Order, PayStatus, Region, RuleDirection, RulePeer, SecurityGroup,
    SecurityGroupRule, Switch, Vpc, Zone,
};
use std::collections::HashMap;

/// Provider tag stamped on every mapped instance
pub const CLOUD_NAME: &str = "AlibabaCloud";

/// Timestamp layout used by the billing API
pub const BSS_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Vendor subscription types
pub const SUBSCRIPTION: &str = "Subscription";
pub const PAY_AS_YOU_GO: &str = "PayAsYouGo";

/// Pay-as-you-go usage windows longer than this are the vendor's "still
/// active" placeholder
const OPEN_ENDED_USAGE_DAYS: i64 = 365 * 20;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn addresses(set: Option<&IpAddressSet>) -> &[String] {
    set.map(|s| s.ip_address.as_slice()).unwrap_or_default()
}

fn switch_ids(set: &Option<VSwitchIdSet>) -> Vec<String> {
    set.as_ref()
        .map(|s| s.v_switch_id.clone())
        .unwrap_or_default()
}

/// Collapses an optional flag into 0/1; unset counts as false
pub fn flag(value: Option<bool>) -> i32 {
    i32::from(value.unwrap_or(false))
}

pub fn instance(record: &EcsInstance) -> Instance {
    let vpc = record.vpc_attributes.as_ref();
    let private_ips = addresses(vpc.and_then(|v| v.private_ip_address.as_ref()));
    let public_ips = addresses(record.public_ip_address.as_ref());
    let security_groups = record
        .security_group_ids
        .as_ref()
        .map(|s| s.security_group_id.join(","))
        .unwrap_or_default();

    Instance {
        id: text(&record.instance_id),
        cost_way: text(&record.instance_charge_type),
        provider: CLOUD_NAME.to_string(),
        ip_inner: private_ips.join(","),
        ip_outer: public_ips.first().cloned().unwrap_or_default(),
        image_id: text(&record.image_id),
        network: Some(Network {
            vpc_id: vpc.map(|v| text(&v.vpc_id)).unwrap_or_default(),
            subnet_id: vpc.map(|v| text(&v.v_switch_id)).unwrap_or_default(),
            security_group: security_groups,
            internet_charge_type: text(&record.internet_charge_type),
            internet_max_bandwidth_out: record.internet_max_bandwidth_out.unwrap_or_default(),
        }),
        status: text(&record.status),
    }
}

pub fn instances(records: &[EcsInstance]) -> Vec<Instance> {
    records.iter().map(instance).collect()
}

pub fn vpc(record: &VpcRecord) -> Vpc {
    Vpc {
        vpc_id: text(&record.vpc_id),
        vpc_name: text(&record.vpc_name),
        cidr_block: text(&record.cidr_block),
        switch_ids: switch_ids(&record.v_switch_ids),
        region_id: text(&record.region_id),
        status: text(&record.status),
        create_at: text(&record.creation_time),
    }
}

pub fn vpc_attribute(body: &DescribeVpcAttributeResponse) -> Vpc {
    Vpc {
        vpc_id: text(&body.vpc_id),
        vpc_name: text(&body.vpc_name),
        cidr_block: text(&body.cidr_block),
        switch_ids: switch_ids(&body.v_switch_ids),
        region_id: text(&body.region_id),
        status: text(&body.status),
        create_at: text(&body.creation_time),
    }
}

pub fn switch(record: &VSwitchRecord) -> Switch {
    Switch {
        vpc_id: text(&record.vpc_id),
        switch_id: text(&record.v_switch_id),
        name: text(&record.v_switch_name),
        is_default: flag(record.is_default),
        available_ip_address_count: record.available_ip_address_count.unwrap_or_default(),
        status: text(&record.status),
        create_at: text(&record.creation_time),
        cidr_block: text(&record.cidr_block),
        zone_id: text(&record.zone_id),
    }
}

/// The list API does not echo the region, so the caller supplies it
pub fn security_group(record: &SecurityGroupRecord, region_id: &str) -> SecurityGroup {
    SecurityGroup {
        security_group_id: text(&record.security_group_id),
        security_group_type: text(&record.security_group_type),
        security_group_name: text(&record.security_group_name),
        create_at: text(&record.creation_time),
        vpc_id: text(&record.vpc_id),
        region_id: region_id.to_string(),
    }
}

/// Picks the peer side of a rule according to its direction
pub fn rule_peer(direction: Option<RuleDirection>, permission: &Permission) -> RulePeer {
    match direction {
        Some(RuleDirection::Ingress) => RulePeer {
            group_id: text(&permission.source_group_id),
            cidr_ip: text(&permission.source_cidr_ip),
            prefix_list_id: text(&permission.source_prefix_list_id),
        },
        Some(RuleDirection::Egress) => RulePeer {
            group_id: text(&permission.dest_group_id),
            cidr_ip: text(&permission.dest_cidr_ip),
            prefix_list_id: text(&permission.dest_prefix_list_id),
        },
        None => RulePeer::default(),
    }
}

pub fn security_group_rule(
    permission: &Permission,
    vpc_id: &str,
    security_group_id: &str,
) -> SecurityGroupRule {
    let direction = text(&permission.direction);

    SecurityGroupRule {
        vpc_id: vpc_id.to_string(),
        security_group_id: security_group_id.to_string(),
        port_range: text(&permission.port_range),
        protocol: text(&permission.ip_protocol),
        peer: rule_peer(RuleDirection::parse(&direction), permission),
        direction,
        create_at: text(&permission.create_time),
    }
}

pub fn region(record: &RegionRecord) -> Region {
    Region {
        region_id: text(&record.region_id),
        local_name: text(&record.local_name),
    }
}

pub fn zone(record: &ZoneRecord) -> Zone {
    Zone {
        zone_id: text(&record.zone_id),
        local_name: text(&record.local_name),
    }
}

/// Flattens every supported resource offered in each zone, keyed by zone ID
pub fn available_instance_types(zones: &[AvailableZone]) -> HashMap<String, Vec<InstanceType>> {
    let mut by_zone = HashMap::with_capacity(zones.len());

    for zone in zones {
        let Some(resources) = zone.available_resources.as_ref() else {
            continue;
        };

        let types = resources
            .available_resource
            .iter()
            .filter_map(|r| r.supported_resources.as_ref())
            .flat_map(|s| s.supported_resource.iter())
            .map(|s| InstanceType {
                status: text(&s.status),
                status_category: text(&s.status_category),
                value: text(&s.value),
            })
            .collect();

        by_zone.insert(text(&zone.zone_id), types);
    }

    by_zone
}

pub fn instance_info(record: &InstanceTypeRecord) -> InstanceInfo {
    InstanceInfo {
        core: record.cpu_core_count.unwrap_or_default(),
        memory: record.memory_size.unwrap_or_default() as i32,
        family: text(&record.instance_type_family),
        ins_type_name: text(&record.instance_type_id),
    }
}

pub fn image(record: &ImageRecord) -> Image {
    Image {
        os_type: text(&record.os_type),
        os_name: text(&record.os_name),
        image_id: text(&record.image_id),
    }
}

pub fn charge_type(subscription_type: &str) -> Option<ChargeType> {
    match subscription_type {
        SUBSCRIPTION => Some(ChargeType::PrePaid),
        PAY_AS_YOU_GO => Some(ChargeType::PostPaid),
        _ => None,
    }
}

pub fn pay_status(payment_status: &str) -> Option<PayStatus> {
    match payment_status {
        "Paid" => Some(PayStatus::Paid),
        "Unpaid" => Some(PayStatus::Unpaid),
        "Cancelled" => Some(PayStatus::Cancelled),
        _ => None,
    }
}

pub fn parse_bss_time(value: &Option<String>) -> Option<DateTime<Utc>> {
    let value = value.as_deref()?;
    NaiveDateTime::parse_from_str(value, BSS_TIME_FORMAT)
        .ok()
        .map(|t| t.and_utc())
}

/// `2038-01-01T00:00:00Z`, the usage end reported for open-ended usage
pub fn usage_end_sentinel() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2038, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Replaces the vendor's far-future placeholder with the sentinel for
/// pay-as-you-go usage that is still running
pub fn clamp_usage_end(
    subscription_type: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    match (start, end) {
        (Some(start), Some(end))
            if subscription_type == PAY_AS_YOU_GO
                && end - start > TimeDelta::days(OPEN_ENDED_USAGE_DAYS) =>
        {
            Some(usage_end_sentinel())
        }
        _ => end,
    }
}

pub fn sub_order(record: &OrderRecord) -> Order {
    let subscription_type = text(&record.subscription_type);
    let usage_start_time = parse_bss_time(&record.usage_start_time);
    let usage_end_time = clamp_usage_end(
        &subscription_type,
        usage_start_time,
        parse_bss_time(&record.usage_end_time),
    );

    let extend = HashMap::from([
        (
            EXTEND_MAIN_ORDER_ID.to_string(),
            serde_json::json!(text(&record.order_id)),
        ),
        (
            EXTEND_ORDER_TYPE.to_string(),
            serde_json::json!(text(&record.order_type)),
        ),
    ]);

    Order {
        order_id: text(&record.sub_order_id),
        order_time: parse_bss_time(&record.create_time),
        product: text(&record.product_code),
        quantity: record
            .quantity
            .as_deref()
            .and_then(|q| q.trim().parse().ok())
            .unwrap_or_default(),
        usage_start_time,
        usage_end_time,
        region_id: text(&record.region),
        charge_type: charge_type(&subscription_type),
        pay_status: pay_status(record.payment_status.as_deref().unwrap_or_default()),
        currency: text(&record.currency),
        cost: record
            .pretax_amount
            .as_deref()
            .and_then(|a| a.trim().parse().ok())
            .unwrap_or_default(),
        extend,
    }
}
