use super::{Context, print_json};
use nimbus_cloud::{
    DescribeGroupRulesRequest, DescribeSecurityGroupsRequest, DescribeSwitchesRequest,
    DescribeVpcsRequest,
};

pub async fn vpcs(ctx: &Context<'_>) -> anyhow::Result<()> {
    let response = ctx
        .provider
        .describe_vpcs(&DescribeVpcsRequest {
            region_id: ctx.region()?.to_string(),
        })
        .await?;
    print_json(&response.vpcs)
}

pub async fn switches(ctx: &Context<'_>, vpc_id: String) -> anyhow::Result<()> {
    let response = ctx
        .provider
        .describe_switches(&DescribeSwitchesRequest { vpc_id })
        .await?;
    print_json(&response.switches)
}

pub async fn groups(ctx: &Context<'_>, vpc_id: Option<String>) -> anyhow::Result<()> {
    let response = ctx
        .provider
        .describe_security_groups(&DescribeSecurityGroupsRequest {
            region_id: ctx.region()?.to_string(),
            vpc_id: vpc_id.unwrap_or_default(),
        })
        .await?;
    print_json(&response.groups)
}

pub async fn rules(ctx: &Context<'_>, security_group_id: String) -> anyhow::Result<()> {
    let response = ctx
        .provider
        .describe_group_rules(&DescribeGroupRulesRequest {
            region_id: ctx.region()?.to_string(),
            security_group_id,
        })
        .await?;
    print_json(&response.rules)
}
