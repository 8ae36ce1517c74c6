use super::{Context, print_json};
use nimbus_cloud::{DescribeAvailableResourceRequest, DescribeImagesRequest, GetZonesRequest};

pub async fn regions(ctx: &Context<'_>) -> anyhow::Result<()> {
    let response = ctx.provider.get_regions().await?;
    print_json(&response.regions)
}

pub async fn zones(ctx: &Context<'_>) -> anyhow::Result<()> {
    let response = ctx
        .provider
        .get_zones(&GetZonesRequest {
            region_id: ctx.region()?.to_string(),
        })
        .await?;
    print_json(&response.zones)
}

pub async fn instance_types(ctx: &Context<'_>, zone: String) -> anyhow::Result<()> {
    let response = ctx
        .provider
        .describe_available_resource(&DescribeAvailableResourceRequest {
            region_id: ctx.region()?.to_string(),
            zone_id: zone,
        })
        .await?;
    print_json(&response.instance_types)
}

pub async fn images(ctx: &Context<'_>) -> anyhow::Result<()> {
    let response = ctx
        .provider
        .describe_images(&DescribeImagesRequest {
            region_id: ctx.region()?.to_string(),
        })
        .await?;
    print_json(&response.images)
}
