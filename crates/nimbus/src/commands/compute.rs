use super::{Context, print_done, print_json};
use nimbus_cloud::Tag;

pub async fn instances(
    ctx: &Context<'_>,
    ids: Vec<String>,
    tags: Vec<Tag>,
    cluster: Option<String>,
) -> anyhow::Result<()> {
    let instances = if !ids.is_empty() {
        ctx.provider.get_instances(&ids).await?
    } else if let Some(cluster) = cluster {
        ctx.provider
            .get_instances_by_cluster(ctx.region()?, &cluster)
            .await?
    } else {
        ctx.provider
            .get_instances_by_tags(ctx.region()?, &tags)
            .await?
    };

    print_json(&instances)
}

pub async fn start(ctx: &Context<'_>, id: &str) -> anyhow::Result<()> {
    ctx.provider.start_instance(id).await?;
    print_done(&format!("Start requested for {}", id));
    Ok(())
}

pub async fn stop(ctx: &Context<'_>, id: &str) -> anyhow::Result<()> {
    ctx.provider.stop_instance(id).await?;
    print_done(&format!("Stop requested for {}", id));
    Ok(())
}

pub async fn delete(ctx: &Context<'_>, ids: &[String]) -> anyhow::Result<()> {
    ctx.provider.batch_delete(ids, ctx.region()?).await?;
    print_done(&format!("Deleted {} instance(s)", ids.len()));
    Ok(())
}
