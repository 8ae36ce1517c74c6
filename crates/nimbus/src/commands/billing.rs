use super::{Context, print_json};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use nimbus_cloud::GetOrdersRequest;

/// Window length when `--from` is omitted
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Accepts RFC 3339 or a bare date (midnight UTC)
fn parse_time(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid time '{}', expected RFC 3339 or YYYY-MM-DD", value))?;
    Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
}

fn window(
    from: Option<&str>,
    to: Option<&str>,
    now: DateTime<Utc>,
) -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let end = to.map(parse_time).transpose()?.unwrap_or(now);
    let start = from
        .map(parse_time)
        .transpose()?
        .unwrap_or(end - TimeDelta::days(DEFAULT_WINDOW_DAYS));

    anyhow::ensure!(start <= end, "--from must not be after --to");
    Ok((start, end))
}

pub async fn orders(
    ctx: &Context<'_>,
    from: Option<String>,
    to: Option<String>,
    page: i32,
    page_size: i32,
) -> anyhow::Result<()> {
    let (start, end) = window(from.as_deref(), to.as_deref(), Utc::now())?;
    let request = GetOrdersRequest::new(start, end).with_page(page, page_size);

    let response = ctx.provider.get_orders(&request).await?;
    print_json(&response.orders)
}
