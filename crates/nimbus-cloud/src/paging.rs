//! Multi-page list driver
//!
//! Vendors page their list APIs in two ways: some report a running total on
//! every page and expect the caller to keep asking while more remain, others
//! are read once for the total and then fetched up to a computed last page.
//! Both converge here on the same result: every page, in order, with no
//! de-duplication.

use crate::error::Result;
use std::future::Future;

/// Page size used for every list call
pub const PAGE_SIZE: i32 = 50;

/// How the page loop decides when to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStyle {
    /// Keep going while `page_number * page_size < total_count`,
    /// re-reading the total from every page
    CountBased,

    /// Fetch page 1, compute `ceil(total_count / page_size)` from it,
    /// then fetch pages 2 through that maximum
    ComputedMax,
}

/// One page of raw records
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Total number of records across all pages, as reported by the vendor
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64) -> Self {
        Self { items, total_count }
    }
}

/// Number of pages needed to hold `total_count` records; never less than 1
pub fn page_count(total_count: i64, page_size: i32) -> i32 {
    let page_size = i64::from(page_size.max(1));
    let pages = (total_count.max(0) + page_size - 1) / page_size;
    pages.clamp(1, i64::from(i32::MAX)) as i32
}

/// Fetches every page and returns the concatenated records.
///
/// `fetch` receives the 1-based page number. Pages are requested strictly in
/// sequence and the first failure is returned as-is, discarding whatever was
/// accumulated so far.
pub async fn collect_pages<T, F, Fut>(
    style: PageStyle,
    page_size: i32,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(i32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let page_size = page_size.max(1);
    let mut records = Vec::new();

    match style {
        PageStyle::CountBased => {
            let mut page_number = 1;
            loop {
                let page = fetch(page_number).await?;
                records.extend(page.items);

                if i64::from(page_number) * i64::from(page_size) < page.total_count {
                    page_number += 1;
                } else {
                    break;
                }
            }
        }
        PageStyle::ComputedMax => {
            let first = fetch(1).await?;
            let max_page = page_count(first.total_count, page_size);
            records.extend(first.items);

            for page_number in 2..=max_page {
                let page = fetch(page_number).await?;
                records.extend(page.items);
            }
        }
    }

    tracing::debug!("Collected {} records ({:?})", records.len(), style);
    Ok(records)
}
