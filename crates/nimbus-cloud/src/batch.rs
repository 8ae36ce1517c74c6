//! Per-operation batch ceilings
//!
//! Vendors cap how many items a single call may carry. Each capped operation
//! declares its ceiling as a `BatchLimit`; operations that auto-chunk go
//! through `split`, operations that leave chunking to the caller go through
//! `check`.

use crate::error::{CloudError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimit {
    /// Vendor operation the limit applies to
    pub operation: &'static str,

    /// Maximum number of items accepted in one call
    pub max_items: usize,
}

impl BatchLimit {
    pub const fn new(operation: &'static str, max_items: usize) -> Self {
        assert!(max_items > 0, "batch limit must be positive");
        Self {
            operation,
            max_items,
        }
    }

    /// Splits `items` into consecutive chunks of at most `max_items`.
    ///
    /// An empty slice yields no chunks.
    pub fn split<'a, T>(&self, items: &'a [T]) -> std::slice::Chunks<'a, T> {
        items.chunks(self.max_items)
    }

    /// Number of calls needed for `count` items
    pub fn calls_for(&self, count: usize) -> usize {
        count.div_ceil(self.max_items)
    }

    /// Rejects counts the vendor would refuse in a single call
    pub fn check(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(CloudError::InvalidRequest(format!(
                "{}: count must be at least 1",
                self.operation
            )));
        }
        if count > self.max_items {
            return Err(CloudError::InvalidRequest(format!(
                "{}: count {} exceeds the per-call maximum of {}, split the request",
                self.operation, count, self.max_items
            )));
        }
        Ok(())
    }
}
