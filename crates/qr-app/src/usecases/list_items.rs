use anyhow::Result;
use std::sync::Arc;

use qr_core::item::SavedItem;
use qr_core::ports::ItemRepositoryPort;

/// Use case for listing saved QR items with pagination.
pub struct ListItems {
    item_repo: Arc<dyn ItemRepositoryPort>,
    max_limit: usize,
}

impl ListItems {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self {
            item_repo,
            max_limit: 1000, // Business rule: maximum 1000 items per query
        }
    }

    /// Lists saved items newest first, starting at `offset` and returning up
    /// to `limit` items.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is 0, `limit` exceeds the configured
    /// maximum, or the repository query fails.
    pub async fn execute(&self, limit: usize, offset: usize) -> Result<Vec<SavedItem>> {
        if limit == 0 {
            return Err(anyhow::anyhow!(
                "Invalid limit: {}. Must be at least 1",
                limit
            ));
        }

        if limit > self.max_limit {
            return Err(anyhow::anyhow!(
                "Invalid limit: {}. Must be at most {}",
                limit,
                self.max_limit
            ));
        }

        self.item_repo
            .list_recent(limit, offset)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to query saved items: {}", e))
    }
}
