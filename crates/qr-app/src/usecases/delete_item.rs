use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use qr_core::ids::ItemId;
use qr_core::ports::ItemRepositoryPort;

/// Use case for deleting a saved QR item.
pub struct DeleteItem {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl DeleteItem {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn execute(&self, id: &ItemId) -> Result<()> {
        self.item_repo
            .delete(id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to delete item {}: {}", id, e))?;

        info!(item_id = %id, "deleted qr item");
        Ok(())
    }
}
