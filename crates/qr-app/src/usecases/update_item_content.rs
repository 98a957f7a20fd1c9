use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use qr_core::content::QrContent;
use qr_core::ids::ItemId;
use qr_core::ports::ItemRepositoryPort;

/// Use case for committing an editor session's content to an existing item.
pub struct UpdateItemContent {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl UpdateItemContent {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn execute(&self, id: &ItemId, content: &QrContent) -> Result<()> {
        self.item_repo
            .update_content(id, content)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to update item {}: {}", id, e))?;

        debug!(item_id = %id, kind = %content.kind(), "updated item content");
        Ok(())
    }
}
