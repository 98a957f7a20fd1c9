use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use qr_core::content::QrContent;
use qr_core::ids::ItemId;
use qr_core::item::SavedItem;
use qr_core::ports::{ClockPort, ItemRepositoryPort};

/// Use case for saving a new QR item.
///
/// Mints the identity, stamps the creation time from the injected clock, and
/// hands the record to the repository. The caller keeps the returned item
/// (with its fresh id) so a "new" editing session can continue as an "edit"
/// session after the first save.
pub struct SaveItem {
    item_repo: Arc<dyn ItemRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveItem {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { item_repo, clock }
    }

    pub async fn execute(
        &self,
        display_name: Option<String>,
        content: QrContent,
    ) -> Result<SavedItem> {
        let item = SavedItem::new(ItemId::new(), display_name, self.clock.now_ms(), content);

        self.item_repo
            .save(&item)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to save item: {}", e))?;

        info!(item_id = %item.id, kind = %item.content.kind(), "saved new qr item");
        Ok(item)
    }
}
