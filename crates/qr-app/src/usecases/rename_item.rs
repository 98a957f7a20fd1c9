use anyhow::Result;
use std::sync::Arc;

use qr_core::ids::ItemId;
use qr_core::ports::ItemRepositoryPort;

/// Use case for setting or clearing an item's display name.
pub struct RenameItem {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl RenameItem {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn execute(&self, id: &ItemId, display_name: Option<String>) -> Result<()> {
        self.item_repo
            .rename(id, display_name)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to rename item {}: {}", id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{create_test_item, InMemoryItemRepository};
    use qr_core::content::{ContentKind, QrContent};

    #[tokio::test]
    async fn test_execute_sets_name() {
        let item = create_test_item("item-1", 1000, QrContent::default_for(ContentKind::Url));
        let repo = Arc::new(InMemoryItemRepository::with_items(vec![item]));
        let use_case = RenameItem::new(repo.clone());

        use_case
            .execute(&ItemId::from("item-1"), Some("Office WiFi".to_string()))
            .await
            .unwrap();

        let stored = repo.items.lock().unwrap();
        assert_eq!(stored[0].display_name.as_deref(), Some("Office WiFi"));
    }

    #[tokio::test]
    async fn test_execute_clears_name() {
        let item = create_test_item("item-1", 1000, QrContent::default_for(ContentKind::Url));
        let repo = Arc::new(InMemoryItemRepository::with_items(vec![item]));
        let use_case = RenameItem::new(repo.clone());

        use_case.execute(&ItemId::from("item-1"), None).await.unwrap();

        let stored = repo.items.lock().unwrap();
        assert_eq!(stored[0].display_name, None);
    }

    #[tokio::test]
    async fn test_execute_missing_item_is_an_error() {
        let repo = Arc::new(InMemoryItemRepository::empty());
        let use_case = RenameItem::new(repo);

        let result = use_case
            .execute(&ItemId::from("missing"), Some("x".to_string()))
            .await;

        assert!(result.is_err());
    }
}
