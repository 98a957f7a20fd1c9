use async_trait::async_trait;

use super::errors::ItemRepositoryError;
use crate::content::QrContent;
use crate::ids::ItemId;
use crate::item::SavedItem;

/// ItemRepositoryPort
///
/// Persistence boundary for saved QR items.
///
/// Conventions:
/// - `SavedItem` is the aggregate; the repository stores its `content` via
///   the content model's storage form, never the QR payload string.
/// - Writes are atomic per item.
/// - Operations addressing a missing id return
///   [`ItemRepositoryError::NotFound`].
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    /// Persists a new item.
    async fn save(&self, item: &SavedItem) -> Result<(), ItemRepositoryError>;

    /// Fetches one item by id.
    async fn get(&self, id: &ItemId) -> Result<Option<SavedItem>, ItemRepositoryError>;

    /// Lists items, newest first.
    async fn list_recent(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedItem>, ItemRepositoryError>;

    /// Rewrites the content of an existing item.
    async fn update_content(
        &self,
        id: &ItemId,
        content: &QrContent,
    ) -> Result<(), ItemRepositoryError>;

    /// Sets or clears the display name of an existing item.
    async fn rename(
        &self,
        id: &ItemId,
        display_name: Option<String>,
    ) -> Result<(), ItemRepositoryError>;

    /// Removes an item.
    async fn delete(&self, id: &ItemId) -> Result<(), ItemRepositoryError>;
}
