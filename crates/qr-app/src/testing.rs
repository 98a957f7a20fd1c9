//! Shared mock port implementations for use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;

use qr_core::content::QrContent;
use qr_core::ids::ItemId;
use qr_core::item::SavedItem;
use qr_core::ports::{ClockPort, ItemRepositoryError, ItemRepositoryPort};

/// In-memory [`ItemRepositoryPort`] backed by a `Vec`, newest first.
pub struct InMemoryItemRepository {
    pub items: Mutex<Vec<SavedItem>>,
    pub should_fail: bool,
}

impl InMemoryItemRepository {
    pub fn empty() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn with_items(items: Vec<SavedItem>) -> Self {
        Self {
            items: Mutex::new(items),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    fn guard(&self) -> Result<(), ItemRepositoryError> {
        if self.should_fail {
            Err(ItemRepositoryError::Storage(
                "mock repository error".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ItemRepositoryPort for InMemoryItemRepository {
    async fn save(&self, item: &SavedItem) -> Result<(), ItemRepositoryError> {
        self.guard()?;
        self.items.lock().unwrap().insert(0, item.clone());
        Ok(())
    }

    async fn get(&self, id: &ItemId) -> Result<Option<SavedItem>, ItemRepositoryError> {
        self.guard()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| &item.id == id)
            .cloned())
    }

    async fn list_recent(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedItem>, ItemRepositoryError> {
        self.guard()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_content(
        &self,
        id: &ItemId,
        content: &QrContent,
    ) -> Result<(), ItemRepositoryError> {
        self.guard()?;
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or(ItemRepositoryError::NotFound)?;
        item.content = content.clone();
        Ok(())
    }

    async fn rename(
        &self,
        id: &ItemId,
        display_name: Option<String>,
    ) -> Result<(), ItemRepositoryError> {
        self.guard()?;
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or(ItemRepositoryError::NotFound)?;
        item.display_name = display_name;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemRepositoryError> {
        self.guard()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Err(ItemRepositoryError::NotFound);
        }
        Ok(())
    }
}

/// [`ClockPort`] returning a constant.
pub struct FixedClock {
    pub now_ms: i64,
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms
    }
}

/// Builds a deterministic saved item for tests.
pub fn create_test_item(id_str: &str, created_at_ms: i64, content: QrContent) -> SavedItem {
    SavedItem::new(
        ItemId::from(id_str),
        Some(format!("Item {}", id_str)),
        created_at_ms,
        content,
    )
}
