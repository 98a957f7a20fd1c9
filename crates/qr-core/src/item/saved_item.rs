use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::QrContent;
use crate::ids::ItemId;

/// A persisted QR code: stable identity, optional user-given name, and the
/// content it encodes.
///
/// The repository owns the record lifecycle; the core only mints the id at
/// creation time and reads or rewrites `content` afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedItem {
    pub id: ItemId,
    pub display_name: Option<String>,
    /// unix epoch millis
    pub created_at_ms: i64,
    pub content: QrContent,
}

impl SavedItem {
    pub fn new(
        id: ItemId,
        display_name: Option<String>,
        created_at_ms: i64,
        content: QrContent,
    ) -> Self {
        Self {
            id,
            display_name,
            created_at_ms,
            content,
        }
    }

    /// Creation time as a UTC timestamp. Out-of-range millis clamp to the
    /// epoch rather than failing.
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.created_at_ms).unwrap_or(DateTime::UNIX_EPOCH)
    }
}
