use tracing::debug;

use qr_core::content::{ContentKind, QrContent, QrPayload, WlanSecurity};
use qr_core::ids::ItemId;
use qr_core::item::SavedItem;

/// One editing session over a single QR content value.
///
/// The session is the only holder of the mutable content while the user
/// edits; it is committed to storage through the save/update use cases and
/// simply dropped when an unsaved new session is abandoned.
///
/// The kind selector is synchronized by an explicit transition rule rather
/// than reactive observation: [`EditorSession::select_kind`] replaces the
/// content wholesale with the new kind's default, but only when the selected
/// kind actually differs from the current one. A re-trigger of the current
/// kind leaves in-progress edits untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    /// `Some` when editing an already-saved item, `None` for a new one.
    item_id: Option<ItemId>,
    display_name: Option<String>,
    content: QrContent,
}

impl EditorSession {
    /// Starts a session for a new, unsaved item. New items begin as an empty
    /// URL, the most common thing to encode.
    pub fn new_item() -> Self {
        Self {
            item_id: None,
            display_name: None,
            content: QrContent::default_for(ContentKind::Url),
        }
    }

    /// Starts a session editing an existing saved item.
    pub fn edit(item: &SavedItem) -> Self {
        Self {
            item_id: Some(item.id.clone()),
            display_name: item.display_name.clone(),
            content: item.content.clone(),
        }
    }

    pub fn item_id(&self) -> Option<&ItemId> {
        self.item_id.as_ref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn content(&self) -> &QrContent {
        &self.content
    }

    /// The kind the selector should currently display.
    pub fn selected_kind(&self) -> ContentKind {
        self.content.kind()
    }

    /// Applies a selector change.
    ///
    /// Replaces the content with a complete default of `kind` when the kind
    /// differs from the current one; a same-kind selection is a no-op so a
    /// spurious selector re-trigger cannot clobber in-progress edits.
    /// Returns whether the content was replaced.
    pub fn select_kind(&mut self, kind: ContentKind) -> bool {
        if kind == self.content.kind() {
            return false;
        }
        debug!(from = %self.content.kind(), to = %kind, "switching content kind");
        self.content = QrContent::default_for(kind);
        true
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.content.set_text(value);
    }

    pub fn set_ssid(&mut self, value: impl Into<String>) {
        self.content.set_ssid(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.content.set_password(value);
    }

    pub fn set_security(&mut self, value: WlanSecurity) {
        self.content.set_security(value);
    }

    pub fn set_hidden(&mut self, value: bool) {
        self.content.set_hidden(value);
    }

    /// Encodes the current content for live preview rendering.
    pub fn payload(&self) -> QrPayload {
        self.content.to_payload()
    }
}
