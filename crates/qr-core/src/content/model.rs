use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ContentKind, WlanSecurity};

/// Full edit state of one QR code: what the code encodes, with every field
/// the chosen content type carries.
///
/// Invariants:
/// - A value is always fully determined. Switching kinds goes through
///   [`QrContent::default_for`], which builds a complete fresh value and
///   never reuses fields from a different kind.
/// - For `Wlan`, `password` keeps whatever the user typed even while
///   `security` is [`WlanSecurity::Open`]; only payload emission is
///   suppressed. Toggling Open and back loses nothing.
/// - Empty strings are valid everywhere. Whether an empty SSID or text is
///   worth saving is a caller decision, not a model error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QrContent {
    /// Free-form text, encoded verbatim.
    Plain { text: String },

    /// A URL, encoded verbatim. Not validated or normalized; the payload is
    /// whatever the user typed.
    Url { text: String },

    /// Wi-Fi network credentials, encoded with the `WIFI:` mini-grammar.
    Wlan {
        ssid: String,
        password: String,
        security: WlanSecurity,
        hidden: bool,
    },
}

impl QrContent {
    /// Builds the complete default value for `kind`.
    ///
    /// `Wlan` defaults to WPA rather than Open so a fresh Wi-Fi form shows
    /// the password field instead of silently producing an open network.
    pub fn default_for(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Plain => QrContent::Plain {
                text: String::new(),
            },
            ContentKind::Url => QrContent::Url {
                text: String::new(),
            },
            ContentKind::Wlan => QrContent::Wlan {
                ssid: String::new(),
                password: String::new(),
                security: WlanSecurity::Wpa,
                hidden: false,
            },
        }
    }

    /// Projects the variant shape down to its [`ContentKind`]. Total.
    pub fn kind(&self) -> ContentKind {
        match self {
            QrContent::Plain { .. } => ContentKind::Plain,
            QrContent::Url { .. } => ContentKind::Url,
            QrContent::Wlan { .. } => ContentKind::Wlan,
        }
    }

    /// Replaces the text of a `Plain` or `Url` value.
    ///
    /// Ignored on `Wlan`: a stale edit callback must not cross-contaminate a
    /// different variant.
    pub fn set_text(&mut self, value: impl Into<String>) {
        match self {
            QrContent::Plain { text } | QrContent::Url { text } => *text = value.into(),
            QrContent::Wlan { .. } => warn!("ignoring text update on wlan content"),
        }
    }

    /// Replaces the SSID of a `Wlan` value; ignored on other variants.
    pub fn set_ssid(&mut self, value: impl Into<String>) {
        match self {
            QrContent::Wlan { ssid, .. } => *ssid = value.into(),
            _ => warn!("ignoring ssid update on non-wlan content"),
        }
    }

    /// Replaces the stored password of a `Wlan` value; ignored on other
    /// variants. The password is stored even while `security` is `Open`.
    pub fn set_password(&mut self, value: impl Into<String>) {
        match self {
            QrContent::Wlan { password, .. } => *password = value.into(),
            _ => warn!("ignoring password update on non-wlan content"),
        }
    }

    /// Switches the security mode of a `Wlan` value; ignored on other
    /// variants. Never touches the stored password.
    pub fn set_security(&mut self, value: WlanSecurity) {
        match self {
            QrContent::Wlan { security, .. } => *security = value,
            _ => warn!("ignoring security update on non-wlan content"),
        }
    }

    /// Sets the hidden-network flag of a `Wlan` value; ignored on other
    /// variants.
    pub fn set_hidden(&mut self, value: bool) {
        match self {
            QrContent::Wlan { hidden, .. } => *hidden = value,
            _ => warn!("ignoring hidden-flag update on non-wlan content"),
        }
    }

    /// Serializes to the durable storage form (JSON).
    ///
    /// This is what the persistence layer writes into a saved item's
    /// `content` column. It is not the QR payload string; see
    /// [`QrContent::to_payload`].
    pub fn to_storage_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserializes a value previously produced by
    /// [`QrContent::to_storage_json`].
    pub fn from_storage_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
