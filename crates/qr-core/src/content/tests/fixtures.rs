//! Test fixtures and helper functions for content tests.

use crate::content::*;

/// Creates a [`QrContent::Wlan`] value from its parts.
pub fn create_wlan(ssid: &str, password: &str, security: WlanSecurity, hidden: bool) -> QrContent {
    QrContent::Wlan {
        ssid: ssid.to_string(),
        password: password.to_string(),
        security,
        hidden,
    }
}

/// Creates a [`QrContent::Plain`] value.
pub fn create_plain(text: &str) -> QrContent {
    QrContent::Plain {
        text: text.to_string(),
    }
}

/// Creates a [`QrContent::Url`] value.
pub fn create_url(text: &str) -> QrContent {
    QrContent::Url {
        text: text.to_string(),
    }
}
