use serde::{Deserialize, Serialize};
use std::fmt;

/// Reduced classification of [`QrContent`](super::QrContent), ignoring field
/// values.
///
/// `Plain` and `Url` carry the same single-string shape but stay distinct
/// kinds: a selector must be able to tell "URL" from "plain text" even though
/// both encode to the raw string verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Plain,
    Url,
    Wlan,
}

impl ContentKind {
    /// All kinds, in selector order.
    pub const ALL: [ContentKind; 3] = [ContentKind::Plain, ContentKind::Url, ContentKind::Wlan];

    /// Human-readable label for selector UIs.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Plain => "Plain",
            ContentKind::Url => "URL",
            ContentKind::Wlan => "WiFi",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
