use std::fmt;

use super::QrContent;

/// The literal string a QR image encodes.
///
/// A distinct type from the storage JSON on purpose: handing a storage
/// document to the image renderer (or persisting a payload string) is a bug
/// this wrapper makes hard to write.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QrPayload(String);

impl QrPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl QrContent {
    /// Encodes this content into the payload string. Total and pure.
    ///
    /// - `Plain` and `Url` emit the text verbatim.
    /// - `Wlan` emits `WIFI:S:<ssid>;T:<token>[;P:<password>][;H:true];;`
    ///   with a fixed segment order and the double-semicolon terminator.
    ///   The `P:` segment is omitted entirely (not emitted empty) for open
    ///   networks, whatever the stored password; `H:true` appears only for
    ///   hidden networks, `H:false` is never emitted.
    ///
    /// Reserved characters (`;`, `:`, `\`) in SSID or password are not
    /// escaped, so such inputs yield an ambiguous payload. Known limitation
    /// of this grammar as emitted here.
    pub fn to_payload(&self) -> QrPayload {
        match self {
            QrContent::Plain { text } | QrContent::Url { text } => QrPayload(text.clone()),
            QrContent::Wlan {
                ssid,
                password,
                security,
                hidden,
            } => {
                let mut out = format!("WIFI:S:{};T:{}", ssid, security.token());
                if security.requires_password() {
                    out.push_str(";P:");
                    out.push_str(password);
                }
                if *hidden {
                    out.push_str(";H:true");
                }
                out.push_str(";;");
                QrPayload(out)
            }
        }
    }
}
