use serde::{Deserialize, Serialize};
use std::fmt;

/// Wi-Fi authentication mode of a [`Wlan`](super::QrContent::Wlan) network.
///
/// Closed set; the declaration order is stable and is the order a selector
/// UI lists the options in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WlanSecurity {
    Open,
    Wep,
    Wpa,
}

impl WlanSecurity {
    /// All modes, in selector order.
    pub const ALL: [WlanSecurity; 3] = [
        WlanSecurity::Open,
        WlanSecurity::Wep,
        WlanSecurity::Wpa,
    ];

    /// The `T:` token emitted in the Wi-Fi QR payload.
    pub fn token(&self) -> &'static str {
        match self {
            WlanSecurity::Open => "nopass",
            WlanSecurity::Wep => "WEP",
            WlanSecurity::Wpa => "WPA",
        }
    }

    /// Human-readable label for selector UIs.
    pub fn label(&self) -> &'static str {
        match self {
            WlanSecurity::Open => "None",
            WlanSecurity::Wep => "WEP",
            WlanSecurity::Wpa => "WPA",
        }
    }

    /// Whether this mode requires a password at join time.
    ///
    /// Gates both the password field in editors and the `P:` segment in the
    /// encoded payload.
    pub fn requires_password(&self) -> bool {
        !matches!(self, WlanSecurity::Open)
    }
}

impl fmt::Display for WlanSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
