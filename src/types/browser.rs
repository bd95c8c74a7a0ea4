use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser family reported for a User-Agent string.
///
/// Serializes as the label text (`"Opera"`, ..., `"unknown"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Browser {
    Opera,
    Edge,
    Chrome,
    Safari,
    Firefox,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Browser {
    /// Every family that can be named by a rule, in built-in priority order.
    pub const ALL: [Browser; 5] = [
        Self::Opera,
        Self::Edge,
        Self::Chrome,
        Self::Safari,
        Self::Firefox,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Opera" => Some(Self::Opera),
            "Edge" => Some(Self::Edge),
            "Chrome" => Some(Self::Chrome),
            "Safari" => Some(Self::Safari),
            "Firefox" => Some(Self::Firefox),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opera => "Opera",
            Self::Edge => "Edge",
            Self::Chrome => "Chrome",
            Self::Safari => "Safari",
            Self::Firefox => "Firefox",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
