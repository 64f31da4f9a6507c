//! Protection scheme identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrmError;

/// Protection scheme (EME key system) type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrmScheme {
    /// Google Widevine
    #[serde(rename = "com.widevine.alpha", alias = "widevine")]
    Widevine,
    /// Microsoft PlayReady
    #[serde(rename = "com.microsoft.playready", alias = "playready")]
    PlayReady,
    /// Apple FairPlay Streaming
    #[serde(rename = "com.apple.fairplay", alias = "fairplay")]
    FairPlay,
}

impl DrmScheme {
    pub const FAIRPLAY: DrmScheme = DrmScheme::FairPlay;

    /// Key system identifier as it appears in source descriptors.
    pub fn key_system(&self) -> &'static str {
        match self {
            DrmScheme::Widevine => "com.widevine.alpha",
            DrmScheme::PlayReady => "com.microsoft.playready",
            DrmScheme::FairPlay => "com.apple.fairplay",
        }
    }
}

impl fmt::Display for DrmScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_system())
    }
}

impl FromStr for DrmScheme {
    type Err = DrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "com.widevine.alpha" | "widevine" => Ok(DrmScheme::Widevine),
            "com.microsoft.playready" | "playready" => Ok(DrmScheme::PlayReady),
            "com.apple.fairplay" | "fairplay" => Ok(DrmScheme::FairPlay),
            other => Err(DrmError::UnknownScheme(other.to_string())),
        }
    }
}
