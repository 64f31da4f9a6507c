//! Drm descriptors of a playback source and the playback config they feed.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DrmError;
use crate::scheme::DrmScheme;

/// One protection scheme available for a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrmEntry {
    pub scheme: DrmScheme,
    #[serde(default)]
    pub license_url: String,
    /// Application certificate, opaque to this crate
    #[serde(default)]
    pub certificate: String,
}

impl DrmEntry {
    pub fn new(
        scheme: DrmScheme,
        license_url: impl Into<String>,
        certificate: impl Into<String>,
    ) -> Self {
        Self {
            scheme,
            license_url: license_url.into(),
            certificate: certificate.into(),
        }
    }
}

/// Playback configuration for the selected key system.
///
/// Owned by the caller. Scheme handlers only ever fill in `license_url` and
/// `certificate`; an empty string means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrmConfig {
    pub key_system: DrmScheme,
    #[serde(default)]
    pub license_url: String,
    #[serde(default)]
    pub certificate: String,
}

impl DrmConfig {
    pub fn new(key_system: DrmScheme) -> Self {
        Self {
            key_system,
            license_url: String::new(),
            certificate: String::new(),
        }
    }
}

/// Entry as it appears on the wire, before the scheme is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDrmEntry {
    scheme: String,
    #[serde(default)]
    license_url: Option<String>,
    #[serde(default)]
    certificate: Option<String>,
}

/// Parser for the drm list of a playback source.
pub struct DrmData;

impl DrmData {
    /// Parse a JSON array of drm entries.
    ///
    /// `null` is an absent list and yields no entries. Entries with a scheme
    /// outside [`DrmScheme`] are dropped so one foreign key system does not
    /// hide the others.
    pub fn from_json(input: &str) -> Result<Vec<DrmEntry>, DrmError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Vec<DrmEntry>, DrmError> {
        let items = match value {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            other => {
                return Err(DrmError::InvalidDrmData(format!(
                    "expected an array of drm entries, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let raw: RawDrmEntry = serde_json::from_value(item)?;
            match raw.scheme.parse::<DrmScheme>() {
                Ok(scheme) => entries.push(DrmEntry {
                    scheme,
                    license_url: raw.license_url.unwrap_or_default(),
                    certificate: raw.certificate.unwrap_or_default(),
                }),
                Err(e) => warn!("Skipping drm entry: {}", e),
            }
        }
        Ok(entries)
    }
}

/// First entry carrying `scheme`, wherever it sits in the list.
pub fn find_scheme(drm_data: &[DrmEntry], scheme: DrmScheme) -> Option<&DrmEntry> {
    drm_data.iter().find(|entry| entry.scheme == scheme)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
