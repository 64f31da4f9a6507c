//! Settings for the `drm-select` binary, read from environment variables.

use std::env;

use crate::environment::BrowserInfo;
use crate::error::DrmError;
use crate::scheme::DrmScheme;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `DRM_KEY_SYSTEM`
    pub key_system: DrmScheme,
    /// `DRM_BROWSER_NAME`, wins over the user agent
    pub browser_name: Option<String>,
    /// `DRM_USER_AGENT`
    pub user_agent: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, DrmError> {
        Self::load_with(|key| env::var(key))
    }

    /// Load with a custom variable lookup (for testing).
    pub fn load_with<F>(lookup: F) -> Result<Self, DrmError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let key_system = match lookup("DRM_KEY_SYSTEM") {
            Ok(value) => value
                .parse()
                .map_err(|e| DrmError::Config(format!("DRM_KEY_SYSTEM: {}", e)))?,
            Err(env::VarError::NotPresent) => DrmScheme::FAIRPLAY,
            Err(e) => return Err(DrmError::Config(format!("DRM_KEY_SYSTEM: {}", e))),
        };

        Ok(Settings {
            key_system,
            browser_name: non_empty(lookup("DRM_BROWSER_NAME")),
            user_agent: non_empty(lookup("DRM_USER_AGENT")),
        })
    }

    /// Browser described by these settings.
    pub fn browser(&self) -> BrowserInfo {
        match (&self.browser_name, &self.user_agent) {
            (Some(name), _) => BrowserInfo::named(name.clone()),
            (None, Some(user_agent)) => BrowserInfo::from_user_agent(user_agent),
            (None, None) => BrowserInfo::unknown(),
        }
    }
}

// Unset and empty variables both mean "not configured".
fn non_empty(value: Result<String, env::VarError>) -> Option<String> {
    value.ok().filter(|s| !s.is_empty())
}
