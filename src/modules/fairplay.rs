//! FairPlay Streaming scheme handler
//!
//! Decides whether FairPlay is the selected key system for a playback source,
//! whether the current browser can play it, and fills the playback config with
//! the FairPlay license url and application certificate.

use crate::entry::{find_scheme, DrmConfig, DrmEntry};
use crate::environment::{supports_fairplay, Environment};
use crate::logger::{DrmLogger, LogSink};
use crate::modules::DrmProtocol;
use crate::scheme::DrmScheme;

/// Component name used for diagnostics
pub const COMPONENT_NAME: &str = "FairPlay";

/// FairPlay protocol handler
///
/// Holds no state besides its collaborators; every call evaluates its inputs
/// afresh.
pub struct FairPlay<E, L = LogSink> {
    env: E,
    logger: L,
}

impl<E: Environment> FairPlay<E, LogSink> {
    /// Create handler logging through the `log` facade under the `FairPlay` target
    pub fn new(env: E) -> Self {
        Self::with_logger(env, LogSink::new(COMPONENT_NAME))
    }
}

impl<E: Environment, L: DrmLogger> FairPlay<E, L> {
    /// Create handler with an explicit diagnostic sink
    pub fn with_logger(env: E, logger: L) -> Self {
        Self { env, logger }
    }
}

impl<E: Environment, L: DrmLogger> DrmProtocol for FairPlay<E, L> {
    /// FairPlay is the configured key system.
    ///
    /// # Arguments
    /// * `drm_data` - Drm entries of the playback source
    /// * `drm_config` - Playback config carrying the chosen key system
    ///
    /// # Returns
    /// `true` when the chosen key system is FairPlay and the source has an
    /// entry for it
    fn is_configured(&self, drm_data: &[DrmEntry], drm_config: &DrmConfig) -> bool {
        drm_config.key_system == DrmScheme::FAIRPLAY
            && find_scheme(drm_data, drm_config.key_system).is_some()
    }

    /// FairPlay playback is possible when both hold:
    /// 1. The environment supports FairPlay playback.
    /// 2. The drm data of the source contains an entry with the FairPlay scheme.
    fn can_play_drm(&self, drm_data: &[DrmEntry]) -> bool {
        self.logger.debug(&format!("Can play DRM scheme of: {}", DrmScheme::FAIRPLAY));
        let is_safari = supports_fairplay(&self.env);
        find_scheme(drm_data, DrmScheme::FAIRPLAY).is_some() && is_safari
    }

    /// Sets the FairPlay license url and certificate on `config`.
    ///
    /// Leaves `config` untouched when the source has no FairPlay entry.
    fn set_drm_playback(&self, config: &mut DrmConfig, drm_data: &[DrmEntry]) {
        self.logger.debug("Sets drm playback");
        if let Some(entry) = find_scheme(drm_data, DrmScheme::FAIRPLAY) {
            config.license_url.clone_from(&entry.license_url);
            config.certificate.clone_from(&entry.certificate);
        }
    }
}
