pub mod fairplay;

use serde::Serialize;

use crate::entry::{DrmConfig, DrmEntry};
use crate::scheme::DrmScheme;

/// Per-scheme playback handler
///
/// Each handler decides whether its scheme was picked, whether the current
/// environment can play it, and fills the playback config for it.
pub trait DrmProtocol {
    /// Whether the config targets this handler's scheme and the source offers it.
    fn is_configured(&self, drm_data: &[DrmEntry], drm_config: &DrmConfig) -> bool;

    /// Whether the source offers this scheme and the environment can play it.
    fn can_play_drm(&self, drm_data: &[DrmEntry]) -> bool;

    /// Copy license url and certificate of this scheme's entry into `config`.
    fn set_drm_playback(&self, config: &mut DrmConfig, drm_data: &[DrmEntry]);
}

/// Outcome of running one handler over a source's drm data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionReport {
    pub configured: bool,
    pub can_play: bool,
    pub drm_config: DrmConfig,
}

impl SelectionReport {
    /// Check `key_system` against `drm_data` with `protocol`.
    ///
    /// The config is only filled when the handler is both configured and
    /// playable; otherwise it is reported empty.
    pub fn evaluate<P: DrmProtocol + ?Sized>(
        protocol: &P,
        drm_data: &[DrmEntry],
        key_system: DrmScheme,
    ) -> Self {
        let mut drm_config = DrmConfig::new(key_system);
        let configured = protocol.is_configured(drm_data, &drm_config);
        let can_play = protocol.can_play_drm(drm_data);
        if configured && can_play {
            protocol.set_drm_playback(&mut drm_config, drm_data);
        }

        Self {
            configured,
            can_play,
            drm_config,
        }
    }
}
