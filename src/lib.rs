//! Protection scheme selection for media playback.
//!
//! Given the drm entries of a playback source, a scheme handler decides
//! whether its key system was chosen, whether the running browser can play it,
//! and fills the caller's playback config with the license url and certificate.
//!
//! # Usage
//!
//! ```
//! use drm_select::{BrowserInfo, DrmConfig, DrmEntry, DrmProtocol, DrmScheme, FairPlay};
//!
//! let drm_data = vec![
//!     DrmEntry::new(DrmScheme::Widevine, "https://w", "certW"),
//!     DrmEntry::new(DrmScheme::FairPlay, "https://fp", "certFP"),
//! ];
//! let mut config = DrmConfig::new(DrmScheme::FairPlay);
//!
//! let fairplay = FairPlay::new(BrowserInfo::named("Safari"));
//! if fairplay.is_configured(&drm_data, &config) && fairplay.can_play_drm(&drm_data) {
//!     fairplay.set_drm_playback(&mut config, &drm_data);
//! }
//! assert_eq!(config.license_url, "https://fp");
//! ```

pub mod entry;
pub mod environment;
pub mod error;
pub mod logger;
pub mod modules;
pub mod scheme;
pub mod settings;

// Re-export main types for convenience
pub use entry::{find_scheme, DrmConfig, DrmData, DrmEntry};
pub use environment::{supports_fairplay, BrowserInfo, Environment};
pub use error::DrmError;
pub use logger::{DrmLogger, LogSink, NoopLogger};
pub use modules::fairplay::FairPlay;
pub use modules::{DrmProtocol, SelectionReport};
pub use scheme::DrmScheme;
pub use settings::Settings;
