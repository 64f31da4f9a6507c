//! FairPlay scheme selection tests
//!
//! Exercise the public API end to end: drm data parsed from source JSON, the
//! browser taken from a name or a user agent, and the resulting playback config.
use std::cell::Cell;

use drm_select::{
    BrowserInfo, DrmConfig, DrmData, DrmEntry, DrmLogger, DrmProtocol, DrmScheme, FairPlay,
    NoopLogger, SelectionReport,
};

const SAFARI_IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";
const CHROME_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Counts diagnostics
#[derive(Default)]
struct CountingLogger {
    count: Cell<usize>,
}

impl DrmLogger for CountingLogger {
    fn debug(&self, _message: &str) {
        self.count.set(self.count.get() + 1);
    }
}

fn fairplay(browser: &str) -> FairPlay<BrowserInfo, NoopLogger> {
    FairPlay::with_logger(BrowserInfo::named(browser), NoopLogger)
}

fn mixed_entries() -> Vec<DrmEntry> {
    vec![
        DrmEntry::new(DrmScheme::Widevine, "https://w", "certW"),
        DrmEntry::new(DrmScheme::FairPlay, "https://fp", "certFP"),
    ]
}

#[test]
fn test_is_configured_false_for_other_key_systems() {
    let handler = fairplay("Safari");
    let entry_sets = [
        vec![],
        mixed_entries(),
        vec![DrmEntry::new(DrmScheme::Widevine, "https://w", "certW")],
        vec![DrmEntry::new(DrmScheme::PlayReady, "https://pr", "certPR")],
    ];

    for entries in &entry_sets {
        for key_system in [DrmScheme::Widevine, DrmScheme::PlayReady] {
            assert!(
                !handler.is_configured(entries, &DrmConfig::new(key_system)),
                "{} must never be reported as configured",
                key_system
            );
        }
    }
}

#[test]
fn test_is_configured_for_fairplay_key_system() {
    let handler = fairplay("Chrome");
    let config = DrmConfig::new(DrmScheme::FairPlay);

    assert!(handler.is_configured(&mixed_entries(), &config));
    assert!(handler.is_configured(
        &[DrmEntry::new(DrmScheme::FairPlay, "", "")],
        &config
    ));
    assert!(!handler.is_configured(
        &[DrmEntry::new(DrmScheme::Widevine, "https://w", "certW")],
        &config
    ));
    assert!(!handler.is_configured(&[], &config));
}

#[test]
fn test_can_play_drm_needs_safari_and_fairplay_entry() {
    assert!(fairplay("Safari").can_play_drm(&mixed_entries()));
    assert!(fairplay("Mobile Safari").can_play_drm(&mixed_entries()));
    assert!(!fairplay("Chrome").can_play_drm(&mixed_entries()));
    assert!(!fairplay("").can_play_drm(&mixed_entries()));
    assert!(!fairplay("Safari").can_play_drm(&[]));
    assert!(!fairplay("Safari").can_play_drm(&mixed_entries()[..1]));

    let unknown = FairPlay::with_logger(BrowserInfo::unknown(), NoopLogger);
    assert!(!unknown.can_play_drm(&mixed_entries()));
}

#[test]
fn test_can_play_drm_from_user_agent() {
    let ipad = FairPlay::with_logger(BrowserInfo::from_user_agent(SAFARI_IPAD), NoopLogger);
    assert!(ipad.can_play_drm(&mixed_entries()));

    // Chrome advertises Safari/ in its user agent but is not Safari
    let chrome = FairPlay::with_logger(BrowserInfo::from_user_agent(CHROME_MAC), NoopLogger);
    assert!(!chrome.can_play_drm(&mixed_entries()));
}

#[test]
fn test_set_drm_playback_fills_config() {
    let handler = fairplay("Safari");
    let mut config = DrmConfig::new(DrmScheme::FairPlay);

    handler.set_drm_playback(&mut config, &mixed_entries());

    assert_eq!(config.key_system, DrmScheme::FairPlay);
    assert_eq!(config.license_url, "https://fp");
    assert_eq!(config.certificate, "certFP");
}

#[test]
fn test_set_drm_playback_without_fairplay_is_noop() {
    let handler = fairplay("Safari");
    let mut config = DrmConfig {
        key_system: DrmScheme::FairPlay,
        license_url: "https://before".to_string(),
        certificate: "certBefore".to_string(),
    };
    let before = config.clone();

    let playready_only = [DrmEntry::new(DrmScheme::PlayReady, "https://pr", "certPR")];
    handler.set_drm_playback(&mut config, &playready_only);
    assert_eq!(config, before);

    handler.set_drm_playback(&mut config, &[]);
    assert_eq!(config, before);
}

#[test]
fn test_set_drm_playback_is_idempotent() {
    let handler = fairplay("Safari");
    let entries = mixed_entries();

    let mut once = DrmConfig::new(DrmScheme::FairPlay);
    handler.set_drm_playback(&mut once, &entries);

    let mut twice = DrmConfig::new(DrmScheme::FairPlay);
    handler.set_drm_playback(&mut twice, &entries);
    handler.set_drm_playback(&mut twice, &entries);

    assert_eq!(once, twice);
}

#[test]
fn test_diagnostics_do_not_depend_on_result() {
    let logger = CountingLogger::default();
    let handler = FairPlay::with_logger(BrowserInfo::named("Chrome"), &logger);
    let mut config = DrmConfig::new(DrmScheme::FairPlay);

    handler.is_configured(&mixed_entries(), &config);
    assert_eq!(logger.count.get(), 0);

    handler.can_play_drm(&mixed_entries());
    handler.can_play_drm(&[]);
    assert_eq!(logger.count.get(), 2);

    handler.set_drm_playback(&mut config, &[]);
    handler.set_drm_playback(&mut config, &mixed_entries());
    assert_eq!(logger.count.get(), 4);
}

#[test]
fn test_selection_from_source_json() {
    let json = r#"[
        {"scheme": "com.widevine.alpha", "licenseUrl": "https://w", "certificate": "certW"},
        {"scheme": "org.w3.clearkey", "licenseUrl": "https://ck"},
        {"scheme": "com.apple.fairplay", "licenseUrl": "https://fp", "certificate": "certFP"}
    ]"#;
    let drm_data = DrmData::from_json(json).unwrap();
    let handler = fairplay("Safari");
    let mut config = DrmConfig::new(DrmScheme::FairPlay);

    assert!(handler.is_configured(&drm_data, &config));
    assert!(handler.can_play_drm(&drm_data));
    handler.set_drm_playback(&mut config, &drm_data);

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["keySystem"], "com.apple.fairplay");
    assert_eq!(json["licenseUrl"], "https://fp");
    assert_eq!(json["certificate"], "certFP");
}

#[test]
fn test_absent_drm_data_behaves_as_empty() {
    let drm_data = DrmData::from_json("null").unwrap();
    let handler = fairplay("Safari");
    let mut config = DrmConfig::new(DrmScheme::FairPlay);

    assert!(!handler.is_configured(&drm_data, &config));
    assert!(!handler.can_play_drm(&drm_data));
    handler.set_drm_playback(&mut config, &drm_data);
    assert_eq!(config, DrmConfig::new(DrmScheme::FairPlay));

    let missing: Option<&[DrmEntry]> = None;
    assert!(!handler.can_play_drm(missing.unwrap_or_default()));
}

#[test]
fn test_selection_report_fills_config_when_playable() {
    let report =
        SelectionReport::evaluate(&fairplay("Safari"), &mixed_entries(), DrmScheme::FairPlay);

    assert!(report.configured);
    assert!(report.can_play);
    assert_eq!(report.drm_config.license_url, "https://fp");
    assert_eq!(report.drm_config.certificate, "certFP");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["configured"], true);
    assert_eq!(json["canPlay"], true);
    assert_eq!(json["drmConfig"]["keySystem"], "com.apple.fairplay");
    assert_eq!(json["drmConfig"]["licenseUrl"], "https://fp");
}

#[test]
fn test_selection_report_leaves_config_empty_when_not_playable() {
    let report =
        SelectionReport::evaluate(&fairplay("Chrome"), &mixed_entries(), DrmScheme::FairPlay);
    assert!(report.configured);
    assert!(!report.can_play);
    assert_eq!(report.drm_config, DrmConfig::new(DrmScheme::FairPlay));

    let report =
        SelectionReport::evaluate(&fairplay("Safari"), &mixed_entries(), DrmScheme::Widevine);
    assert!(!report.configured);
    assert!(report.can_play);
    assert_eq!(report.drm_config, DrmConfig::new(DrmScheme::Widevine));
}
