use std::env;
use std::fs;
use std::process;

use drm_select::{DrmData, DrmError, FairPlay, SelectionReport, Settings};
use log::{error, info};

fn main() {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: drm-select <drm-data.json>");
        process::exit(2);
    };

    match run(&path) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn run(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    let input = fs::read_to_string(path).map_err(DrmError::from)?;
    let drm_data = DrmData::from_json(&input)?;
    info!(
        "Loaded {} drm entries from {} (key system {})",
        drm_data.len(),
        path,
        settings.key_system
    );

    let fairplay = FairPlay::new(settings.browser());
    let report = SelectionReport::evaluate(&fairplay, &drm_data, settings.key_system);
    Ok(serde_json::to_string_pretty(&report)?)
}
