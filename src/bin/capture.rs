use line_follower::detector::DetectorOptions;
use line_follower::diagnostics::{draw_candidates, draw_observation, draw_zone_grid};
use line_follower::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use line_follower::PathDetector;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CaptureToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorOptions,
    pub output: CaptureOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CaptureOutputConfig {
    #[serde(rename = "overlay_image")]
    pub overlay_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<CaptureToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame = load_rgb_image(&config.input)?;
    let detector = PathDetector::new(config.detector);
    let report = detector.detect_with_diagnostics(&frame);

    let mut overlay = frame.clone();
    draw_zone_grid(&mut overlay, &detector.options().zone);
    draw_candidates(&mut overlay, &report.trace);
    draw_observation(&mut overlay, &report.observation);

    save_rgb_image(&overlay, &config.output.overlay_image)?;
    write_json_file(&config.output.report_json, &report)?;

    let obs = &report.observation;
    if obs.found {
        println!(
            "Path at ({}, {}) {}x{}, center {} (threshold {}, {} region(s))",
            obs.x,
            obs.y,
            obs.width,
            obs.height,
            obs.center(),
            report.trace.threshold,
            report.trace.region_count
        );
    } else {
        println!("No path found (threshold {})", report.trace.threshold);
    }
    println!(
        "Saved overlay to {} and report to {}",
        config.output.overlay_image.display(),
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: capture <config.json>".to_string()
}
