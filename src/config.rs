//! JSON configuration for the follower.
//!
//! One document groups the per-component option structs; every section has
//! defaults, so a minimal config can be `{}` and still drive a 320×240
//! camera with the stock zone and bands.

use crate::controller::ControllerOptions;
use crate::detector::DetectorOptions;
use crate::policy::PolicyOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FollowerConfig {
    pub detector: DetectorOptions,
    pub policy: PolicyOptions,
    pub controller: ControllerOptions,
}

pub fn load_config(path: &Path) -> Result<FollowerConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyMode;

    #[test]
    fn empty_document_yields_defaults() {
        let config: FollowerConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(config.policy.frame_center, 160);
        assert_eq!(config.detector.zone.width, 260);
        assert_eq!(config.policy.mode, PolicyMode::Combined);
    }

    #[test]
    fn partial_sections_override_defaults_only() {
        let json = r#"{
            "detector": { "zone": { "x": 0, "y": 100, "width": 320, "height": 40 } },
            "policy": { "mode": "absolute_only", "frame_center": 200 }
        }"#;
        let config: FollowerConfig = serde_json::from_str(json).expect("parse");
        assert_eq!(config.detector.zone.y, 100);
        assert_eq!(config.detector.min_region_px, 1);
        assert_eq!(config.policy.mode, PolicyMode::AbsoluteOnly);
        assert_eq!(config.policy.frame_center, 200);
        assert_eq!(config.policy.bands.large.gap_px, 120);
        assert_eq!(config.controller.advance_speed_mmps, 20.0);
    }
}
