//! Detector configuration: the sensing zone and region filtering.

use serde::{Deserialize, Serialize};

/// Fixed axis-aligned rectangle scanned for the path, in frame pixels.
///
/// Configured once at startup and never mutated. Defaults match a 320×240
/// camera with the zone spanning the bottom of the frame.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Zone {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            x: 30,
            y: 180,
            width: 260,
            height: 20,
        }
    }
}

impl Zone {
    /// Intersection with a `frame_w × frame_h` frame, or `None` when the
    /// zone lies entirely outside.
    pub fn clamped_to(&self, frame_w: usize, frame_h: usize) -> Option<Zone> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x0 = self.x.min(frame_w as u32);
        let y0 = self.y.min(frame_h as u32);
        let x1 = (self.x + self.width).min(frame_w as u32);
        let y1 = (self.y + self.height).min(frame_h as u32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Zone {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

/// Detector-wide options.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectorOptions {
    /// Sub-region of the frame scanned for the path.
    pub zone: Zone,
    /// Regions smaller than this many pixels are discarded. The default
    /// keeps every region, matching the historical first-contour behavior.
    pub min_region_px: usize,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            zone: Zone::default(),
            min_region_px: 1,
        }
    }
}
