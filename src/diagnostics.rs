//! Detection diagnostics: a structured per-stage trace next to the compact
//! observation, plus overlay rendering for the offline tools.
//!
//! [`DetectionReport`] is returned by
//! [`PathDetector::detect_with_diagnostics`](crate::PathDetector::detect_with_diagnostics);
//! the plain `detect` call simply discards the trace. Overlay drawing is
//! strictly additive — it consumes a finished report and mutates a copy of
//! the frame, never the detection result.

use crate::detector::{Region, Zone};
use crate::image::FrameRgb8;
use crate::types::PathObservation;
use serde::Serialize;

/// Observation plus the stage-by-stage trace that produced it.
#[derive(Clone, Debug, Serialize)]
pub struct DetectionReport {
    pub observation: PathObservation,
    pub trace: DetectionTrace,
}

/// What each stage of the detection pipeline saw and decided.
#[derive(Clone, Debug, Serialize)]
pub struct DetectionTrace {
    pub frame_width: u32,
    pub frame_height: u32,
    /// Zone actually scanned, after clamping to the frame.
    pub zone: Option<Zone>,
    /// Otsu threshold chosen for this frame.
    pub threshold: u8,
    pub region_count: usize,
    /// Candidate boxes in traversal order, full-frame coordinates. More than
    /// one entry means the single-path assumption was violated this frame.
    pub candidates: Vec<CandidateBox>,
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CandidateBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub area: u32,
}

impl CandidateBox {
    /// Translate a crop-local region into full-frame coordinates.
    pub(crate) fn from_region(region: &Region, zone: &Zone) -> Self {
        Self {
            x: region.min_x + zone.x,
            y: region.min_y + zone.y,
            width: region.width(),
            height: region.height(),
            area: region.area,
        }
    }
}

const ZONE_COLOR: [u8; 3] = [255, 255, 0];
const PATH_COLOR: [u8; 3] = [0, 255, 0];
const CANDIDATE_COLOR: [u8; 3] = [255, 0, 0];

/// Draw the sensing zone (inflated by two pixels so the path box stays
/// visible inside it) and the vertical frame-center line.
pub fn draw_zone_grid(frame: &mut FrameRgb8, zone: &Zone) {
    let x0 = zone.x.saturating_sub(2) as i64;
    let y0 = zone.y.saturating_sub(2) as i64;
    draw_rect(
        frame,
        x0,
        y0,
        zone.width as i64 + 4,
        zone.height as i64 + 4,
        ZONE_COLOR,
    );
    let center = ((frame.w as f32) / 2.0).round() as i64;
    draw_vline(frame, center, 0, frame.h as i64, ZONE_COLOR);
}

/// Draw the winning observation box with its center line.
pub fn draw_observation(frame: &mut FrameRgb8, obs: &PathObservation) {
    if !obs.found {
        return;
    }
    draw_rect(
        frame,
        obs.x as i64,
        obs.y as i64,
        obs.width as i64,
        obs.height as i64,
        PATH_COLOR,
    );
    draw_vline(
        frame,
        obs.center() as i64,
        obs.y as i64,
        (obs.y + obs.height) as i64,
        PATH_COLOR,
    );
}

/// Highlight every candidate region; useful when the trace reports more
/// than one (the multi-region warning case).
pub fn draw_candidates(frame: &mut FrameRgb8, trace: &DetectionTrace) {
    if trace.candidates.len() <= 1 {
        return;
    }
    for c in &trace.candidates {
        draw_rect(
            frame,
            c.x as i64,
            c.y as i64,
            c.width as i64,
            c.height as i64,
            CANDIDATE_COLOR,
        );
    }
}

fn draw_rect(frame: &mut FrameRgb8, x: i64, y: i64, w: i64, h: i64, color: [u8; 3]) {
    if w <= 0 || h <= 0 {
        return;
    }
    draw_hline(frame, x, x + w, y, color);
    draw_hline(frame, x, x + w, y + h - 1, color);
    draw_vline(frame, x, y, y + h, color);
    draw_vline(frame, x + w - 1, y, y + h, color);
}

fn draw_hline(frame: &mut FrameRgb8, x0: i64, x1: i64, y: i64, color: [u8; 3]) {
    if y < 0 || y >= frame.h as i64 {
        return;
    }
    let start = x0.clamp(0, frame.w as i64);
    let end = x1.clamp(0, frame.w as i64);
    for x in start..end {
        frame.set(x as usize, y as usize, color);
    }
}

fn draw_vline(frame: &mut FrameRgb8, x: i64, y0: i64, y1: i64, color: [u8; 3]) {
    if x < 0 || x >= frame.w as i64 {
        return;
    }
    let start = y0.clamp(0, frame.h as i64);
    let end = y1.clamp(0, frame.h as i64);
    for y in start..end {
        frame.set(x as usize, y as usize, color);
    }
}
