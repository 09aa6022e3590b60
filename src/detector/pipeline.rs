//! Detector pipeline driving one frame from pixels to a path observation.
//!
//! Typical usage:
//! ```no_run
//! use line_follower::{DetectorOptions, PathDetector};
//! use line_follower::image::FrameRgb8;
//!
//! # fn example(frame: FrameRgb8) {
//! let detector = PathDetector::new(DetectorOptions::default());
//! let obs = detector.detect(&frame);
//! if obs.found {
//!     println!("path center at {}", obs.center());
//! }
//! # }
//! ```

use super::blur::blur_5x5;
use super::options::DetectorOptions;
use super::regions::find_regions;
use super::threshold::{binarize_dark, histogram, otsu_threshold};
use crate::diagnostics::{CandidateBox, DetectionReport, DetectionTrace};
use crate::image::FrameRgb8;
use crate::types::PathObservation;
use log::{debug, warn};
use std::time::Instant;

/// Reduces a raw RGB frame to a single path observation within the
/// configured sensing zone. Pure: holds only immutable options, retains
/// nothing of the frame.
pub struct PathDetector {
    options: DetectorOptions,
}

impl PathDetector {
    pub fn new(options: DetectorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DetectorOptions {
        &self.options
    }

    /// Run the detector, returning the compact observation.
    pub fn detect(&self, frame: &FrameRgb8) -> PathObservation {
        self.detect_with_diagnostics(frame).observation
    }

    /// Run the detector and return both the observation and a per-stage
    /// trace. Rendering/inspection of the trace never affects the
    /// observation.
    pub fn detect_with_diagnostics(&self, frame: &FrameRgb8) -> DetectionReport {
        let total_start = Instant::now();
        debug!(
            "PathDetector::detect start frame={}x{} zone={:?}",
            frame.w, frame.h, self.options.zone
        );

        let luma = frame.to_luma();
        let Some(zone) = self.options.zone.clamped_to(luma.width(), luma.height()) else {
            warn!("PathDetector::detect zone lies outside the frame, no path visible");
            return self.empty_report(frame, None, 0, Vec::new(), total_start);
        };
        if zone.width != self.options.zone.width || zone.height != self.options.zone.height {
            debug!(
                "PathDetector::detect zone clamped to {}x{}+{}+{}",
                zone.width, zone.height, zone.x, zone.y
            );
        }

        let crop = luma.as_view().sub_view(
            zone.x as usize,
            zone.y as usize,
            zone.width as usize,
            zone.height as usize,
        );
        let blurred = blur_5x5(&crop);
        let view = blurred.as_view();
        let threshold = otsu_threshold(&histogram(&view));
        let mask = binarize_dark(&view, threshold);
        let regions = find_regions(
            &mask,
            zone.width as usize,
            zone.height as usize,
            self.options.min_region_px,
        );

        let candidates: Vec<CandidateBox> = regions
            .iter()
            .map(|r| CandidateBox::from_region(r, &zone))
            .collect();

        let observation = match regions.len() {
            0 => {
                warn!("PathDetector::detect no path region found");
                PathObservation::not_found()
            }
            n => {
                if n > 1 {
                    warn!(
                        "PathDetector::detect {} candidate regions, keeping the first",
                        n
                    );
                }
                let first = &candidates[0];
                PathObservation {
                    found: true,
                    x: first.x,
                    y: first.y,
                    width: first.width,
                    height: first.height,
                }
            }
        };

        let elapsed_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "PathDetector::detect done found={} threshold={} regions={} latency_ms={:.3}",
            observation.found,
            threshold,
            regions.len(),
            elapsed_ms
        );

        DetectionReport {
            observation,
            trace: DetectionTrace {
                frame_width: frame.w as u32,
                frame_height: frame.h as u32,
                zone: Some(zone),
                threshold,
                region_count: regions.len(),
                candidates,
                elapsed_ms,
            },
        }
    }

    fn empty_report(
        &self,
        frame: &FrameRgb8,
        zone: Option<super::options::Zone>,
        threshold: u8,
        candidates: Vec<CandidateBox>,
        total_start: Instant,
    ) -> DetectionReport {
        DetectionReport {
            observation: PathObservation::not_found(),
            trace: DetectionTrace {
                frame_width: frame.w as u32,
                frame_height: frame.h as u32,
                zone,
                threshold,
                region_count: candidates.len(),
                candidates,
                elapsed_ms: total_start.elapsed().as_secs_f64() * 1000.0,
            },
        }
    }
}
