#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod controller;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod policy;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector, policy, controller.
pub use crate::controller::{
    ControllerOptions, MotionInterface, StepController, StepOutcome, VisionSource,
};
pub use crate::detector::{DetectorOptions, PathDetector, Zone};
pub use crate::policy::{
    Correction, CorrectionBands, CorrectionPolicy, PolicyMode, PolicyOptions,
};
pub use crate::types::{Direction, MotionAction, PathObservation};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, DetectionTrace};

pub use crate::error::Error;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use line_follower::prelude::*;
///
/// # fn main() {
/// let frame = FrameRgb8::filled(320, 240, [255, 255, 255]);
/// let detector = PathDetector::new(DetectorOptions::default());
/// let obs = detector.detect(&frame);
/// println!("found={} center={}", obs.found, obs.center());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::FrameRgb8;
    pub use crate::{
        CorrectionPolicy, DetectorOptions, MotionAction, PathDetector, PathObservation,
        PolicyOptions, StepController,
    };
}
