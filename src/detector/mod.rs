//! Path detector reducing a raw camera frame to one path observation.
//!
//! Overview
//! - Converts the RGB frame to 8-bit luma and crops to the configured
//!   sensing [`Zone`] (a strided sub-view, no copy).
//! - Smooths the crop with a separable 5-tap Gaussian to suppress sensor
//!   noise, then binarizes with an Otsu threshold so lighting changes do not
//!   require retuning. Polarity is chosen so the dark path marking becomes
//!   the foreground.
//! - Grows 8-connected foreground regions in row-major seed order and takes
//!   the bounding box of the first region as the path footprint, translated
//!   back to full-frame coordinates.
//!
//! Absence of a path is not an error: the detector returns a
//! `found == false` observation and emits a single warning. Multiple regions
//! indicate a noisy frame or a violated single-path assumption; the first
//! region wins, a warning is emitted, and the full candidate list is exposed
//! through the diagnostics trace.
//!
//! Modules
//! - [`options`] – [`DetectorOptions`] and the [`Zone`] rectangle.
//! - `pipeline` – the [`PathDetector`] implementation.
//! - `blur` / `threshold` / `regions` – the individual pure stages.

mod blur;
pub mod options;
mod pipeline;
pub mod regions;
mod threshold;

pub use options::{DetectorOptions, Zone};
pub use pipeline::PathDetector;
pub use regions::Region;
