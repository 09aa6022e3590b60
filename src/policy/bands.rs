//! Banded correction configuration.
//!
//! A band pairs a gap threshold (pixels) with the turn and lateral-move
//! magnitudes applied when a gap exceeds it. Bands are configuration only;
//! the decision function never hard-codes a threshold.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// One correction tier.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Band {
    /// Gap threshold in pixels; a gap matches this tier when strictly
    /// greater than the threshold.
    pub gap_px: i32,
    /// Turn magnitude in degrees.
    pub turn_deg: f32,
    /// Lateral move magnitude in millimetres.
    pub move_mm: f32,
}

/// The three correction tiers, strictly increasing in threshold.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CorrectionBands {
    pub small: Band,
    pub medium: Band,
    pub large: Band,
}

impl Default for CorrectionBands {
    fn default() -> Self {
        Self {
            small: Band {
                gap_px: 20,
                turn_deg: 5.0,
                move_mm: 5.0,
            },
            medium: Band {
                gap_px: 60,
                turn_deg: 15.0,
                move_mm: 10.0,
            },
            large: Band {
                gap_px: 120,
                turn_deg: 45.0,
                move_mm: 15.0,
            },
        }
    }
}

impl CorrectionBands {
    /// Tiers in descending threshold order, the order the decision scan
    /// must evaluate them in so a large gap is never misclassified.
    pub fn descending(&self) -> [(Tier, Band); 3] {
        [
            (Tier::Large, self.large),
            (Tier::Medium, self.medium),
            (Tier::Small, self.small),
        ]
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.small.gap_px < 0 {
            return Err(Error::Config(
                "band gap thresholds must be non-negative".into(),
            ));
        }
        if !(self.small.gap_px < self.medium.gap_px && self.medium.gap_px < self.large.gap_px) {
            return Err(Error::Config(format!(
                "band gap thresholds must be strictly increasing, got {} / {} / {}",
                self.small.gap_px, self.medium.gap_px, self.large.gap_px
            )));
        }
        for (name, band) in [
            ("small", &self.small),
            ("medium", &self.medium),
            ("large", &self.large),
        ] {
            if band.turn_deg <= 0.0 || band.move_mm <= 0.0 {
                return Err(Error::Config(format!(
                    "{name} band magnitudes must be positive"
                )));
            }
        }
        Ok(())
    }
}

/// Which tier a decision matched; also keys the advance proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Tier {
    Centered,
    Small,
    Medium,
    Large,
}

/// Forward-step distances keyed by the correction tier just applied: the
/// better centered the path, the longer the next advance.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AdvanceTable {
    pub centered_mm: f32,
    pub small_mm: f32,
    pub medium_mm: f32,
    pub large_mm: f32,
}

impl Default for AdvanceTable {
    fn default() -> Self {
        Self {
            centered_mm: 40.0,
            small_mm: 30.0,
            medium_mm: 20.0,
            large_mm: 10.0,
        }
    }
}

impl AdvanceTable {
    pub fn for_tier(&self, tier: Tier) -> f32 {
        match tier {
            Tier::Centered => self.centered_mm,
            Tier::Small => self.small_mm,
            Tier::Medium => self.medium_mm,
            Tier::Large => self.large_mm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands_are_valid() {
        CorrectionBands::default().validate().expect("defaults valid");
    }

    #[test]
    fn non_increasing_thresholds_are_rejected() {
        let mut bands = CorrectionBands::default();
        bands.medium.gap_px = bands.large.gap_px;
        assert!(bands.validate().is_err());
    }

    #[test]
    fn non_positive_magnitudes_are_rejected() {
        let mut bands = CorrectionBands::default();
        bands.small.turn_deg = 0.0;
        assert!(bands.validate().is_err());
    }

    #[test]
    fn advance_shrinks_with_correction_size() {
        let advance = AdvanceTable::default();
        assert!(advance.for_tier(Tier::Centered) > advance.for_tier(Tier::Small));
        assert!(advance.for_tier(Tier::Small) > advance.for_tier(Tier::Medium));
        assert!(advance.for_tier(Tier::Medium) > advance.for_tier(Tier::Large));
    }
}
