//! Correction policy mapping detected path centers to discrete motion.
//!
//! Two signals drive the decision:
//! - the *relative gap* `center_prev - center_now`, how much the path
//!   appears to have shifted between two samples — catches the robot
//!   drifting off a path whose absolute position barely moved;
//! - the *absolute gap* `frame_center - center_now`, how far the path sits
//!   from the camera's optical center — steady-state centering.
//!
//! In the combined mode (primary) the relative signal is checked first
//! against the turn tiers; only a relatively-stable path is then re-centered
//! with a lateral move against the absolute signal. The absolute-only mode
//! reproduces the simpler historical behavior and is also what a
//! single-frame call (no previous center) degrades to.
//!
//! All comparisons scan tiers in descending threshold order with strict `>`,
//! so a gap equal to a threshold falls through to the next smaller tier.
//! The policy is deterministic and holds no state across calls.

pub mod bands;

pub use bands::{AdvanceTable, Band, CorrectionBands, Tier};

use crate::error::Error;
use crate::types::{Direction, MotionAction};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMode {
    /// Relative-then-absolute decision tree (primary).
    Combined,
    /// Absolute-gap turns only, ignoring any previous observation.
    AbsoluteOnly,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyOptions {
    pub mode: PolicyMode,
    /// Horizontal pixel the camera considers straight ahead.
    pub frame_center: i32,
    pub bands: CorrectionBands,
    pub advance: AdvanceTable,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            mode: PolicyMode::Combined,
            frame_center: 160,
            bands: CorrectionBands::default(),
            advance: AdvanceTable::default(),
        }
    }
}

/// Decision output: the corrective action plus the proposed forward-step
/// distance for this cycle (longer when already centered).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Correction {
    pub action: MotionAction,
    pub advance_mm: f32,
    pub tier: Tier,
}

/// Maps one or two path centers to a [`Correction`]. Thresholds and
/// magnitudes are injected as configuration; construction fails on an
/// inconsistent band set.
pub struct CorrectionPolicy {
    options: PolicyOptions,
}

impl CorrectionPolicy {
    pub fn new(options: PolicyOptions) -> Result<Self, Error> {
        options.bands.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &PolicyOptions {
        &self.options
    }

    /// Decide the correction for the current cycle.
    ///
    /// `center_prev` is the previous cycle's path center, passed only when
    /// that observation was valid; without it the policy degrades to
    /// absolute-gap turns.
    pub fn decide(&self, center_now: i32, center_prev: Option<i32>) -> Correction {
        let absolute_gap = self.options.frame_center - center_now;
        debug!(
            "CorrectionPolicy::decide center={} prev={:?} absolute_gap={}",
            center_now, center_prev, absolute_gap
        );
        let prev = match self.options.mode {
            PolicyMode::Combined => center_prev,
            PolicyMode::AbsoluteOnly => None,
        };
        match prev {
            Some(prev) => self.decide_combined(prev - center_now, absolute_gap),
            None => self.decide_absolute(absolute_gap),
        }
    }

    /// Absolute-gap ladder: turn toward the path, degrees carrying the same
    /// sign as the gap (path left of center ⇒ positive ⇒ left turn).
    fn decide_absolute(&self, absolute_gap: i32) -> Correction {
        for (tier, band) in self.options.bands.descending() {
            if absolute_gap.abs() > band.gap_px {
                let degrees = signum(absolute_gap) * band.turn_deg;
                info!(
                    "CorrectionPolicy::decide absolute gap {} exceeds {:?} tier, turn {:+.0}°",
                    absolute_gap, tier, degrees
                );
                return self.correction(MotionAction::Turn { degrees }, tier);
            }
        }
        debug!("CorrectionPolicy::decide centered, no correction");
        self.correction(MotionAction::NoOp, Tier::Centered)
    }

    /// Combined ladder: relative turns first, then absolute lateral moves.
    fn decide_combined(&self, relative_gap: i32, absolute_gap: i32) -> Correction {
        for (tier, band) in self.options.bands.descending() {
            if relative_gap.abs() > band.gap_px {
                // Rightward observed shift (negative gap) needs a leftward
                // corrective turn: degrees carry the opposite sign.
                let degrees = -signum(relative_gap) * band.turn_deg;
                info!(
                    "CorrectionPolicy::decide relative gap {} exceeds {:?} tier, turn {:+.0}°",
                    relative_gap, tier, degrees
                );
                return self.correction(MotionAction::Turn { degrees }, tier);
            }
        }
        for (tier, band) in self.options.bands.descending() {
            if absolute_gap.abs() > band.gap_px {
                let direction = if absolute_gap > 0 {
                    Direction::Left
                } else {
                    Direction::Right
                };
                info!(
                    "CorrectionPolicy::decide stable but absolute gap {} exceeds {:?} tier, move {:?} {:.0}mm",
                    absolute_gap, tier, direction, band.move_mm
                );
                return self.correction(
                    MotionAction::Move {
                        direction,
                        distance_mm: band.move_mm,
                    },
                    tier,
                );
            }
        }
        debug!("CorrectionPolicy::decide stable and centered, no correction");
        self.correction(MotionAction::NoOp, Tier::Centered)
    }

    fn correction(&self, action: MotionAction, tier: Tier) -> Correction {
        Correction {
            action,
            advance_mm: self.options.advance.for_tier(tier),
            tier,
        }
    }
}

fn signum(gap: i32) -> f32 {
    if gap > 0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(mode: PolicyMode) -> CorrectionPolicy {
        CorrectionPolicy::new(PolicyOptions {
            mode,
            ..Default::default()
        })
        .expect("default options valid")
    }

    #[test]
    fn centered_path_yields_noop_with_full_advance() {
        let p = policy(PolicyMode::Combined);
        let c = p.decide(160, Some(160));
        assert!(c.action.is_noop());
        assert_eq!(c.tier, Tier::Centered);
        assert_eq!(c.advance_mm, 40.0);
    }

    #[test]
    fn absolute_mode_ignores_previous_center() {
        let p = policy(PolicyMode::AbsoluteOnly);
        // huge relative shift, but absolute gap is zero
        let c = p.decide(160, Some(20));
        assert!(c.action.is_noop());
    }

    #[test]
    fn relative_shift_beats_absolute_gap_in_combined_mode() {
        let p = policy(PolicyMode::Combined);
        // relative gap 70 (medium), absolute gap 110 (would be medium too)
        let c = p.decide(50, Some(120));
        match c.action {
            MotionAction::Turn { degrees } => {
                // leftward shift (positive relative gap) turns right
                assert_eq!(degrees, -15.0);
            }
            other => panic!("expected relative turn, got {other:?}"),
        }
        assert_eq!(c.advance_mm, 20.0);
    }

    #[test]
    fn stable_relative_falls_back_to_lateral_move() {
        let p = policy(PolicyMode::Combined);
        // relative gap 10 (stable), absolute gap 160 - 90 = 70 (medium tier)
        let c = p.decide(90, Some(100));
        assert_eq!(
            c.action,
            MotionAction::Move {
                direction: Direction::Left,
                distance_mm: 10.0,
            }
        );
        assert_eq!(c.tier, Tier::Medium);
    }

    #[test]
    fn move_direction_tracks_gap_sign() {
        let p = policy(PolicyMode::Combined);
        // path right of center: absolute gap 160 - 230 = -70
        let c = p.decide(230, Some(235));
        assert_eq!(
            c.action,
            MotionAction::Move {
                direction: Direction::Right,
                distance_mm: 10.0,
            }
        );
    }

    #[test]
    fn single_frame_mode_uses_absolute_turns() {
        let p = policy(PolicyMode::Combined);
        let c = p.decide(50, None);
        assert_eq!(c.action, MotionAction::Turn { degrees: 15.0 });
        assert_eq!(c.tier, Tier::Medium);
    }
}
