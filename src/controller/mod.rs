//! Step controller orchestrating one perception → decision → actuation
//! cycle.
//!
//! The controller owns the detector, the policy and the two hardware-facing
//! collaborators, but holds no loop: the surrounding program decides how
//! many cycles to run and what to do when the path is lost. Each cycle
//! fully completes before the next begins — every motion call blocks until
//! the physical motion finishes, so commands never stack.
//!
//! Failure semantics: a `found == false` detection still returns control
//! with a `NoOp` outcome and issues **no** motion command; actuator faults
//! propagate unmodified and abort the cycle, since after a failed move the
//! robot's position is unknown relative to the last observation.

use crate::detector::PathDetector;
use crate::diagnostics::DetectionReport;
use crate::error::Error;
use crate::image::FrameRgb8;
use crate::policy::CorrectionPolicy;
use crate::types::{Direction, MotionAction, PathObservation};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Pull-based frame supplier. Always returns the most recent frame and may
/// block briefly if none has been captured yet.
pub trait VisionSource {
    fn latest_frame(&mut self) -> Result<FrameRgb8, Error>;
}

/// Blocking motion primitives. Each call returns only once the physical
/// motion has completed or failed.
pub trait MotionInterface {
    fn turn_in_place(&mut self, degrees: f32) -> Result<(), Error>;
    fn drive_straight(&mut self, distance_mm: f32, speed_mmps: f32) -> Result<(), Error>;
    fn set_head_angle(&mut self, degrees: f32) -> Result<(), Error>;
    fn set_lift_height(&mut self, fraction: f32) -> Result<(), Error>;
    fn set_head_light(&mut self, on: bool) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerOptions {
    /// Camera pitch for path sensing; the default looks straight down.
    pub head_angle_deg: f32,
    /// Lift position held during following, keeping the forks out of view.
    pub lift_height: f32,
    pub advance_speed_mmps: f32,
    /// Turn magnitude of the lateral jog shuffle.
    pub jog_turn_deg: f32,
    pub jog_speed_mmps: f32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            head_angle_deg: -25.0,
            lift_height: 1.0,
            advance_speed_mmps: 20.0,
            jog_turn_deg: 45.0,
            jog_speed_mmps: 5.0,
        }
    }
}

/// What one cycle produced: the fresh observation to thread into the next
/// cycle, and the action that was executed.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StepOutcome {
    pub observation: PathObservation,
    pub action: MotionAction,
}

pub struct StepController<V: VisionSource, M: MotionInterface> {
    detector: PathDetector,
    policy: CorrectionPolicy,
    vision: V,
    motion: M,
    options: ControllerOptions,
}

impl<V: VisionSource, M: MotionInterface> StepController<V, M> {
    pub fn new(
        detector: PathDetector,
        policy: CorrectionPolicy,
        vision: V,
        motion: M,
        options: ControllerOptions,
    ) -> Self {
        Self {
            detector,
            policy,
            vision,
            motion,
            options,
        }
    }

    /// One-time session setup: raise the lift out of the camera's view,
    /// switch the head light on and lower the head to the sensing angle.
    pub fn prepare(&mut self) -> Result<(), Error> {
        info!("StepController::prepare lift={} head_angle={}", self.options.lift_height, self.options.head_angle_deg);
        self.motion.set_lift_height(self.options.lift_height)?;
        self.motion.set_head_light(true)?;
        self.motion.set_head_angle(self.options.head_angle_deg)
    }

    /// Run one control cycle: acquire, detect, decide, act.
    ///
    /// `prev` is the observation returned by the previous cycle; pass `None`
    /// on the first cycle or to force single-frame (absolute-only) behavior.
    /// When no path is visible the returned action is `NoOp`, no motion
    /// command is issued, and the caller chooses its own recovery.
    pub fn step(&mut self, prev: Option<&PathObservation>) -> Result<StepOutcome, Error> {
        debug!("StepController::step begin");
        let frame = self.vision.latest_frame()?;
        let observation = self.detector.detect(&frame);

        if !observation.found {
            info!("StepController::step no path visible, holding position");
            return Ok(StepOutcome {
                observation,
                action: MotionAction::NoOp,
            });
        }

        let center_prev = prev.filter(|o| o.found).map(|o| o.center());
        let correction = self.policy.decide(observation.center(), center_prev);
        self.execute(&correction.action)?;

        if correction.advance_mm > 0.0 {
            info!(
                "StepController::step advancing {:.0}mm at {:.0}mm/s",
                correction.advance_mm, self.options.advance_speed_mmps
            );
            self.motion
                .drive_straight(correction.advance_mm, self.options.advance_speed_mmps)?;
        }

        Ok(StepOutcome {
            observation,
            action: correction.action,
        })
    }

    /// Manual lateral shuffle: turn toward `direction`, drive a short
    /// straight stretch at crawl speed, counter-turn back to the original
    /// heading. Also the executor for `Move` actions.
    pub fn jog(&mut self, direction: Direction, distance_mm: f32) -> Result<(), Error> {
        info!("StepController::jog {:?} {:.0}mm", direction, distance_mm);
        let turn = match direction {
            Direction::Left => self.options.jog_turn_deg,
            Direction::Right => -self.options.jog_turn_deg,
        };
        self.motion.turn_in_place(turn)?;
        self.motion
            .drive_straight(distance_mm, self.options.jog_speed_mmps)?;
        self.motion.turn_in_place(-turn)
    }

    /// Grab a frame and run the detector with full diagnostics, without
    /// issuing any motion. Returns the frame as well so callers can render
    /// the overlay onto it.
    pub fn capture(&mut self) -> Result<(FrameRgb8, DetectionReport), Error> {
        let frame = self.vision.latest_frame()?;
        let report = self.detector.detect_with_diagnostics(&frame);
        Ok((frame, report))
    }

    fn execute(&mut self, action: &MotionAction) -> Result<(), Error> {
        match *action {
            MotionAction::NoOp => Ok(()),
            MotionAction::Turn { degrees } => {
                info!("StepController::step turning {:+.0}°", degrees);
                self.motion.turn_in_place(degrees)
            }
            MotionAction::Move {
                direction,
                distance_mm,
            } => self.jog(direction, distance_mm),
            MotionAction::TurnThenMove {
                degrees,
                direction,
                distance_mm,
            } => {
                info!("StepController::step turning {:+.0}° before moving", degrees);
                self.motion.turn_in_place(degrees)?;
                self.jog(direction, distance_mm)
            }
        }
    }
}
