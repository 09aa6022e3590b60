mod common;

use common::synthetic_frame::frame_with_bar;
use line_follower::controller::{ControllerOptions, MotionInterface, StepController, VisionSource};
use line_follower::error::Error;
use line_follower::image::FrameRgb8;
use line_follower::types::MotionAction;
use line_follower::{CorrectionPolicy, DetectorOptions, PathDetector, PolicyOptions};

struct SequenceVision {
    frames: Vec<FrameRgb8>,
    next: usize,
}

impl VisionSource for SequenceVision {
    fn latest_frame(&mut self) -> Result<FrameRgb8, Error> {
        let frame = self
            .frames
            .get(self.next)
            .cloned()
            .ok_or_else(|| Error::Vision("sequence exhausted".into()))?;
        self.next += 1;
        Ok(frame)
    }
}

struct SilentMotion;

impl MotionInterface for SilentMotion {
    fn turn_in_place(&mut self, _degrees: f32) -> Result<(), Error> {
        Ok(())
    }
    fn drive_straight(&mut self, _distance_mm: f32, _speed_mmps: f32) -> Result<(), Error> {
        Ok(())
    }
    fn set_head_angle(&mut self, _degrees: f32) -> Result<(), Error> {
        Ok(())
    }
    fn set_lift_height(&mut self, _fraction: f32) -> Result<(), Error> {
        Ok(())
    }
    fn set_head_light(&mut self, _on: bool) -> Result<(), Error> {
        Ok(())
    }
}

fn bar_centered_at(center: u32) -> FrameRgb8 {
    // 20px-wide bar inside the default zone, horizontally centered at `center`
    frame_with_bar(320, 240, (center - 10, 182, 20, 16))
}

#[test]
fn drifting_path_drives_the_expected_action_sequence() {
    let frames = vec![
        bar_centered_at(160), // perfectly centered
        bar_centered_at(150), // slight drift, inside the small band
        bar_centered_at(80),  // sharp leftward shift between samples
    ];
    let mut controller = StepController::new(
        PathDetector::new(DetectorOptions::default()),
        CorrectionPolicy::new(PolicyOptions::default()).expect("valid options"),
        SequenceVision { frames, next: 0 },
        SilentMotion,
        ControllerOptions::default(),
    );

    // Cycle 1: no previous observation, absolute gap 0 -> no correction
    let first = controller.step(None).expect("step 1");
    assert!(first.observation.found);
    assert!(first.action.is_noop());
    assert_eq!(first.observation.center(), 160);

    // Cycle 2: relative gap 10 stable, absolute gap 10 centered -> no-op
    let second = controller.step(Some(&first.observation)).expect("step 2");
    assert!(second.action.is_noop());
    assert_eq!(second.observation.center(), 150);

    // Cycle 3: relative gap 70 -> medium turn, leftward shift turns right
    let third = controller.step(Some(&second.observation)).expect("step 3");
    assert_eq!(third.action, MotionAction::Turn { degrees: -15.0 });

    // Sequence exhausted: the vision error surfaces, no panic
    let err = controller
        .step(Some(&third.observation))
        .expect_err("no more frames");
    assert!(matches!(err, Error::Vision(_)));
}
