use serde::Serialize;

/// Result of one detection cycle, in full-frame pixel coordinates.
///
/// `found == false` is a valid terminal value meaning "no path visible this
/// cycle"; the geometry fields are zero then and must not be consumed.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct PathObservation {
    pub found: bool,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PathObservation {
    /// Observation for a frame where no path region was detected.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Horizontal center of the path footprint, `round(x + width / 2)`.
    ///
    /// Derived on demand; never stored alongside the box.
    pub fn center(&self) -> i32 {
        (self.x as f32 + self.width as f32 / 2.0).round() as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    Left,
    Right,
}

/// Discrete corrective command produced by the policy and consumed by the
/// motion interface. Positive turn degrees rotate counter-clockwise (left).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum MotionAction {
    NoOp,
    Turn {
        degrees: f32,
    },
    /// Lateral shuffle toward the path, executed as a turn / short straight
    /// drive / counter-turn sequence.
    Move {
        direction: Direction,
        distance_mm: f32,
    },
    TurnThenMove {
        degrees: f32,
        direction: Direction,
        distance_mm: f32,
    },
}

impl MotionAction {
    pub fn is_noop(&self) -> bool {
        matches!(self, MotionAction::NoOp)
    }
}
