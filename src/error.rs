//! Error type shared by the controller and the hardware-facing traits.
//!
//! Detection misses are deliberately *not* errors: a frame without a visible
//! path yields a `found == false` observation so the caller can pick its own
//! recovery. Errors are reserved for the collaborators — a vision source that
//! cannot produce a frame, an actuator that failed mid-motion, or invalid
//! configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("vision source error: {0}")]
    Vision(String),

    /// Propagated unmodified from the motion interface. After a fault the
    /// robot's physical position is unknown relative to the last observation,
    /// so callers must not blindly retry the cycle.
    #[error("actuator fault: {0}")]
    Actuator(String),
}
