//! Shared geometry types: viewport, camera pose, axis-angle rotations.
//!
//! # Invariants
//! - All coordinates use the projection surface's screen frame:
//!   +X right, +Y down, +Z toward the viewer.
//! - `AxisAngle::from_quat` never divides by zero; a near-identity rotation
//!   falls back to the +X axis.

mod types;

pub use types::{AxisAngle, CameraPose, Viewport};

pub fn crate_info() -> &'static str {
    "framewalk-common v0.1.0"
}
