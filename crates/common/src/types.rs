use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Viewport dimensions of the projection surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the viewport, where the projection origin sits.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// A snapshot of the camera: position plus derived orientation.
///
/// Orientation is never stored by the camera itself; it is recomputed from
/// yaw/pitch every time a pose is requested, so a pose can never go stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Position in world units.
    pub position: Vec3,
    /// Derived orientation (pitch about X, then yaw about Y, roll fixed at 0).
    pub orientation: Quat,
}

/// Rotation as a unit axis plus a magnitude in radians.
///
/// This is the representation the projection surface consumes. Conversions
/// from quaternions tolerate the degenerate zero-angle case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    pub axis: Vec3,
    pub angle: f32,
}

impl AxisAngle {
    /// The no-op rotation. The axis of a zero rotation is arbitrary; +X is
    /// the documented default.
    pub const IDENTITY: Self = Self {
        axis: Vec3::X,
        angle: 0.0,
    };

    pub fn new(axis: Vec3, angle: f32) -> Self {
        Self { axis, angle }
    }

    /// Decompose a unit quaternion into axis and angle.
    ///
    /// Uses the standard extraction: `angle = 2*acos(w)`, axis = vector part
    /// normalized by `sqrt(1 - w^2)`. When the vector part vanishes (angle
    /// near 0 or 2π) there is no meaningful axis, so +X is returned and the
    /// result stays finite.
    pub fn from_quat(q: Quat) -> Self {
        let w = q.w.clamp(-1.0, 1.0);
        let angle = 2.0 * w.acos();
        let s = (1.0 - w * w).sqrt();
        if s < 1e-6 {
            Self { axis: Vec3::X, angle }
        } else {
            Self {
                axis: Vec3::new(q.x, q.y, q.z) / s,
                angle,
            }
        }
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quat> for AxisAngle {
    fn from(q: Quat) -> Self {
        Self::from_quat(q)
    }
}
