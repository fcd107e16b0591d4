use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Mat2, Quat, Vec2, Vec3};

use framewalk_common::CameraPose;
use framewalk_input::InputState;

/// Default movement speed in world units per second.
pub const PLAYER_SPEED: f32 = 600.0;

/// Default look speed in radians per mouse unit per second.
pub const MOUSE_SENSITIVITY: f32 = 0.75;

/// Key identifiers (normalized, lowercase) bound to camera movement.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    /// Moves against the vertical axis (screen-up, -Y).
    pub ascend: String,
    /// Moves along the vertical axis (screen-down, +Y).
    pub descend: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".to_string(),
            backward: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
            ascend: " ".to_string(),
            descend: "shift".to_string(),
        }
    }
}

/// First-person camera: position plus yaw/pitch orientation.
///
/// Yaw accumulates unbounded (positive = counter-clockwise about the vertical
/// axis); pitch is clamped to `[-PI/2, PI/2]`. Orientation is derived from
/// the two angles on demand, never stored.
#[derive(Debug, Clone)]
pub struct CameraController {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub bindings: KeyBindings,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 300.0),
            yaw: 0.0,
            pitch: 0.0,
            speed: PLAYER_SPEED,
            sensitivity: MOUSE_SENSITIVITY,
            bindings: KeyBindings::default(),
        }
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the camera by one tick.
    ///
    /// Consumes the held-key set and accumulated mouse delta from `input`;
    /// does not clear them (the clock calls `end_tick` afterwards). This is
    /// the only place camera state mutates.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        let step = self.speed * dt;

        // Vertical: both keys held apply both, the effects are additive.
        if input.is_pressed(&self.bindings.descend) {
            self.position.y += step;
        }
        if input.is_pressed(&self.bindings.ascend) {
            self.position.y -= step;
        }

        // Planar: opposing keys cancel; the combined direction is normalized
        // so diagonals move no faster than a single axis, then rotated into
        // the current facing.
        let mut dir = Vec2::ZERO;
        if input.is_pressed(&self.bindings.left) {
            dir.x -= 1.0;
        }
        if input.is_pressed(&self.bindings.right) {
            dir.x += 1.0;
        }
        if input.is_pressed(&self.bindings.forward) {
            dir.y -= 1.0;
        }
        if input.is_pressed(&self.bindings.backward) {
            dir.y += 1.0;
        }
        if dir != Vec2::ZERO {
            let planar = Mat2::from_angle(-self.yaw) * dir.normalize();
            self.position.x += planar.x * step;
            self.position.z += planar.y * step;
        }

        // Look: one capture of the accumulated delta feeds both angles.
        let delta = input.mouse_delta();
        self.yaw -= dt * delta.x * self.sensitivity;
        self.pitch = (self.pitch + dt * delta.y * self.sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Current pose with the orientation derived fresh from yaw/pitch.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            orientation: Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0),
        }
    }
}
