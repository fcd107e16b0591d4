//! Simulation core: first-person camera and the fixed-interval update loop.
//!
//! # Invariants
//! - `CameraController::update` is the only mutator of camera state.
//! - Pitch stays within `[-PI/2, PI/2]` for every reachable state.
//! - Each tick runs `update` then `end_tick` as one unit; no tick is left
//!   partially applied.

mod camera;
mod clock;

pub use camera::{CameraController, KeyBindings, MOUSE_SENSITIVITY, PLAYER_SPEED};
pub use clock::{SimulationClock, TICK_INTERVAL};

pub fn crate_info() -> &'static str {
    "framewalk-sim v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("sim"));
    }
}
