use std::collections::HashSet;

use glam::Vec2;

use crate::event::InputEvent;

/// Normalize a host key identifier for case-insensitive matching.
///
/// Hosts report free-form identifiers ("W", "Shift", " "); all lookups and
/// stored state use the lowercased form.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Tracks raw key/mouse activity between simulation ticks.
///
/// All mutation is gated by the pointer-lock flag: while unlocked, events are
/// dropped without touching any field. Created once at startup and mutated in
/// place for the session's lifetime.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held.
    pressed: HashSet<String>,
    /// Keys pressed since the last `end_tick`.
    just_pressed: HashSet<String>,
    /// Keys released since the last `end_tick`.
    just_released: HashSet<String>,
    /// Mouse movement accumulated since the last `end_tick`.
    mouse_delta: Vec2,
    /// Whether the host is currently capturing input.
    locked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down notification from the host.
    pub fn on_key_down(&mut self, key: &str) {
        if !self.locked {
            return;
        }
        let key = normalize_key(key);
        self.just_pressed.insert(key.clone());
        self.pressed.insert(key);
    }

    /// Handle a key-up notification from the host.
    pub fn on_key_up(&mut self, key: &str) {
        if !self.locked {
            return;
        }
        let key = normalize_key(key);
        self.pressed.remove(&key);
        self.just_released.insert(key);
    }

    /// Accumulate a relative mouse movement.
    pub fn on_mouse_move(&mut self, dx: f32, dy: f32) {
        if !self.locked {
            return;
        }
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Handle a pointer-lock state change.
    ///
    /// Only the lock flag changes. A key held when the lock is lost stays in
    /// `pressed` until its own key-up arrives; held-key state is deliberately
    /// not auto-released here.
    pub fn on_lock_changed(&mut self, locked: bool) {
        tracing::debug!(locked, "pointer lock changed");
        self.locked = locked;
    }

    /// Apply a host notification. Equivalent to calling the matching
    /// `on_*` method directly.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.on_key_down(key),
            InputEvent::KeyUp(key) => self.on_key_up(key),
            InputEvent::MouseMove { dx, dy } => self.on_mouse_move(*dx, *dy),
            InputEvent::LockChanged { locked } => self.on_lock_changed(*locked),
        }
    }

    /// Clear the per-tick accumulators. Called exactly once per simulation
    /// tick, after the camera update has consumed the current values.
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.mouse_delta = Vec2::ZERO;
    }

    /// Check whether a key is currently held.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&normalize_key(key))
    }

    /// Check whether a key was pressed since the last tick.
    pub fn was_just_pressed(&self, key: &str) -> bool {
        self.just_pressed.contains(&normalize_key(key))
    }

    /// Check whether a key was released since the last tick.
    pub fn was_just_released(&self, key: &str) -> bool {
        self.just_released.contains(&normalize_key(key))
    }

    /// Mouse movement accumulated since the last tick.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_state() -> InputState {
        let mut input = InputState::new();
        input.on_lock_changed(true);
        input
    }

    #[test]
    fn events_ignored_while_unlocked() {
        let mut input = InputState::new();
        input.on_key_down("w");
        input.on_mouse_move(5.0, 5.0);
        assert!(!input.is_pressed("w"));
        assert!(!input.was_just_pressed("w"));
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn key_down_sets_pressed_and_edge() {
        let mut input = locked_state();
        input.on_key_down("W");
        assert!(input.is_pressed("w"));
        assert!(input.was_just_pressed("w"));
        assert!(!input.was_just_released("w"));
    }

    #[test]
    fn key_up_clears_pressed_and_sets_edge() {
        let mut input = locked_state();
        input.on_key_down("a");
        input.on_key_up("a");
        assert!(!input.is_pressed("a"));
        assert!(input.was_just_released("a"));
    }

    #[test]
    fn key_lookup_is_case_insensitive() {
        let mut input = locked_state();
        input.on_key_down("Shift");
        assert!(input.is_pressed("shift"));
        assert!(input.is_pressed("SHIFT"));
    }

    #[test]
    fn mouse_delta_accumulates() {
        let mut input = locked_state();
        input.on_mouse_move(3.0, -2.0);
        input.on_mouse_move(1.0, 1.0);
        assert_eq!(input.mouse_delta(), Vec2::new(4.0, -1.0));
    }

    #[test]
    fn end_tick_clears_accumulators() {
        let mut input = locked_state();
        input.on_key_down("w");
        input.on_key_up("s");
        input.on_mouse_move(10.0, 10.0);
        input.end_tick();
        assert!(!input.was_just_pressed("w"));
        assert!(!input.was_just_released("s"));
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
        // Held state survives the tick boundary.
        assert!(input.is_pressed("w"));
    }

    #[test]
    fn held_key_survives_lock_loss() {
        // Carried over from the original behavior: lock loss does not
        // auto-release held keys. The key stays pressed until its own key-up.
        let mut input = locked_state();
        input.on_key_down("w");
        input.on_lock_changed(false);
        assert!(input.is_pressed("w"));
        // And the key-up that arrives while unlocked is dropped too.
        input.on_key_up("w");
        assert!(input.is_pressed("w"));
    }

    #[test]
    fn apply_dispatches_events() {
        let mut input = InputState::new();
        input.apply(&InputEvent::LockChanged { locked: true });
        input.apply(&InputEvent::KeyDown("d".into()));
        input.apply(&InputEvent::MouseMove { dx: 2.0, dy: 0.0 });
        assert!(input.is_locked());
        assert!(input.is_pressed("d"));
        assert_eq!(input.mouse_delta(), Vec2::new(2.0, 0.0));
        input.apply(&InputEvent::KeyUp("d".into()));
        assert!(!input.is_pressed("d"));
    }
}
