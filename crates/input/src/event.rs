use serde::{Deserialize, Serialize};

/// A notification delivered by the hosting platform.
///
/// The host validates its own events; key identifiers are free-form strings
/// and mouse deltas are host-reported floats. Serializable so drivers can
/// script input sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Relative mouse movement while the pointer is captured.
    MouseMove { dx: f32, dy: f32 },
    /// Pointer-lock acquisition or loss.
    LockChanged { locked: bool },
}

/// Capability the hosting platform provides to the core.
///
/// The core never decides when to capture the pointer; the host triggers
/// `request_lock` (typically on a user click) and the outcome arrives later
/// as an `InputEvent::LockChanged`. A failed acquisition is invisible: no
/// event fires and input simply stays unlocked.
pub trait PointerLockHost {
    fn request_lock(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_round_trip_through_json() {
        let events = vec![
            InputEvent::LockChanged { locked: true },
            InputEvent::KeyDown("w".into()),
            InputEvent::MouseMove { dx: 4.0, dy: -1.5 },
            InputEvent::KeyUp("w".into()),
        ];
        let json = serde_json::to_string(&events).unwrap();
        let parsed: Vec<InputEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, events);
    }
}
