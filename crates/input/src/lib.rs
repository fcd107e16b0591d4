//! Input tracking: raw key/mouse activity gated by pointer lock.
//!
//! # Invariants
//! - Edge sets and the mouse delta are empty/zero immediately after
//!   `end_tick` and stay so until the next host event arrives.
//! - While unlocked, incoming key/mouse events mutate nothing.
//! - Each press/release edge is visible to exactly one simulation tick.

mod event;
mod state;

pub use event::{InputEvent, PointerLockHost};
pub use state::{InputState, normalize_key};

pub fn crate_info() -> &'static str {
    "framewalk-input v0.1.0"
}
