//! Scene layer: nested-frame transform nodes and the projection boundary.
//!
//! Frames nest; they are never flattened into a single world matrix at this
//! layer. Each node's translation and rotation are relative to its immediate
//! parent, and the projection surface applies them primitive by primitive so
//! nesting order matches parent-to-child semantic order.
//!
//! # Invariants
//! - Node trees are immutable per-frame values; no node owns the camera.
//! - Surface parameters use the reverse-rotation convention (inverted
//!   quaternion, decomposed to axis-angle).
//! - The surface never mutates core state.

mod load;
mod node;
mod surface;

pub use load::{SceneError, load_scene, parse_scene};
pub use node::{SurfaceTransform, TransformNode, camera_frames};
pub use surface::{DebugTextSurface, ProjectionSurface, SurfaceView};

pub fn crate_info() -> &'static str {
    "framewalk-scene v0.1.0"
}
