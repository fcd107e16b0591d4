use framewalk_common::{AxisAngle, CameraPose, Viewport};
use glam::Vec3;

use crate::node::TransformNode;

/// Everything the projection surface needs for one presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceView {
    /// Eye distance of the perspective projection, in pixels.
    pub perspective: f32,
    /// Camera position in world units.
    pub position: Vec3,
    /// Camera orientation in the surface's axis-angle convention.
    pub orientation: AxisAngle,
    pub viewport: Viewport,
}

impl SurfaceView {
    pub fn new(perspective: f32, pose: &CameraPose, viewport: Viewport) -> Self {
        Self {
            perspective,
            position: pose.position,
            orientation: AxisAngle::from_quat(pose.orientation),
            viewport,
        }
    }
}

/// The outbound boundary of the core: consumes a camera view and a tree of
/// node poses, produces visuals. No return value flows back into the core,
/// and implementations never mutate core state.
pub trait ProjectionSurface {
    type Output;

    fn present(&self, view: &SurfaceView, root: &TransformNode) -> Self::Output;
}

/// Text-dump surface standing in for a real visual backend.
///
/// Produces a human-readable rendition of the view and frame tree. Useful
/// for CLI output, logging, and exercising the surface boundary in tests.
#[derive(Debug, Default)]
pub struct DebugTextSurface;

impl DebugTextSurface {
    pub fn new() -> Self {
        Self
    }

    fn write_node(out: &mut String, node: &TransformNode, depth: usize) {
        let st = node.surface_transform();
        let indent = "  ".repeat(depth + 1);
        out.push_str(&format!(
            "{}frame t=({:.1}, {:.1}, {:.1}) rot={:.3}rad@({:.2}, {:.2}, {:.2})\n",
            indent,
            st.translation.x,
            st.translation.y,
            st.translation.z,
            st.rotation.angle,
            st.rotation.axis.x,
            st.rotation.axis.y,
            st.rotation.axis.z,
        ));
        for child in &node.children {
            Self::write_node(out, child, depth + 1);
        }
    }
}

impl ProjectionSurface for DebugTextSurface {
    type Output = String;

    fn present(&self, view: &SurfaceView, root: &TransformNode) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Surface {}x{} perspective={} ===\n",
            view.viewport.width, view.viewport.height, view.perspective
        ));
        out.push_str(&format!(
            "camera: pos=({:.1}, {:.1}, {:.1}) look={:.3}rad@({:.2}, {:.2}, {:.2})\n",
            view.position.x,
            view.position.y,
            view.position.z,
            view.orientation.angle,
            view.orientation.axis.x,
            view.orientation.axis.y,
            view.orientation.axis.z,
        ));
        Self::write_node(&mut out, root, 0);
        out
    }
}
