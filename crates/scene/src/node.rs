use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use framewalk_common::{AxisAngle, CameraPose, Viewport};

fn identity_quat() -> Quat {
    Quat::IDENTITY
}

/// A node in the nested-frame scene tree.
///
/// Translation and rotation are relative to the immediate parent's frame.
/// Child order is visual only; siblings carry no semantic dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformNode {
    #[serde(default)]
    pub translation: Vec3,
    #[serde(default = "identity_quat")]
    pub rotation: Quat,
    /// Pivot offset the surface rotates the primitive around.
    #[serde(default)]
    pub origin_offset: Vec3,
    #[serde(default)]
    pub children: Vec<TransformNode>,
}

impl Default for TransformNode {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            origin_offset: Vec3::ZERO,
            children: Vec::new(),
        }
    }
}

impl TransformNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_origin_offset(mut self, origin_offset: Vec3) -> Self {
        self.origin_offset = origin_offset;
        self
    }

    pub fn with_child(mut self, child: TransformNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<TransformNode>) -> Self {
        self.children = children;
        self
    }

    /// Convert this node's pose into the primitive the projection surface
    /// consumes: the translation plus the *reverse* rotation as axis-angle.
    ///
    /// The surface's rotation convention is inverted relative to the node's,
    /// so the quaternion is inverted before decomposition. The zero-angle
    /// case falls back to the +X axis (see [`AxisAngle::from_quat`]).
    pub fn surface_transform(&self) -> SurfaceTransform {
        SurfaceTransform {
            translation: self.translation,
            rotation: AxisAngle::from_quat(self.rotation.inverse()),
            origin_offset: self.origin_offset,
        }
    }

    /// Total number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TransformNode::node_count).sum::<usize>()
    }
}

/// Per-node parameters handed to the projection surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTransform {
    pub translation: Vec3,
    pub rotation: AxisAngle,
    pub origin_offset: Vec3,
}

/// Build the two root frames that anchor scene content to the camera.
///
/// Frame 0 translates to the viewport center and pushes the scene to the
/// configured eye distance; frame 1 (its child) applies camera-position
/// parallax with the negated position. Content nodes become frame 1's
/// children.
///
/// The camera's *orientation* is deliberately absent from this chain: in the
/// composition this reproduces, look direction never reorients content, it
/// only steers yaw-relative movement. The orientation still reaches the
/// surface separately via [`crate::SurfaceView`].
pub fn camera_frames(
    pose: &CameraPose,
    viewport: Viewport,
    perspective: f32,
    content: Vec<TransformNode>,
) -> TransformNode {
    let (cx, cy) = viewport.center();
    TransformNode::new()
        .with_translation(Vec3::new(cx, cy, perspective))
        .with_child(
            TransformNode::new()
                .with_translation(-pose.position)
                .with_children(content),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn default_node_is_identity() {
        let node = TransformNode::default();
        assert_eq!(node.translation, Vec3::ZERO);
        assert_eq!(node.rotation, Quat::IDENTITY);
        assert!(node.children.is_empty());
    }

    #[test]
    fn surface_transform_identity_rotation() {
        let node = TransformNode::new().with_translation(Vec3::new(1.0, 2.0, 3.0));
        let st = node.surface_transform();
        assert_eq!(st.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(st.rotation.angle, 0.0);
        // Degenerate axis defaults to +X.
        assert_eq!(st.rotation.axis, Vec3::X);
    }

    #[test]
    fn surface_transform_reverses_rotation() {
        // A node rotated +PI/2 about Y hands the surface the inverse:
        // the same angle about -Y.
        let node = TransformNode::new().with_rotation(Quat::from_axis_angle(Vec3::Y, FRAC_PI_2));
        let st = node.surface_transform();
        assert!((st.rotation.angle - FRAC_PI_2).abs() < EPSILON);
        assert!((st.rotation.axis - Vec3::NEG_Y).length() < EPSILON);
    }

    #[test]
    fn surface_transform_passes_origin_offset() {
        let node = TransformNode::new().with_origin_offset(Vec3::new(50.0, 50.0, 0.0));
        assert_eq!(
            node.surface_transform().origin_offset,
            Vec3::new(50.0, 50.0, 0.0)
        );
    }

    #[test]
    fn camera_frames_compose_center_and_parallax() {
        let pose = CameraPose {
            position: Vec3::new(10.0, -20.0, 300.0),
            orientation: Quat::from_rotation_y(1.0),
        };
        let content = vec![TransformNode::new().with_translation(Vec3::new(100.0, 0.0, 0.0))];
        let root = camera_frames(&pose, Viewport::new(800.0, 600.0), 500.0, content);

        // Frame 0: viewport center + eye distance, identity rotation.
        assert_eq!(root.translation, Vec3::new(400.0, 300.0, 500.0));
        assert_eq!(root.rotation, Quat::IDENTITY);
        assert_eq!(root.children.len(), 1);

        // Frame 1: negated camera position, identity rotation.
        let parallax = &root.children[0];
        assert_eq!(parallax.translation, Vec3::new(-10.0, 20.0, -300.0));
        assert_eq!(parallax.rotation, Quat::IDENTITY);

        // Content hangs off frame 1.
        assert_eq!(parallax.children.len(), 1);
        assert_eq!(
            parallax.children[0].translation,
            Vec3::new(100.0, 0.0, 0.0)
        );
    }

    #[test]
    fn camera_frames_exclude_orientation() {
        // Pins the reproduced behavior: the camera's look direction is not
        // part of the frame chain, no matter the orientation.
        let pose = CameraPose {
            position: Vec3::ZERO,
            orientation: Quat::from_rotation_y(1.2),
        };
        let root = camera_frames(&pose, Viewport::new(100.0, 100.0), 500.0, Vec::new());
        assert_eq!(root.rotation, Quat::IDENTITY);
        assert_eq!(root.children[0].rotation, Quat::IDENTITY);
    }

    #[test]
    fn node_count_walks_subtrees() {
        let tree = TransformNode::new()
            .with_child(TransformNode::new().with_child(TransformNode::new()))
            .with_child(TransformNode::new());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn nodes_round_trip_through_json() {
        let tree = TransformNode::new()
            .with_translation(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Quat::from_rotation_x(FRAC_PI_2))
            .with_child(TransformNode::new().with_translation(Vec3::X));
        let json = serde_json::to_string(&tree).unwrap();
        let parsed: TransformNode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn missing_fields_default_in_json() {
        let node: TransformNode = serde_json::from_str(r#"{"translation":[5.0,0.0,0.0]}"#).unwrap();
        assert_eq!(node.translation, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(node.rotation, Quat::IDENTITY);
        assert!(node.children.is_empty());
    }
}
