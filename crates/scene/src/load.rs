use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::node::TransformNode;

/// Errors from loading a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scene description: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a scene description: a JSON array of transform nodes.
pub fn parse_scene(json: &str) -> Result<Vec<TransformNode>, SceneError> {
    let nodes: Vec<TransformNode> = serde_json::from_str(json)?;
    Ok(nodes)
}

/// Load a scene description from a JSON file.
pub fn load_scene(path: &Path) -> Result<Vec<TransformNode>, SceneError> {
    let text = fs::read_to_string(path)?;
    let nodes = parse_scene(&text)?;
    tracing::debug!(
        path = %path.display(),
        nodes = nodes.iter().map(TransformNode::node_count).sum::<usize>(),
        "scene loaded"
    );
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn parse_minimal_scene() {
        let nodes = parse_scene(
            r#"[
                {"translation": [0.0, 0.0, 0.0]},
                {"translation": [100.0, 0.0, 0.0], "children": [{}]}
            ]"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].translation, Vec3::new(100.0, 0.0, 0.0));
        assert_eq!(nodes[1].children.len(), 1);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_scene("not json").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_scene(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
