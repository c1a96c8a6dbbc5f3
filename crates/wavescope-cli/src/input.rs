//! Scene file loading.

use std::path::Path;

use anyhow::{Context, Result};

use wavescope_spec::Scene;

/// Loads a scene from a JSON file.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file: {}", path.display()))?;
    let scene = Scene::from_json(&json)
        .with_context(|| format!("failed to parse scene file: {}", path.display()))?;
    Ok(scene)
}
