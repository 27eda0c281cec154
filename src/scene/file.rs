//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rasterizer::{RasterSettings, Texture, Triangle, HEIGHT, WIDTH};

/// Error type for scene loading
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Texture error: {0}")]
    Texture(#[from] image::ImageError),
}

/// Triangles to draw, in order, plus how to draw them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default)]
    pub settings: RasterSettings,
    /// Texture image, relative to the scene file
    #[serde(default)]
    pub texture: Option<PathBuf>,
    pub triangles: Vec<Triangle>,
}

fn default_width() -> usize {
    WIDTH
}

fn default_height() -> usize {
    HEIGHT
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            settings: RasterSettings::default(),
            texture: None,
            triangles: Vec::new(),
        }
    }
}

impl Scene {
    /// Load the scene's texture, resolving relative paths against `base_dir`
    pub fn load_texture(&self, base_dir: &Path) -> Result<Option<Texture>, SceneError> {
        let Some(path) = &self.texture else {
            return Ok(None);
        };
        let full = if path.is_absolute() {
            path.clone()
        } else {
            base_dir.join(path)
        };
        let tex = Texture::from_file(&full)?;
        log::info!("Loaded texture: {} ({}x{})", tex.name, tex.width, tex.height);
        Ok(Some(tex))
    }
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), SceneError> {
    fs::write(path, scene_to_string(scene)?)?;
    Ok(())
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<Scene, SceneError> {
    let scene: Scene = ron::from_str(s)?;
    Ok(scene)
}

pub fn scene_to_string(scene: &Scene) -> Result<String, SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    Ok(ron::ser::to_string_pretty(scene, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{create_test_quad, ShadingMode, Vec2, Vec3};

    #[test]
    fn test_parse_minimal_scene() {
        let src = r#"(
            triangles: [
                (
                    v1: (pos: (x: 0.0, y: 0.0, z: 0.0), color: (x: 1.0, y: 0.0, z: 0.0), uv: (x: 0.0, y: 0.0)),
                    v2: (pos: (x: 2.0, y: 0.0, z: 0.0), color: (x: 0.0, y: 1.0, z: 0.0), uv: (x: 1.0, y: 0.0)),
                    v3: (pos: (x: 0.0, y: 2.0, z: 0.0), color: (x: 0.0, y: 0.0, z: 1.0), uv: (x: 0.0, y: 1.0)),
                ),
            ],
        )"#;
        let scene = load_scene_from_str(src).expect("valid scene");
        assert_eq!(scene.width, WIDTH);
        assert_eq!(scene.height, HEIGHT);
        assert_eq!(scene.settings.shading, ShadingMode::UvDebug);
        assert_eq!(scene.texture, None);
        assert_eq!(scene.triangles.len(), 1);
        assert_eq!(scene.triangles[0].v2.uv, Vec2::new(1.0, 0.0));
        assert_eq!(scene.triangles[0].v3.color, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_settings_and_texture_fields() {
        let src = r#"(
            width: 64,
            height: 32,
            settings: (shading: Textured, clear_color: (x: 0.1, y: 0.2, z: 0.3)),
            texture: Some("bricks.png"),
            triangles: [],
        )"#;
        let scene = load_scene_from_str(src).expect("valid scene");
        assert_eq!((scene.width, scene.height), (64, 32));
        assert_eq!(scene.settings.shading, ShadingMode::Textured);
        assert_eq!(scene.texture, Some(PathBuf::from("bricks.png")));
    }

    #[test]
    fn test_string_round_trip() {
        let scene = Scene {
            width: 16,
            height: 16,
            triangles: create_test_quad(16.0),
            ..Default::default()
        };
        let text = scene_to_string(&scene).expect("serializes");
        assert_eq!(load_scene_from_str(&text).expect("parses"), scene);
    }

    #[test]
    fn test_bundled_scenes_parse() {
        let reference = load_scene_from_str(include_str!("../../assets/scenes/reference.ron"))
            .expect("reference scene");
        assert_eq!((reference.width, reference.height), (4, 4));
        assert_eq!(reference.triangles.len(), 1);

        let overlap = load_scene_from_str(include_str!("../../assets/scenes/overlap.ron"))
            .expect("overlap scene");
        assert_eq!(overlap.settings.shading, ShadingMode::VertexColor);
        assert_eq!(overlap.triangles.len(), 2);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = load_scene_from_str("(triangles: [ (v1: ) ])").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_missing_texture_file() {
        let scene = Scene {
            texture: Some(PathBuf::from("does/not/exist.png")),
            ..Default::default()
        };
        assert!(matches!(scene.load_texture(Path::new(".")), Err(SceneError::Texture(_))));
        assert!(Scene::default().load_texture(Path::new(".")).expect("no texture").is_none());
    }
}
