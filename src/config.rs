use anyhow::{bail, Result};
use glam::Vec3;
use meshpick_camera::Camera;
use meshpick_scene::{Color, Scene, SceneObject};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_VIEWER_PATH: &str = "config/viewer.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub camera: CameraConfig,
    pub objects: Vec<ObjectConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    pub shape: ShapeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeConfig {
    Triangle {
        vertices: [[f32; 3]; 3],
    },
    Rectangle {
        origin: [f32; 3],
        width: f32,
        height: f32,
    },
    Square {
        origin: [f32; 3],
        size: f32,
    },
    /// Raw buffers: three floats per vertex, three indices per face.
    Mesh {
        positions: Vec<f32>,
        indices: Vec<u32>,
    },
}

fn default_color() -> [f32; 4] {
    Color::WHITE.to_array()
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            objects: vec![
                ObjectConfig {
                    name: "backdrop".into(),
                    color: [0.3, 0.3, 0.35, 1.0],
                    shape: ShapeConfig::Rectangle {
                        origin: [-3.0, -2.0, -1.0],
                        width: 6.0,
                        height: 4.0,
                    },
                },
                ObjectConfig {
                    name: "marker".into(),
                    color: [1.0, 0.2, 0.2, 1.0],
                    shape: ShapeConfig::Triangle {
                        vertices: [[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]],
                    },
                },
                ObjectConfig {
                    name: "tile".into(),
                    color: [0.2, 0.6, 1.0, 1.0],
                    shape: ShapeConfig::Square {
                        origin: [1.0, 0.5, 0.5],
                        size: 0.75,
                    },
                },
            ],
        }
    }
}

impl ViewerConfig {
    /// Load viewer configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_VIEWER_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ViewerConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    ViewerConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_VIEWER_PATH) {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Viewer config not found at {}. Using defaults",
                        path.display()
                    );
                }
                ViewerConfig::default()
            }
        }
    }

    /// Save viewer configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Camera described by the config.
    pub fn camera(&self) -> Camera {
        let mut camera = Camera::look_at(
            Vec3::from_array(self.camera.position),
            Vec3::from_array(self.camera.target),
        );
        camera.fov = self.camera.fov_degrees.to_radians();
        camera.near = self.camera.near;
        camera.far = self.camera.far;
        camera
    }

    /// Build the scene, skipping objects whose geometry is invalid.
    pub fn build_scene(&self) -> Scene {
        let mut scene = Scene::new();
        for object in &self.objects {
            match object.build() {
                Ok(built) => scene.push(built),
                Err(err) => warn!(name = %object.name, "Skipping scene object: {err:#}"),
            }
        }
        scene
    }
}

impl ObjectConfig {
    fn build(&self) -> Result<SceneObject> {
        let color = Color::from(self.color);
        let object = match &self.shape {
            ShapeConfig::Triangle { vertices } => {
                let [a, b, c] = vertices.map(Vec3::from_array);
                SceneObject::triangle(self.name.as_str(), a, b, c, color)
            }
            ShapeConfig::Rectangle {
                origin,
                width,
                height,
            } => SceneObject::rectangle(
                self.name.as_str(),
                Vec3::from_array(*origin),
                *width,
                *height,
                color,
            )?,
            ShapeConfig::Square { origin, size } => {
                SceneObject::square(self.name.as_str(), Vec3::from_array(*origin), *size, color)?
            }
            ShapeConfig::Mesh { positions, indices } => {
                SceneObject::new(self.name.as_str(), positions.clone(), indices.clone(), color)?
            }
        };
        if object.face_count() == 0 {
            bail!("object has no faces");
        }
        Ok(object)
    }
}
