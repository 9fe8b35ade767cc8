#![warn(missing_docs)]
//! Scene objects that expose a triangulated surface for picking.

mod object;
mod scene;

pub use object::SceneObject;
pub use scene::Scene;

use meshpick_geometry::Triangle;
use serde::{Deserialize, Serialize};

/// Anything that can hand out its surface as triangles.
///
/// Implementations rebuild the triangles on every call; nothing is cached
/// between queries.
pub trait MeshProvider {
    /// Triangulated surface in world space.
    fn mesh(&self) -> Vec<Triangle>;
}

impl<T: MeshProvider + ?Sized> MeshProvider for &T {
    fn mesh(&self) -> Vec<Triangle> {
        (**self).mesh()
    }
}

/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Color from all four components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Convert to array [r, g, b, a].
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
