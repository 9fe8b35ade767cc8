//! Mesh-bearing scene objects.

use glam::Vec3;
use meshpick_geometry::{triangles_from_buffers, validate_buffers, GeometryError, Triangle};

use crate::{Color, MeshProvider};

/// A named object with flat vertex/index buffers and a color.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    name: String,
    positions: Vec<f32>,
    indices: Vec<u32>,
    color: Color,
}

impl SceneObject {
    /// Create an object from raw buffers, rejecting malformed ones.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<f32>,
        indices: Vec<u32>,
        color: Color,
    ) -> Result<Self, GeometryError> {
        validate_buffers(&positions, &indices)?;
        Ok(Self {
            name: name.into(),
            positions,
            indices,
            color,
        })
    }

    /// Single-face object.
    pub fn triangle(name: impl Into<String>, a: Vec3, b: Vec3, c: Vec3, color: Color) -> Self {
        let mut positions = Vec::with_capacity(9);
        for v in [a, b, c] {
            positions.extend_from_slice(&v.to_array());
        }
        Self {
            name: name.into(),
            positions,
            indices: vec![0, 1, 2],
            color,
        }
    }

    /// Axis-aligned quad in the XY plane with its minimum corner at `origin`.
    ///
    /// Built from two faces sharing the `0-2` diagonal.
    pub fn rectangle(
        name: impl Into<String>,
        origin: Vec3,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<Self, GeometryError> {
        let valid = |side: f32| side.is_finite() && side > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GeometryError::DegenerateTriangle);
        }

        let corners = [
            origin,
            origin + Vec3::new(width, 0.0, 0.0),
            origin + Vec3::new(width, height, 0.0),
            origin + Vec3::new(0.0, height, 0.0),
        ];
        let positions = corners.iter().flat_map(|c| c.to_array()).collect();
        Self::new(name, positions, vec![0, 1, 2, 0, 2, 3], color)
    }

    /// Rectangle with equal sides.
    pub fn square(
        name: impl Into<String>,
        origin: Vec3,
        size: f32,
        color: Color,
    ) -> Result<Self, GeometryError> {
        Self::rectangle(name, origin, size, size, color)
    }

    /// Object name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flat `x, y, z` vertex positions.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat face indices, three per face.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Number of vertices in the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of faces in the index buffer.
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl MeshProvider for SceneObject {
    fn mesh(&self) -> Vec<Triangle> {
        triangles_from_buffers(&self.positions, &self.indices)
    }
}
