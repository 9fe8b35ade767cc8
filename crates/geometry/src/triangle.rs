//! Triangle with a normal derived at construction.

use std::fmt;

use glam::Vec3;

use crate::GeometryError;

/// Edges count as collinear when `|e1 x e2| <= DEGENERATE_EPSILON * |e1| * |e2|`,
/// i.e. the sine of the angle between them is at most this value.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Three vertices plus the unit normal `normalize((a - b) x (a - c))`.
///
/// The normal of a degenerate triangle is NaN-bearing. Such a triangle is
/// never hit by [`crate::Ray::intersect_triangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Vec3,
    b: Vec3,
    c: Vec3,
    normal: Vec3,
}

impl Triangle {
    /// Build a triangle without validating the vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (a - b).cross(a - c).normalize();
        Self { a, b, c, normal }
    }

    /// Build a triangle, rejecting collinear or coincident vertices.
    pub fn try_new(a: Vec3, b: Vec3, c: Vec3) -> Result<Self, GeometryError> {
        if is_degenerate(a, b, c) {
            return Err(GeometryError::DegenerateTriangle);
        }
        Ok(Self::new(a, b, c))
    }

    /// First vertex.
    pub fn a(&self) -> Vec3 {
        self.a
    }

    /// Second vertex.
    pub fn b(&self) -> Vec3 {
        self.b
    }

    /// Third vertex.
    pub fn c(&self) -> Vec3 {
        self.c
    }

    /// Unit normal (NaN-bearing for degenerate triangles).
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Vertices as an array in winding order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// True when the vertices do not span a plane.
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(self.a, self.b, self.c)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle(a: {}, b: {}, c: {}, normal: {})",
            self.a, self.b, self.c, self.normal
        )
    }
}

fn is_degenerate(a: Vec3, b: Vec3, c: Vec3) -> bool {
    let edge1 = b - a;
    let edge2 = c - a;
    let area = edge1.cross(edge2).length();
    let scale = edge1.length() * edge2.length();
    !area.is_finite() || area <= DEGENERATE_EPSILON * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_follows_winding() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(tri.normal(), Vec3::Z);

        let flipped = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert_eq!(flipped.normal(), -Vec3::Z);
    }

    #[test]
    fn normal_is_unit_length() {
        let tri = Triangle::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, 2.0),
            Vec3::new(0.0, 7.0, -1.0),
        );
        assert!((tri.normal().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let err = Triangle::try_new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateTriangle);

        let err = Triangle::try_new(Vec3::ONE, Vec3::ONE, Vec3::ONE).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateTriangle);
    }

    #[test]
    fn degeneracy_check_is_scale_independent() {
        let tiny = Triangle::try_new(Vec3::ZERO, Vec3::X * 1e-3, Vec3::Y * 1e-3);
        assert!(tiny.is_ok());
        let huge = Triangle::try_new(Vec3::ZERO, Vec3::X * 1e4, Vec3::Y * 1e4);
        assert!(huge.is_ok());

        let sliver = Triangle::try_new(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1e-8, 0.0));
        assert_eq!(sliver.unwrap_err(), GeometryError::DegenerateTriangle);
    }

    #[test]
    fn permissive_constructor_keeps_degenerate_triangles() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert!(tri.is_degenerate());
        assert!(!tri.normal().is_finite());
    }

    #[test]
    fn display_lists_vertices_and_normal() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        let text = tri.to_string();
        assert!(text.starts_with("Triangle(a: "));
        assert!(text.contains("normal: [0, 0, 1]"));
    }
}
