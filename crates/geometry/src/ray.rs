//! Ray representation and ray-triangle intersection.

use glam::Vec3;

use crate::Triangle;

/// A half-line `origin + t * direction`.
///
/// `direction` is expected to be unit length but this is never enforced;
/// normalize it before relying on distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vec3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`. Negative `t` lies behind the origin.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with a triangle from either face.
    ///
    /// Returns the hit point, or `None` when the ray is parallel to the
    /// triangle's plane, passes outside its edges, or would only meet it
    /// behind the origin. Edge and vertex grazes count as hits.
    pub fn intersect_triangle(&self, triangle: &Triangle) -> Option<Vec3> {
        self.intersect_triangle_distance(triangle).map(|t| self.at(t))
    }

    /// Same test as [`Ray::intersect_triangle`], returning the ray parameter
    /// of the hit instead of the point.
    pub fn intersect_triangle_distance(&self, triangle: &Triangle) -> Option<f32> {
        let edge1 = triangle.b() - triangle.a();
        let edge2 = triangle.c() - triangle.a();
        // Unnormalized, so the sub-determinants below share its scale.
        // Points the same way as the triangle's unit normal.
        let normal = edge1.cross(edge2);

        let mut d_dot_n = self.direction.dot(normal);
        // Zero for degenerate triangles.
        if d_dot_n == 0.0 || !d_dot_n.is_finite() {
            return None;
        }

        // Fold the facing into `sign` so the tests below accept both faces.
        let sign = if d_dot_n > 0.0 { 1.0 } else { -1.0 };
        d_dot_n = d_dot_n.abs();

        let diff = self.origin - triangle.a();

        let d_dot_q_x_e2 = sign * self.direction.dot(diff.cross(edge2));
        if d_dot_q_x_e2 < 0.0 {
            return None;
        }

        let d_dot_e1_x_q = sign * self.direction.dot(edge1.cross(diff));
        if d_dot_e1_x_q < 0.0 {
            return None;
        }

        if d_dot_q_x_e2 + d_dot_e1_x_q > d_dot_n {
            return None;
        }

        let q_dot_n = -sign * diff.dot(normal);
        if q_dot_n < 0.0 {
            return None;
        }

        Some(q_dot_n / d_dot_n)
    }
}
