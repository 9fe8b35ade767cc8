//! Canonical geometry, scenes, and cameras shared by picking tests.

use glam::Vec3;
use meshpick_camera::Camera;
use meshpick_geometry::Triangle;
use meshpick_scene::{Color, SceneObject};

/// Triangle `(0,0,0) (1,0,0) (0,1,0)` with normal `+Z`.
pub fn unit_triangle() -> Triangle {
    Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)
}

/// Scene object wrapping [`unit_triangle`].
pub fn unit_triangle_object(name: &str) -> SceneObject {
    SceneObject::triangle(name, Vec3::ZERO, Vec3::X, Vec3::Y, Color::WHITE)
}

/// Unit square in the XY plane centred on `(center.x, center.y)` at depth `center.z`.
pub fn centered_square(name: &str, center: Vec3) -> SceneObject {
    let origin = center - Vec3::new(0.5, 0.5, 0.0);
    SceneObject::square(name, origin, 1.0, Color::WHITE)
        .unwrap_or_else(|err| panic!("fixture square {name} is invalid: {err}"))
}

/// Square camera five units up `+Z` looking at the origin.
pub fn front_camera() -> Camera {
    let mut camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    camera.aspect = 1.0;
    camera
}
