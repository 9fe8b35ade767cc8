//! Raycaster - Derive picking rays from camera state and test scene objects

use glam::{Mat4, Vec2, Vec3};
use meshpick_geometry::Ray;
use meshpick_scene::MeshProvider;

/// NDC depth used when unprojecting the picking point.
const UNPROJECT_DEPTH: f32 = 0.5;

/// Picking utility owning a single ray.
///
/// `near` and `far` are carried for callers but are not applied by
/// [`Raycaster::intersects_objects`].
#[derive(Debug, Clone, PartialEq)]
pub struct Raycaster {
    /// Origin the raycaster was constructed with.
    pub origin: Vec3,
    /// Near distance (advisory).
    pub near: f32,
    /// Far distance (advisory).
    pub far: f32,
    ray: Ray,
}

impl Raycaster {
    /// Create a raycaster casting from `origin` along `direction`.
    ///
    /// `direction` is used as given; normalize it first if distances matter.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            near: 0.0,
            far: 0.0,
            ray: Ray::new(origin, direction),
        }
    }

    /// Set the advisory near/far distances.
    pub fn with_range(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Current picking ray.
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Aim the ray from a perspective camera through `coords` (NDC, -1 to 1).
    ///
    /// The ray starts at the camera position and passes through the point at
    /// mid depth under `coords`. Orthographic projections are not supported and
    /// coordinates outside [-1, 1] are not rejected.
    pub fn set_from_camera(&mut self, coords: Vec2, view_matrix: &Mat4, projection_matrix: &Mat4) {
        // Camera position is the translation of the camera-to-world transform
        let camera_position = view_matrix.inverse().transform_point3(Vec3::ZERO);

        let inverse_view_projection = (*projection_matrix * *view_matrix).inverse();
        let unprojected =
            inverse_view_projection.project_point3(Vec3::new(coords.x, coords.y, UNPROJECT_DEPTH));

        self.ray.origin = camera_position;
        self.ray.direction = (unprojected - camera_position).normalize();

        tracing::trace!(
            ndc = ?coords,
            origin = ?self.ray.origin,
            direction = ?self.ray.direction,
            "picking ray updated"
        );
    }

    /// Objects with at least one mesh triangle on the ray, in input order.
    pub fn intersects_objects<'a, T: MeshProvider>(&self, objects: &'a [T]) -> Vec<&'a T> {
        let hits: Vec<&T> = objects.iter().filter(|object| self.is_hit(*object)).collect();
        tracing::debug!(candidates = objects.len(), hits = hits.len(), "raycast finished");
        hits
    }

    /// Positions in `objects` of the objects [`Raycaster::intersects_objects`] returns.
    pub fn intersects_indices<T: MeshProvider>(&self, objects: &[T]) -> Vec<usize> {
        objects
            .iter()
            .enumerate()
            .filter(|(_, object)| self.is_hit(*object))
            .map(|(index, _)| index)
            .collect()
    }

    fn is_hit<T: MeshProvider>(&self, object: &T) -> bool {
        object
            .mesh()
            .iter()
            .any(|triangle| self.ray.intersect_triangle(triangle).is_some())
    }
}

/// Convert pixel coordinates (origin top-left) to normalized device coordinates.
///
/// A zero-sized screen maps every position to the centre.
pub fn screen_to_ndc(screen_pos: (f32, f32), screen_size: (u32, u32)) -> Vec2 {
    if screen_size.0 == 0 || screen_size.1 == 0 {
        return Vec2::ZERO;
    }
    let x = (2.0 * screen_pos.0) / screen_size.0 as f32 - 1.0;
    let y = 1.0 - (2.0 * screen_pos.1) / screen_size.1 as f32; // Flip Y
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshpick_geometry::Triangle;

    struct Mesh(Vec<Triangle>);

    impl MeshProvider for Mesh {
        fn mesh(&self) -> Vec<Triangle> {
            self.0.clone()
        }
    }

    fn unit_triangle_at(z: f32) -> Mesh {
        Mesh(vec![Triangle::new(
            Vec3::new(0.0, 0.0, z),
            Vec3::new(1.0, 0.0, z),
            Vec3::new(0.0, 1.0, z),
        )])
    }

    #[test]
    fn constructor_keeps_direction_as_given() {
        let raycaster = Raycaster::new(Vec3::ONE, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(raycaster.ray().direction, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(raycaster.ray().origin, Vec3::ONE);
        assert_eq!((raycaster.near, raycaster.far), (0.0, 0.0));

        let ranged = raycaster.with_range(0.5, 10.0);
        assert_eq!((ranged.near, ranged.far), (0.5, 10.0));
    }

    #[test]
    fn empty_input_yields_no_hits() {
        let raycaster = Raycaster::new(Vec3::Z, -Vec3::Z);
        let objects: Vec<Mesh> = Vec::new();
        assert!(raycaster.intersects_objects(&objects).is_empty());
    }

    #[test]
    fn meshless_objects_never_hit() {
        let raycaster = Raycaster::new(Vec3::new(0.2, 0.2, 1.0), -Vec3::Z);
        let objects = vec![Mesh(Vec::new())];
        assert!(raycaster.intersects_objects(&objects).is_empty());
    }

    #[test]
    fn filter_is_stable() {
        let raycaster = Raycaster::new(Vec3::new(0.2, 0.2, 10.0), -Vec3::Z);
        let missed = Mesh(vec![Triangle::new(
            Vec3::new(5.0, 5.0, 0.0),
            Vec3::new(6.0, 5.0, 0.0),
            Vec3::new(5.0, 6.0, 0.0),
        )]);
        let objects = vec![unit_triangle_at(3.0), missed, unit_triangle_at(-3.0)];

        let hits = raycaster.intersects_objects(&objects);
        assert_eq!(hits.len(), 2);
        assert!(std::ptr::eq(hits[0], &objects[0]));
        assert!(std::ptr::eq(hits[1], &objects[2]));
        assert_eq!(raycaster.intersects_indices(&objects), vec![0, 2]);
    }

    #[test]
    fn near_and_far_are_not_applied() {
        let raycaster =
            Raycaster::new(Vec3::new(0.2, 0.2, 10.0), -Vec3::Z).with_range(0.0, 1.0);
        let objects = vec![unit_triangle_at(0.0)];
        assert_eq!(raycaster.intersects_objects(&objects).len(), 1);
    }

    #[test]
    fn screen_center_maps_to_ndc_origin() {
        let ndc = screen_to_ndc((400.0, 300.0), (800, 600));
        assert_eq!(ndc, Vec2::ZERO);

        let top_left = screen_to_ndc((0.0, 0.0), (800, 600));
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));

        assert_eq!(screen_to_ndc((10.0, 10.0), (0, 600)), Vec2::ZERO);
    }

    #[test]
    fn identity_camera_looks_down_negative_z() {
        let mut raycaster = Raycaster::new(Vec3::ZERO, Vec3::Z);
        let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        raycaster.set_from_camera(Vec2::ZERO, &Mat4::IDENTITY, &projection);

        let ray = raycaster.ray();
        assert!(ray.origin.length() < 1e-6);
        assert!(ray.direction.distance(-Vec3::Z) < 1e-5);
        // Construction-time origin is left untouched
        assert_eq!(raycaster.origin, Vec3::ZERO);
    }
}
