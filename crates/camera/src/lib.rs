#![warn(missing_docs)]
//! Perspective orbit camera for the scene viewer.

use glam::{Mat4, Vec3};

/// Closest the camera may zoom towards its target.
const MIN_DISTANCE: f32 = 0.01;

/// Look-at camera orbiting a target point.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up direction.
    pub up: Vec3,

    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_3, // 60 degrees
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Create a camera at `position` looking at `target`.
    pub fn look_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Default::default()
        }
    }

    /// Get the forward direction vector (where camera is looking).
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Distance from the camera to its target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Orbit around the target.
    ///
    /// # Arguments
    /// * `delta_yaw` - Rotation about the world Y axis in radians
    /// * `delta_pitch` - Elevation change in radians
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let yaw = offset.z.atan2(offset.x) + delta_yaw;
        let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin() + delta_pitch;

        // Stay off the poles so `up` never lines up with the view direction
        const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
        let pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.position = self.target
            + Vec3::new(
                yaw.cos() * pitch.cos(),
                pitch.sin(),
                yaw.sin() * pitch.cos(),
            ) * radius;
    }

    /// Scale the distance to the target (values below 1 move closer).
    pub fn zoom(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let offset = self.position - self.target;
        let distance = (offset.length() * factor).max(MIN_DISTANCE);
        self.position = self.target + offset.normalize_or_zero() * distance;
    }

    /// Update the aspect ratio (call when window resizes).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}
