//! Orbit camera and its GPU uniform block.

use glam::{Mat4, Vec3};

/// Default orbit distance from the target.
const DEFAULT_DISTANCE: f32 = 4.0;
/// Initial elevation angle, multiplied by pi.
const INITIAL_ELEVATION: f32 = -0.1;
/// Initial azimuth angle, multiplied by pi.
const INITIAL_AZIMUTH: f32 = 0.6;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    /// Eye offset slightly from the +Z axis along spherical coordinates,
    /// looking at the origin, so the initial view is more interesting
    /// than a straight-on shot.
    fn default() -> Self {
        let elevation = std::f32::consts::PI * INITIAL_ELEVATION;
        let azimuth = std::f32::consts::PI * INITIAL_AZIMUTH;
        let eye = Vec3::new(
            azimuth.cos() * elevation.cos(),
            elevation.sin(),
            azimuth.sin() * elevation.cos(),
        ) * DEFAULT_DISTANCE;
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 50.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Move the eye along the current view direction so it sits
    /// `distance` away from the target. The direction is preserved, so
    /// repeated recentering never drifts the framing.
    pub fn set_distance(&mut self, distance: f32) {
        let dir = (self.eye - self.target).normalize_or(Vec3::Z);
        self.eye = self.target + dir * distance.max(1e-3);
    }

    /// Wheel zoom: one scroll notch changes the distance by 1/16th.
    pub fn zoom_scroll(&mut self, wheel: f32) {
        self.set_distance(self.distance() * (1.0 - wheel / 16.0));
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata, consumed by the external render layer.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// New camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 50.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        let forward = (camera.target - camera.eye).normalize_or(Vec3::NEG_Z);
        self.forward = forward.to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_distance_preserves_direction() {
        let mut cam = Camera::default();
        let before = (cam.eye - cam.target).normalize();
        cam.set_distance(10.0);
        let after = (cam.eye - cam.target).normalize();
        assert!(before.dot(after) > 0.9999);
        assert!((cam.distance() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_scroll_scales_distance() {
        let mut cam = Camera::default();
        cam.set_distance(16.0);
        cam.zoom_scroll(1.0);
        assert!((cam.distance() - 15.0).abs() < 1e-3);
    }

    #[test]
    fn uniform_tracks_camera() {
        let mut cam = Camera::default();
        cam.set_distance(8.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&cam);
        assert_eq!(uniform.position, cam.eye.to_array());
        assert_eq!(uniform.fovy, 50.0);
    }
}
