//! Camera description shared with the native frontend.
//!
//! Kept free of windowing types; the frontend builds its view-projection
//! uniform from these matrices and reports `distance_to` back to the
//! animator every frame.

use crate::constants::{CAMERA_EYE, CAMERA_FOV_DEG, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Euclidean distance from the eye to `point`.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.eye.distance(point)
    }

    /// Move the eye along the view direction. Positive `amount` moves closer.
    /// The eye-to-target distance stays within
    /// `[CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE]`.
    pub fn dolly(&mut self, amount: f32) {
        let offset = self.eye - self.target;
        let current = offset.length();
        if current <= f32::EPSILON {
            return;
        }
        let next = (current - amount).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        self.eye = self.target + offset * (next / current);
    }

    /// Unit vectors spanning the view plane, for camera-facing billboards.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
}
