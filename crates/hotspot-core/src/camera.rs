//! Perspective camera used for both rendering and hotspot projection.
//!
//! Matrices are right-handed with a `[0, 1]` depth range (wgpu convention).
//! The x/y normalized device coordinates match any other `[-1, 1]` convention,
//! which is all the hotspot math depends on.

use crate::ray::Ray;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn perspective(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    pub fn looking_at(mut self, eye: Vec3, target: Vec3) -> Self {
        self.eye = eye;
        self.target = target;
        self
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Keep the aspect ratio in step with the drawing surface. Degenerate
    /// sizes (minimised windows) leave the camera untouched.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World point to normalized device coordinates.
    #[inline]
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Distance in front of the camera along its viewing axis; negative
    /// behind it.
    #[inline]
    pub fn view_depth(&self, world: Vec3) -> f32 {
        -self.view_matrix().transform_point3(world).z
    }

    /// Ray from the eye through a point given in normalized device
    /// coordinates. The inverse is taken in f64; near/far ratios of 1000
    /// leave an f32 inverse too coarse for surface-level distance checks.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().as_dmat4().inverse();
        let p = inv.project_point3(ndc.as_dvec2().extend(0.5));
        let eye = self.eye.as_dvec3();
        Ray::new(self.eye, (p - eye).normalize_or_zero().as_vec3())
    }
}
