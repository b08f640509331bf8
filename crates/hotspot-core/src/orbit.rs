use crate::camera::Camera;
use crate::constants::{ORBIT_POLAR_EPSILON, WHEEL_ZOOM_BASE};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Spherical coordinates around the orbit target. `phi` is measured from +Y,
/// `theta` around +Y starting at +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Spherical {
    radius: f32,
    phi: f32,
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(
            s * self.theta.sin(),
            self.phi.cos() * self.radius,
            s * self.theta.cos(),
        )
    }
}

/// Orbit the camera around a target with optional inertial damping.
///
/// Input methods only accumulate deltas; [`OrbitControls::update`] applies
/// them once per frame and must be called every frame for damping to settle.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    delta: Spherical,
    scale: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            delta: Spherical::default(),
            scale: 1.0,
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    /// Pointer drag in pixels. A drag across the full viewport height turns
    /// the camera by one full revolution.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.rotate_speed);
        self.rotate_up(TAU * dy / h * self.rotate_speed);
    }

    /// Wheel input; negative `delta_y` moves towards the target.
    pub fn dolly(&mut self, delta_y: f32) {
        let step = WHEEL_ZOOM_BASE.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.scale *= step;
        } else if delta_y > 0.0 {
            self.scale /= step;
        }
    }

    /// Whether accumulated input is still being applied.
    pub fn is_settling(&self) -> bool {
        self.delta.theta.abs() > 1e-5 || self.delta.phi.abs() > 1e-5 || self.scale != 1.0
    }

    /// Apply pending rotation/zoom to `camera`. Returns `true` when the eye
    /// moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = camera.eye;
        let mut s = Spherical::from_offset(camera.eye - self.target);

        let k = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        s.theta += self.delta.theta * k;
        s.phi += self.delta.phi * k;

        s.phi = s
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        s.radius = (s.radius * self.scale).clamp(self.min_distance, self.max_distance);

        camera.eye = self.target + s.to_offset();
        camera.target = self.target;

        if self.enable_damping {
            self.delta.theta *= 1.0 - self.damping_factor;
            self.delta.phi *= 1.0 - self.damping_factor;
        } else {
            self.delta = Spherical::default();
        }
        self.scale = 1.0;

        camera.eye.distance_squared(before) > 1e-12
    }
}
