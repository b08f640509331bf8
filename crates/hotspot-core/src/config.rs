//! Viewer configuration. `Default` reproduces the stock boulder scene.

use crate::annotation::{AnchorPoint, AnnotationSettings};
use crate::camera::Camera;
use crate::constants::*;
use crate::error::ConfigError;
use crate::orbit::OrbitControls;
use glam::{Vec2, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub directional_color: [f32; 3],
    pub directional_intensity: f32,
    pub directional_position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloorConfig {
    pub size: Vec2,
    pub color: [f32; 3],
}

/// Placement and generation parameters for the procedural boulder.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub position: Vec3,
    pub scale: Vec3,
    pub radius: f32,
    pub detail: u32,
    pub roughness: f32,
    pub seed: u64,
    pub color: [f32; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnchorConfig {
    pub position: Vec3,
    pub selector: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub lights: LightConfig,
    pub floor: FloorConfig,
    pub model: ModelConfig,
    pub anchors: Vec<AnchorConfig>,
    pub annotations: AnnotationSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                eye: Vec3::from(CAMERA_EYE),
                fov_degrees: CAMERA_FOV_DEGREES,
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            orbit: OrbitConfig {
                target: Vec3::from(ORBIT_TARGET),
                enable_damping: true,
                damping_factor: ORBIT_DAMPING_FACTOR,
                min_distance: ORBIT_MIN_DISTANCE,
                max_distance: ORBIT_MAX_DISTANCE,
            },
            lights: LightConfig {
                ambient_color: AMBIENT_COLOR,
                ambient_intensity: AMBIENT_INTENSITY,
                directional_color: DIRECTIONAL_COLOR,
                directional_intensity: DIRECTIONAL_INTENSITY,
                directional_position: Vec3::from(DIRECTIONAL_POSITION),
            },
            floor: FloorConfig {
                size: Vec2::from(FLOOR_SIZE),
                color: FLOOR_COLOR,
            },
            model: ModelConfig {
                position: Vec3::from(MODEL_POSITION),
                scale: Vec3::splat(MODEL_SCALE),
                radius: MODEL_RADIUS,
                detail: MODEL_DETAIL,
                roughness: MODEL_ROUGHNESS,
                seed: MODEL_SEED,
                color: MODEL_COLOR,
            },
            anchors: DEFAULT_ANCHORS
                .iter()
                .map(|(p, sel)| AnchorConfig {
                    position: Vec3::from(*p),
                    selector: (*sel).to_string(),
                })
                .collect(),
            annotations: AnnotationSettings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(cam.fov_degrees));
        }
        if !(cam.znear > 0.0 && cam.znear < cam.zfar) {
            return Err(ConfigError::ClipPlanes {
                near: cam.znear,
                far: cam.zfar,
            });
        }

        let orbit = &self.orbit;
        if !(orbit.min_distance >= 0.0 && orbit.min_distance <= orbit.max_distance) {
            return Err(ConfigError::OrbitDistance {
                min: orbit.min_distance,
                max: orbit.max_distance,
            });
        }
        if orbit.enable_damping && !(orbit.damping_factor > 0.0 && orbit.damping_factor <= 1.0) {
            return Err(ConfigError::DampingFactor(orbit.damping_factor));
        }

        if !(self.floor.size.x > 0.0 && self.floor.size.y > 0.0) {
            return Err(ConfigError::FloorSize(self.floor.size.x, self.floor.size.y));
        }
        if !self.model.scale.cmpgt(Vec3::ZERO).all() {
            return Err(ConfigError::ModelScale);
        }

        for (index, a) in self.anchors.iter().enumerate() {
            if !a.position.is_finite() {
                return Err(ConfigError::NonFiniteAnchor { index });
            }
            if a.selector.trim().is_empty() {
                return Err(ConfigError::EmptySelector { index });
            }
        }
        Ok(())
    }

    /// Camera for a surface of the given size.
    pub fn build_camera(&self, width: f32, height: f32) -> Camera {
        let c = &self.camera;
        let mut camera = Camera::perspective(c.fov_degrees, 1.0, c.znear, c.zfar)
            .looking_at(c.eye, self.orbit.target);
        camera.set_aspect(width, height);
        camera
    }

    pub fn build_orbit(&self) -> OrbitControls {
        let o = &self.orbit;
        let mut controls = OrbitControls::new(o.target);
        controls.enable_damping = o.enable_damping;
        controls.damping_factor = o.damping_factor;
        controls.min_distance = o.min_distance;
        controls.max_distance = o.max_distance;
        controls
    }

    pub fn anchor_points(&self) -> Vec<AnchorPoint> {
        self.anchors
            .iter()
            .map(|a| AnchorPoint::new(a.position, Some(a.selector.clone())))
            .collect()
    }
}
