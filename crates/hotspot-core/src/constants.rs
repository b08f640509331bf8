// Default scene, camera and interaction values shared by the web and native frontends.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [2.0, 2.0, 2.0];

// Orbit controls
pub const ORBIT_TARGET: [f32; 3] = [0.0, 0.75, 0.0];
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6; // keeps the eye off the poles
pub const WHEEL_ZOOM_BASE: f32 = 0.95; // radius factor per wheel step

// Floor
pub const FLOOR_SIZE: [f32; 2] = [10.0, 10.0];
pub const FLOOR_COLOR: [f32; 3] = [0.267, 0.267, 0.267]; // #444444

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const DIRECTIONAL_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Model (boulder); authored in centimetres and scaled into metres
pub const MODEL_POSITION: [f32; 3] = [0.0, 1.0, 0.0];
pub const MODEL_SCALE: f32 = 0.01;
pub const MODEL_RADIUS: f32 = 100.0;
pub const MODEL_DETAIL: u32 = 3;
pub const MODEL_ROUGHNESS: f32 = 0.18;
pub const MODEL_SEED: u64 = 42;
pub const MODEL_COLOR: [f32; 3] = [0.55, 0.5, 0.45];

// Hotspots: world position and the marker element each one drives
pub const DEFAULT_ANCHORS: [([f32; 3], &str); 2] = [
    ([1.55, 0.3, 0.76], ".point-0"),
    ([1.55, 0.6, 0.76], ".point-1"),
];

// Relative slack on hit-versus-anchor distance; closer hits inside it are the anchor's own surface
pub const OCCLUSION_TOLERANCE: f32 = 1e-4;
