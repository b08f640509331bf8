pub mod annotation;
pub mod bounds;
pub mod camera;
pub mod collider;
pub mod config;
pub mod constants;
pub mod error;
pub mod gpu;
pub mod mesh;
pub mod orbit;
pub mod ray;
pub mod scene;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static MARKER_WGSL: &str = include_str!("../shaders/marker.wgsl");

pub use annotation::{
    update_annotations, AnchorPoint, AnnotationEngine, AnnotationSettings, Viewport,
};
pub use bounds::Aabb;
pub use camera::Camera;
pub use collider::{Collider, Hit, Hits, MeshCollider, Raycaster};
pub use config::ViewerConfig;
pub use error::ConfigError;
pub use mesh::{MeshData, Vertex};
pub use orbit::OrbitControls;
pub use ray::{Ray, Side};
pub use scene::{DrawItem, Scene, SceneNode};
