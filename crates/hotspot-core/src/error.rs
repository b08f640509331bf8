use thiserror::Error;

/// Reasons a [`crate::config::ViewerConfig`] is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("anchor {index} has a non-finite position")]
    NonFiniteAnchor { index: usize },
    #[error("anchor {index} has an empty selector")]
    EmptySelector { index: usize },
    #[error("camera field of view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("camera clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("orbit distance range is empty: min={min} max={max}")]
    OrbitDistance { min: f32, max: f32 },
    #[error("damping factor must be within (0, 1], got {0}")]
    DampingFactor(f32),
    #[error("model scale must be positive on every axis")]
    ModelScale,
    #[error("floor size must be positive, got {0}x{1}")]
    FloorSize(f32, f32),
}
