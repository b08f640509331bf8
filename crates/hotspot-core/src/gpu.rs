//! Uniform and instance layouts shared by the WGSL in `shaders/`.
//!
//! Kept free of any wgpu types so both frontends (and host tests) can use them.

use crate::annotation::{AnchorPoint, Viewport};
use crate::camera::Camera;
use crate::scene::{DrawItem, Scene};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneGlobals {
    pub view_proj: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
    pub light_color: [f32; 4],
    pub ambient: [f32; 4],
}

impl SceneGlobals {
    pub fn new(camera: &Camera, scene: &Scene) -> Self {
        let d = &scene.directional;
        let a = &scene.ambient;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            light_dir: d.direction().extend(0.0).to_array(),
            light_color: scaled_rgba(d.color, d.intensity),
            ambient: scaled_rgba(a.color, a.intensity),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    pub world: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl DrawUniforms {
    pub fn new(item: &DrawItem) -> Self {
        let [r, g, b] = item.material.color;
        Self {
            world: item.world.to_cols_array_2d(),
            normal_matrix: item.world.inverse().transpose().to_cols_array_2d(),
            color: [r, g, b, 1.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerGlobals {
    pub viewport: [f32; 2],
    pub radius_px: f32,
    pub _pad: f32,
}

/// One hotspot quad, positioned by its pixel offset from the viewport centre.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub offset: [f32; 2],
    pub color: [f32; 4],
}

/// Instances for the anchors that should currently be drawn. Unlabelled
/// anchors have nothing to present and are skipped.
pub fn marker_instances(anchors: &[AnchorPoint], color: [f32; 4]) -> Vec<MarkerInstance> {
    anchors
        .iter()
        .filter(|a| a.visible && a.label().is_some())
        .map(|a| MarkerInstance {
            offset: a.screen_offset.to_array(),
            color,
        })
        .collect()
}

pub fn marker_globals(viewport: Viewport, radius_px: f32) -> MarkerGlobals {
    MarkerGlobals {
        viewport: [viewport.width, viewport.height],
        radius_px,
        _pad: 0.0,
    }
}

#[inline]
fn scaled_rgba(rgb: [f32; 3], intensity: f32) -> [f32; 4] {
    [rgb[0] * intensity, rgb[1] * intensity, rgb[2] * intensity, 1.0]
}
