//! Hotspot annotations: screen placement and line-of-sight visibility.
//!
//! Every frame each [`AnchorPoint`] is projected through the current camera
//! to a pixel offset from the viewport centre, and a ray from the eye through
//! the anchor is tested against the scene. The anchor is hidden when the
//! nearest hit lies strictly closer to the eye than the anchor itself.

use crate::camera::Camera;
use crate::collider::{Collider, Raycaster};
use crate::constants::OCCLUSION_TOLERANCE;
use glam::{Vec2, Vec3};

/// Presentation surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A fixed world location with a screen-space marker.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorPoint {
    position: Vec3,
    label: Option<String>,
    pub visible: bool,
    pub screen_offset: Vec2,
    pub behind_camera: bool,
}

impl AnchorPoint {
    pub fn new(position: Vec3, label: Option<String>) -> Self {
        Self {
            position,
            label,
            visible: false,
            screen_offset: Vec2::ZERO,
            behind_camera: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// External display element this anchor drives, if any.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationSettings {
    /// Force anchors behind the eye to be hidden instead of trusting the
    /// mirrored projection.
    pub cull_behind_camera: bool,
    pub raycaster: Raycaster,
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            cull_behind_camera: true,
            raycaster: Raycaster::default(),
        }
    }
}

/// Pixel offset from the viewport centre; screen y grows downward.
#[inline]
pub fn ndc_to_screen_offset(ndc: Vec3, viewport: Viewport) -> Vec2 {
    Vec2::new(
        ndc.x * viewport.width * 0.5,
        -ndc.y * viewport.height * 0.5,
    )
}

/// Occluded only when something sits strictly between eye and anchor.
/// Hits within [`OCCLUSION_TOLERANCE`] of the anchor distance count as the
/// anchor's own surface.
#[inline]
pub fn is_occluded(nearest_hit: Option<f32>, anchor_distance: f32) -> bool {
    matches!(nearest_hit, Some(d) if d < anchor_distance * (1.0 - OCCLUSION_TOLERANCE))
}

#[derive(Clone, Debug, Default)]
pub struct AnnotationEngine {
    pub settings: AnnotationSettings,
}

impl AnnotationEngine {
    pub fn new(settings: AnnotationSettings) -> Self {
        Self { settings }
    }

    /// Recompute `screen_offset` and `visible` for every anchor.
    ///
    /// Returns how many anchors changed visibility.
    pub fn update(
        &self,
        camera: &Camera,
        anchors: &mut [AnchorPoint],
        colliders: &[&dyn Collider],
        viewport: Viewport,
    ) -> usize {
        let view_proj = camera.view_projection();
        let mut changed = 0;
        for anchor in anchors.iter_mut() {
            let world = anchor.position();
            let ndc = view_proj.project_point3(world);
            anchor.screen_offset = ndc_to_screen_offset(ndc, viewport);

            let behind = camera.view_depth(world) <= 0.0;
            anchor.behind_camera = behind;

            let visible = if behind && self.settings.cull_behind_camera {
                false
            } else {
                let ray = camera.ray_through_ndc(ndc.truncate());
                let nearest = self
                    .settings
                    .raycaster
                    .nearest(&ray, colliders)
                    .map(|h| h.distance);
                !is_occluded(nearest, world.distance(camera.eye))
            };

            if visible != anchor.visible {
                changed += 1;
                log::debug!(
                    "[hotspot] {} -> {}",
                    anchor.label().unwrap_or("<unlabelled>"),
                    if visible { "visible" } else { "hidden" }
                );
            }
            anchor.visible = visible;
        }
        changed
    }
}

/// Update all anchors with default settings.
pub fn update_annotations(
    camera: &Camera,
    anchors: &mut [AnchorPoint],
    colliders: &[&dyn Collider],
    viewport: Viewport,
) {
    AnnotationEngine::default().update(camera, anchors, colliders, viewport);
}
