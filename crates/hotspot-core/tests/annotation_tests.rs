// Host-side tests for hotspot projection and occlusion.

use glam::{Vec2, Vec3};
use hotspot_core::annotation::{is_occluded, ndc_to_screen_offset};
use hotspot_core::{
    Aabb, AnchorPoint, AnnotationEngine, AnnotationSettings, Camera, Collider, MeshCollider,
    MeshData, Ray, Raycaster, Scene, Side, ViewerConfig, Viewport,
};

const EYE: Vec3 = Vec3::new(2.0, 2.0, 2.0);
const TARGET: Vec3 = Vec3::new(0.0, 0.75, 0.0);

fn make_camera(width: f32, height: f32) -> Camera {
    let mut camera = Camera::perspective(75.0, 1.0, 0.1, 100.0).looking_at(EYE, TARGET);
    camera.set_aspect(width, height);
    camera
}

fn anchor(p: Vec3) -> AnchorPoint {
    AnchorPoint::new(p, Some(".point".to_string()))
}

/// Point `t` units from the eye towards `to`.
fn along(to: Vec3, t: f32) -> Vec3 {
    EYE + (to - EYE).normalize() * t
}

#[test]
fn unobstructed_anchor_is_visible_with_ground_plane_only() {
    // Scenario A
    let camera = make_camera(800.0, 600.0);
    let scene = Scene::from_config(&ViewerConfig::default());
    let mut anchors = vec![anchor(Vec3::new(1.55, 0.3, 0.76))];
    let viewport = Viewport::new(800.0, 600.0);

    AnnotationEngine::default().update(&camera, &mut anchors, &scene.colliders(), viewport);

    let ndc = camera.project(anchors[0].position());
    assert!(anchors[0].visible);
    assert!(!anchors[0].behind_camera);
    assert!((anchors[0].screen_offset.x - ndc.x * 400.0).abs() < 1e-4);
    assert!((anchors[0].screen_offset.y + ndc.y * 300.0).abs() < 1e-4);
    // on screen
    assert!(anchors[0].screen_offset.x.abs() < 400.0);
    assert!(anchors[0].screen_offset.y.abs() < 300.0);
}

#[test]
fn anchor_behind_box_is_hidden() {
    // Scenario B
    let camera = make_camera(800.0, 600.0);
    let p = Vec3::new(1.55, 0.3, 0.76);
    let mid = (EYE + p) * 0.5;
    let occluder = Aabb::from_center_size(mid, Vec3::splat(0.5));
    let mut anchors = vec![anchor(p)];

    AnnotationEngine::default().update(
        &camera,
        &mut anchors,
        &[&occluder],
        Viewport::new(800.0, 600.0),
    );
    assert!(!anchors[0].visible);
}

#[test]
fn anchor_behind_mesh_box_is_hidden() {
    let camera = make_camera(800.0, 600.0);
    let p = Vec3::new(1.55, 0.3, 0.76);
    let mid = (EYE + p) * 0.5;
    let cube = MeshData::cuboid(Vec3::splat(0.5));
    let collider = MeshCollider {
        mesh: &cube,
        world: glam::Mat4::from_translation(mid),
        side: Side::Front,
    };
    let mut anchors = vec![anchor(p)];

    AnnotationEngine::default().update(
        &camera,
        &mut anchors,
        &[&collider],
        Viewport::new(800.0, 600.0),
    );
    assert!(!anchors[0].visible);
}

/// Cube of `local_size` drawn at `scale`, centred between the eye and `p`.
fn hidden_behind_cube(p: Vec3, local_size: f32, scale: f32) -> bool {
    let camera = make_camera(800.0, 600.0);
    let cube = MeshData::cuboid(Vec3::splat(local_size));
    let collider = MeshCollider {
        mesh: &cube,
        world: glam::Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            glam::Quat::IDENTITY,
            (EYE + p) * 0.5,
        ),
        side: Side::Front,
    };
    let mut anchors = vec![anchor(p)];
    AnnotationEngine::default().update(
        &camera,
        &mut anchors,
        &[&collider],
        Viewport::new(800.0, 600.0),
    );
    !anchors[0].visible
}

#[test]
fn tiny_mesh_scaled_up_still_occludes() {
    // 0.5 m in the world, authored at half a millimetre
    assert!(hidden_behind_cube(Vec3::new(1.55, 0.3, 0.76), 0.0005, 1000.0));
}

#[test]
fn sub_millimetre_mesh_on_the_line_of_sight_occludes() {
    let p = Vec3::new(1.55, 0.3, 0.76);
    assert!(hidden_behind_cube(p, 0.0002, 1.0));
    assert!(hidden_behind_cube(p, 0.001, 1.0));
}

#[test]
fn anchors_on_the_floor_are_visible() {
    let camera = make_camera(800.0, 600.0);
    let scene = Scene::from_config(&ViewerConfig::default());
    let mut anchors: Vec<AnchorPoint> = (0..41)
        .flat_map(|i| (0..41).map(move |j| (i, j)))
        .map(|(i, j)| {
            let x = -5.0 + i as f32 * 0.25;
            let z = -5.0 + j as f32 * 0.25;
            anchor(Vec3::new(x, 0.0, z))
        })
        .collect();

    AnnotationEngine::default().update(
        &camera,
        &mut anchors,
        &scene.colliders(),
        Viewport::new(800.0, 600.0),
    );

    let in_front: Vec<_> = anchors.iter().filter(|a| !a.behind_camera).collect();
    assert!(in_front.len() > 1000);
    let hidden: Vec<Vec3> = in_front
        .iter()
        .filter(|a| !a.visible)
        .map(|a| a.position())
        .collect();
    assert!(hidden.is_empty(), "floor anchors hidden: {hidden:?}");
}

#[test]
fn anchors_on_the_model_surface_are_visible() {
    let camera = make_camera(800.0, 600.0);
    let config = ViewerConfig::default();
    let mut scene = Scene::from_config(&config);
    scene.attach_model(Scene::load_model(&config.model));
    let colliders = scene.colliders();

    // pin anchors where rays from the eye first meet the boulder
    let centre = Vec3::new(0.0, 1.0, 0.0);
    let mut anchors: Vec<AnchorPoint> = (-2..=2)
        .flat_map(|i| (-2..=2).map(move |j| (i, j)))
        .filter_map(|(i, j)| {
            let aim = centre + Vec3::new(i as f32 * 0.15, j as f32 * 0.15, -(i as f32) * 0.15);
            let ray = Ray::new(EYE, aim - EYE);
            Raycaster::default().nearest(&ray, &colliders)
        })
        .map(|hit| anchor(hit.point))
        .collect();
    assert_eq!(anchors.len(), 25);

    AnnotationEngine::default().update(
        &camera,
        &mut anchors,
        &colliders,
        Viewport::new(800.0, 600.0),
    );
    for a in &anchors {
        assert!(a.visible, "surface anchor at {:?} hidden", a.position());
    }
}

#[test]
fn offsets_scale_with_viewport_and_visibility_is_unchanged() {
    // Scenario C: the camera keeps its projection, only the surface grows
    let camera = make_camera(800.0, 600.0);
    let scene = Scene::from_config(&ViewerConfig::default());
    let colliders = scene.colliders();
    let engine = AnnotationEngine::default();

    let mut small = vec![anchor(Vec3::new(1.55, 0.3, 0.76))];
    let mut large = small.clone();
    engine.update(&camera, &mut small, &colliders, Viewport::new(800.0, 600.0));
    engine.update(&camera, &mut large, &colliders, Viewport::new(1600.0, 900.0));

    assert!((large[0].screen_offset.x - small[0].screen_offset.x * 2.0).abs() < 1e-3);
    assert!((large[0].screen_offset.y - small[0].screen_offset.y * 1.5).abs() < 1e-3);
    assert_eq!(small[0].visible, large[0].visible);
}

#[test]
fn occluder_between_two_anchors_hides_only_the_far_one() {
    // Scenario D
    let camera = make_camera(800.0, 600.0);
    let occluder = Aabb::from_center_size(along(TARGET, 1.8), Vec3::splat(0.3));
    let mut anchors = vec![anchor(along(TARGET, 1.0)), anchor(along(TARGET, 2.5))];

    AnnotationEngine::default().update(
        &camera,
        &mut anchors,
        &[&occluder],
        Viewport::new(800.0, 600.0),
    );
    assert!(anchors[0].visible, "near anchor should be visible");
    assert!(!anchors[1].visible, "far anchor should be hidden");
}

#[test]
fn update_is_idempotent() {
    let camera = make_camera(1024.0, 768.0);
    let config = ViewerConfig::default();
    let mut scene = Scene::from_config(&config);
    scene.attach_model(Scene::load_model(&config.model));
    let colliders = scene.colliders();
    let viewport = Viewport::new(1024.0, 768.0);
    let engine = AnnotationEngine::default();

    let mut anchors = config.anchor_points();
    engine.update(&camera, &mut anchors, &colliders, viewport);
    let first = anchors.clone();
    let changed = engine.update(&camera, &mut anchors, &colliders, viewport);

    assert_eq!(changed, 0);
    assert_eq!(first, anchors);
}

#[test]
fn empty_collider_list_makes_everything_visible() {
    let camera = make_camera(800.0, 600.0);
    let mut anchors = vec![
        anchor(Vec3::new(1.55, 0.3, 0.76)),
        anchor(Vec3::new(-3.0, 0.0, -3.0)),
    ];
    hotspot_core::update_annotations(&camera, &mut anchors, &[], Viewport::new(800.0, 600.0));
    assert!(anchors.iter().all(|a| a.visible));
}

#[test]
fn stored_position_is_not_mutated_by_updates() {
    let camera = make_camera(800.0, 600.0);
    let p = Vec3::new(1.55, 0.6, 0.76);
    let mut anchors = vec![anchor(p)];
    for _ in 0..3 {
        hotspot_core::update_annotations(&camera, &mut anchors, &[], Viewport::new(800.0, 600.0));
    }
    assert_eq!(anchors[0].position(), p);
}

#[test]
fn anchor_behind_camera_is_hidden_by_default() {
    let camera = make_camera(800.0, 600.0);
    let behind = EYE + (EYE - TARGET).normalize();
    let mut anchors = vec![anchor(behind)];

    AnnotationEngine::default().update(&camera, &mut anchors, &[], Viewport::new(800.0, 600.0));
    assert!(anchors[0].behind_camera);
    assert!(!anchors[0].visible);
}

#[test]
fn behind_camera_culling_can_be_disabled() {
    let camera = make_camera(800.0, 600.0);
    let behind = EYE + (EYE - TARGET).normalize();
    let mut anchors = vec![anchor(behind)];
    let engine = AnnotationEngine::new(AnnotationSettings {
        cull_behind_camera: false,
        ..Default::default()
    });

    engine.update(&camera, &mut anchors, &[], Viewport::new(800.0, 600.0));
    assert!(anchors[0].behind_camera);
    assert!(anchors[0].visible);
}

#[test]
fn visibility_follows_the_camera() {
    // the occluder sits between the default eye and the anchor; moving the
    // eye to the opposite side clears the line of sight
    let p = Vec3::new(0.0, 0.5, 0.0);
    let occluder = Aabb::from_center_size(Vec3::new(1.0, 1.0, 1.0), Vec3::splat(0.6));
    let colliders: [&dyn Collider; 1] = [&occluder];
    let engine = AnnotationEngine::default();
    let viewport = Viewport::new(800.0, 600.0);
    let mut anchors = vec![anchor(p)];

    let camera = make_camera(800.0, 600.0);
    engine.update(&camera, &mut anchors, &colliders, viewport);
    assert!(!anchors[0].visible);

    let moved = make_camera(800.0, 600.0).looking_at(Vec3::new(-2.0, 2.0, -2.0), TARGET);
    let changed = engine.update(&moved, &mut anchors, &colliders, viewport);
    assert_eq!(changed, 1);
    assert!(anchors[0].visible);
}

#[test]
fn screen_offset_formula_inverts_y() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(ndc_to_screen_offset(Vec3::ZERO, vp), Vec2::ZERO);
    assert_eq!(
        ndc_to_screen_offset(Vec3::new(1.0, 1.0, 0.5), vp),
        Vec2::new(400.0, -300.0)
    );
    assert_eq!(
        ndc_to_screen_offset(Vec3::new(-0.5, -1.0, 0.5), vp),
        Vec2::new(-200.0, 300.0)
    );
}

#[test]
fn equal_distances_resolve_to_visible() {
    assert!(!is_occluded(None, 3.0));
    assert!(!is_occluded(Some(3.0), 3.0));
    assert!(!is_occluded(Some(3.5), 3.0));
    assert!(is_occluded(Some(2.999), 3.0));
}

#[test]
fn hits_on_the_anchor_surface_do_not_occlude() {
    // float noise on the anchor's own surface stays visible
    assert!(!is_occluded(Some(3.0 - 1e-5), 3.0));
    assert!(!is_occluded(Some(9.9995), 10.0));
    assert!(is_occluded(Some(9.99), 10.0));
}

#[test]
fn anchors_start_hidden_until_first_update() {
    let a = AnchorPoint::new(Vec3::ONE, None);
    assert!(!a.visible);
    assert_eq!(a.screen_offset, Vec2::ZERO);
    assert_eq!(a.label(), None);
}
