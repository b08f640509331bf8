// Host-side tests for rays, bounds, meshes and the ray caster.

use glam::{Mat4, Vec3};
use hotspot_core::collider::raycast_mesh;
use hotspot_core::ray::ray_triangle;
use hotspot_core::{Aabb, Collider, Hits, MeshData, Ray, Raycaster, Side};
use std::collections::HashMap;

fn unit_triangle() -> [Vec3; 3] {
    // counter-clockwise seen from +Z
    [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]
}

#[test]
fn ray_triangle_hits_front_face() {
    let [a, b, c] = unit_triangle();
    let t = ray_triangle(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, a, b, c, Side::Front);
    assert!(t.is_some());
    assert!((t.unwrap() - 5.0).abs() < 1e-5);
}

#[test]
fn ray_triangle_respects_side() {
    let [a, b, c] = unit_triangle();
    let from_behind = Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_triangle(from_behind, Vec3::Z, a, b, c, Side::Front).is_none());
    assert!(ray_triangle(from_behind, Vec3::Z, a, b, c, Side::Back).is_some());
    assert!(ray_triangle(from_behind, Vec3::Z, a, b, c, Side::Double).is_some());
}

#[test]
fn ray_triangle_miss_and_parallel() {
    let [a, b, c] = unit_triangle();
    // outside the triangle
    assert!(ray_triangle(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z, a, b, c, Side::Double).is_none());
    // parallel to its plane
    assert!(ray_triangle(Vec3::new(0.0, 0.0, 1.0), Vec3::X, a, b, c, Side::Double).is_none());
    // triangle behind the origin
    assert!(ray_triangle(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, a, b, c, Side::Double).is_none());
}

#[test]
fn ray_triangle_hits_sub_millimetre_triangle() {
    let [a, b, c] = unit_triangle().map(|v| v * 1e-4);
    let t = ray_triangle(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z, a, b, c, Side::Front);
    assert!(t.is_some());
    assert!((t.unwrap() - 1.0).abs() < 1e-5);

    // unnormalized direction, as produced by a mesh's inverse world matrix
    let t = ray_triangle(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z * 1e-3, a, b, c, Side::Front);
    assert!(t.is_some());
    assert!((t.unwrap() - 1000.0).abs() < 1e-2);
}

#[test]
fn aabb_ray_entry_distance() {
    let b = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let t = b.ray_entry(&ray).expect("hit");
    assert!((t - 4.0).abs() < 1e-5);

    let away = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    assert!(b.ray_entry(&away).is_none());

    let beside = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(b.ray_entry(&beside).is_none());
}

#[test]
fn aabb_ray_from_inside_has_no_entry_but_overlaps() {
    let b = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert!(b.ray_entry(&ray).is_none());
    assert!(b.overlaps_ray(ray.origin, ray.direction));
}

#[test]
fn aabb_transformed_covers_rotated_box() {
    let b = Aabb::from_center_size(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));
    let m = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4);
    let t = b.transformed(&m);
    let expected = 2.0_f32.sqrt();
    assert!((t.max.x - expected).abs() < 1e-5);
    assert!((t.max.y - 1.0).abs() < 1e-5);
    assert!(t.contains(Vec3::new(1.3, 0.0, 0.0)));
}

#[test]
fn cuboid_has_outward_faces_and_expected_bounds() {
    let size = Vec3::new(1.0, 2.0, 3.0);
    let mesh = MeshData::cuboid(size);
    assert_eq!(mesh.triangle_count(), 12);
    let bounds = mesh.bounds().unwrap();
    assert!((bounds.size() - size).length() < 1e-6);
    for [a, b, c] in mesh.triangles() {
        let n = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0, "inward face at {centroid:?}");
    }
}

#[test]
fn plane_faces_positive_z() {
    let mesh = MeshData::plane(10.0, 4.0);
    for [a, b, c] in mesh.triangles() {
        let n = (b - a).cross(c - a).normalize();
        assert!((n - Vec3::Z).length() < 1e-6);
    }
    let bounds = mesh.bounds().unwrap();
    assert_eq!(bounds.size(), Vec3::new(10.0, 4.0, 0.0));
}

#[test]
fn boulder_is_deterministic_and_watertight() {
    let a = MeshData::boulder(100.0, 2, 0.2, 7);
    let b = MeshData::boulder(100.0, 2, 0.2, 7);
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.indices, b.indices);
    assert_eq!(a.triangle_count(), 20 * 4 * 4);

    // every undirected edge shared by exactly two faces
    let mut edges: HashMap<(u32, u32), u32> = HashMap::new();
    for tri in a.indices.chunks_exact(3) {
        for (i, j) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *edges.entry((i.min(j), i.max(j))).or_default() += 1;
        }
    }
    assert!(edges.values().all(|&n| n == 2));

    for (p, n) in a.positions.iter().zip(&a.normals) {
        let r = p.length();
        assert!((79.9..=120.1).contains(&r), "radius {r} out of range");
        assert!(n.dot(*p) > 0.0);
    }
}

#[test]
fn boulder_seed_changes_shape() {
    let a = MeshData::boulder(1.0, 1, 0.2, 1);
    let b = MeshData::boulder(1.0, 1, 0.2, 2);
    assert_ne!(a.positions, b.positions);
}

#[test]
fn vertices_interleave_positions_and_normals() {
    let mesh = MeshData::cuboid(Vec3::ONE);
    let verts = mesh.vertices();
    assert_eq!(verts.len(), mesh.positions.len());
    assert_eq!(verts[0].position, mesh.positions[0].to_array());
    assert_eq!(verts[0].normal, mesh.normals[0].to_array());
    assert_eq!(std::mem::size_of_val(&verts[0]), 24);
}

#[test]
fn scaled_mesh_reports_world_distances() {
    let mesh = MeshData::cuboid(Vec3::splat(200.0));
    let world = Mat4::from_scale_rotation_translation(
        Vec3::splat(0.01),
        glam::Quat::IDENTITY,
        Vec3::new(0.0, 0.0, -3.0),
    );
    // off the face diagonals so each face reports a single triangle
    let ray = Ray::new(Vec3::new(0.3, -0.2, 0.0), Vec3::NEG_Z);
    let mut hits = Hits::new();
    raycast_mesh(&mesh, &world, Side::Front, &ray, &mut hits);
    assert_eq!(hits.len(), 1, "only the front face should be hit");
    assert!((hits[0].distance - 2.0).abs() < 1e-4);
    assert!((hits[0].point - Vec3::new(0.3, -0.2, -2.0)).length() < 1e-4);

    hits.clear();
    raycast_mesh(&mesh, &world, Side::Double, &ray, &mut hits);
    assert_eq!(hits.len(), 2);
}

#[test]
fn magnified_tiny_mesh_reports_world_distances() {
    let mesh = MeshData::cuboid(Vec3::splat(0.0005));
    let world = Mat4::from_scale_rotation_translation(
        Vec3::splat(1000.0),
        glam::Quat::IDENTITY,
        Vec3::new(0.0, 0.0, -3.0),
    );
    let ray = Ray::new(Vec3::new(0.075, -0.05, 0.0), Vec3::NEG_Z);
    let mut hits = Hits::new();
    raycast_mesh(&mesh, &world, Side::Front, &ray, &mut hits);
    assert_eq!(hits.len(), 1);
    assert!((hits[0].distance - 2.75).abs() < 1e-4);
    assert!((hits[0].point - Vec3::new(0.075, -0.05, -2.75)).length() < 1e-4);
}

#[test]
fn raycaster_sorts_and_filters_hits() {
    let near_box = Aabb::from_center_size(Vec3::new(0.0, 0.0, -2.0), Vec3::splat(1.0));
    let far_box = Aabb::from_center_size(Vec3::new(0.0, 0.0, -6.0), Vec3::splat(1.0));
    let colliders: [&dyn Collider; 2] = [&far_box, &near_box];
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

    let hits = Raycaster::default().intersect(&ray, &colliders);
    assert_eq!(hits.len(), 2);
    assert!((hits[0].distance - 1.5).abs() < 1e-5);
    assert!((hits[1].distance - 5.5).abs() < 1e-5);
    // indices refer to the caller's list, not the sorted order
    assert_eq!(hits[0].collider, 1);
    assert_eq!(hits[1].collider, 0);

    let limited = Raycaster {
        near: 0.0,
        far: 3.0,
    };
    let hits = limited.intersect(&ray, &colliders);
    assert_eq!(hits.len(), 1);

    let skip_near = Raycaster {
        near: 2.0,
        far: f32::INFINITY,
    };
    let nearest = skip_near.nearest(&ray, &colliders).expect("far box");
    assert!((nearest.distance - 5.5).abs() < 1e-5);
}
