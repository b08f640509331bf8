use crate::bounds::Aabb;
use crate::mesh::MeshData;
use crate::ray::{ray_triangle, Ray, Side};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

/// A ray hit in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub distance: f32,
    pub point: Vec3,
    /// Index of the collider in the list passed to [`Raycaster::intersect`].
    pub collider: usize,
}

/// Hit buffer; a handful of hits per ray is the common case.
pub type Hits = SmallVec<[Hit; 8]>;

/// Anything a ray can be tested against.
///
/// Implementations push every hit they find in any order; [`Raycaster`]
/// sorts them and fills in `collider`.
pub trait Collider {
    fn raycast(&self, ray: &Ray, hits: &mut Hits);
}

impl Collider for Aabb {
    fn raycast(&self, ray: &Ray, hits: &mut Hits) {
        if let Some(t) = self.ray_entry(ray) {
            hits.push(Hit {
                distance: t,
                point: ray.at(t),
                collider: 0,
            });
        }
    }
}

/// Triangle mesh placed in the world by `world`.
pub struct MeshCollider<'a> {
    pub mesh: &'a MeshData,
    pub world: Mat4,
    pub side: Side,
}

impl Collider for MeshCollider<'_> {
    fn raycast(&self, ray: &Ray, hits: &mut Hits) {
        raycast_mesh(self.mesh, &self.world, self.side, ray, hits);
    }
}

/// Test `ray` against `mesh` transformed by `world`.
///
/// The ray is taken into mesh space, so distances come back in world units
/// regardless of scale.
pub fn raycast_mesh(mesh: &MeshData, world: &Mat4, side: Side, ray: &Ray, hits: &mut Hits) {
    let Some(local_bounds) = mesh.bounds() else {
        return;
    };
    if !local_bounds
        .transformed(world)
        .overlaps_ray(ray.origin, ray.direction)
    {
        return;
    }
    let inverse = world.inverse();
    if !inverse.is_finite() {
        return;
    }
    let local = ray.transformed(&inverse);
    // mirrored transforms flip winding
    let side = if world.determinant() < 0.0 {
        match side {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Double => Side::Double,
        }
    } else {
        side
    };
    for [v0, v1, v2] in mesh.triangles() {
        if let Some(t) = ray_triangle(local.origin, local.direction, v0, v1, v2, side) {
            let point = world.transform_point3(local.at(t));
            hits.push(Hit {
                distance: point.distance(ray.origin),
                point,
                collider: 0,
            });
        }
    }
}

/// Casts rays against a list of colliders and orders the hits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Raycaster {
    pub near: f32,
    pub far: f32,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: f32::INFINITY,
        }
    }
}

impl Raycaster {
    /// All hits within `[near, far]`, nearest first.
    pub fn intersect(&self, ray: &Ray, colliders: &[&dyn Collider]) -> Hits {
        let mut hits = Hits::new();
        for (i, c) in colliders.iter().enumerate() {
            let start = hits.len();
            c.raycast(ray, &mut hits);
            for h in &mut hits[start..] {
                h.collider = i;
            }
        }
        hits.retain(|h| h.distance >= self.near && h.distance <= self.far);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    pub fn nearest(&self, ray: &Ray, colliders: &[&dyn Collider]) -> Option<Hit> {
        self.intersect(ray, colliders).first().copied()
    }
}
