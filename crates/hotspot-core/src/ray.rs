use glam::{Mat4, Vec3};

/// A half-line in world space. `direction` is kept unit length by [`Ray::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Map the ray into another space. The direction is left unnormalized so
    /// parameters found in the target space still map back to the same points.
    pub fn transformed(&self, m: &Mat4) -> Ray {
        Ray {
            origin: m.transform_point3(self.origin),
            direction: m.transform_vector3(self.direction),
        }
    }
}

/// Which triangle faces a ray is allowed to hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise faces only.
    #[default]
    Front,
    Back,
    Double,
}

/// Ray-triangle intersection using the Möller–Trumbore algorithm.
///
/// Returns the ray parameter `t` of the hit. With a unit `dir` this is the
/// distance from `origin`. Faces are culled according to `side`.
#[inline]
pub fn ray_triangle(
    origin: Vec3,
    dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    side: Side,
) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = dir.cross(edge2);
    let a = edge1.dot(h);

    // a > 0 when the ray looks at the counter-clockwise face. `a` scales
    // with |dir| and the triangle area, so only exact zero means parallel.
    let facing = match side {
        Side::Front => a > 0.0,
        Side::Back => a < 0.0,
        Side::Double => a != 0.0,
    };
    if !facing {
        return None;
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > 0.0).then_some(t)
}
