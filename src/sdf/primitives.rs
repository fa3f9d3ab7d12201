/// Primitive shapes — exact signed distance functions.
///
/// Not part of the default scene; available for composition through
/// `Scene` alongside the fractal.

use crate::math::{Vec2, Vec3};
use super::DistanceFunction;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Sphere
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl DistanceFunction for Sphere {
    fn name(&self) -> &str { "Sphere" }

    fn distance(&self, p: &Vec3) -> f64 {
        (self.center - *p).length() - self.radius
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Box — `size` is the half-extent on each axis
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct BoxShape {
    pub center: Vec3,
    pub size: Vec3,
}

impl DistanceFunction for BoxShape {
    fn name(&self) -> &str { "Box" }

    fn distance(&self, p: &Vec3) -> f64 {
        box_distance(p, &self.center, &self.size)
    }
}

#[inline]
fn box_distance(p: &Vec3, center: &Vec3, size: &Vec3) -> f64 {
    let offset = (*p - *center).abs() - *size;
    let unsigned_dist = offset.max_scalar(0.0).length();
    let dist_inside_box = offset.max_component().min(0.0);
    unsigned_dist + dist_inside_box
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Rounded box — box shrunk by `smoothing`, then inflated by it
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct RoundedBox {
    pub center: Vec3,
    pub size: Vec3,
    pub smoothing: f64,
}

impl DistanceFunction for RoundedBox {
    fn name(&self) -> &str { "Rounded Box" }

    fn distance(&self, p: &Vec3) -> f64 {
        let inner = self.size - Vec3::splat(self.smoothing);
        box_distance(p, &self.center, &inner) - self.smoothing
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Infinite cylinder along Y, centered at `center` in the XZ plane
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct InfiniteCylinder {
    pub center: Vec2,
    pub radius: f64,
}

impl DistanceFunction for InfiniteCylinder {
    fn name(&self) -> &str { "Infinite Cylinder" }

    fn distance(&self, p: &Vec3) -> f64 {
        (p.xz() - self.center).length() - self.radius
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Ground plane y = 0, normal +Y
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct Plane;

impl DistanceFunction for Plane {
    fn name(&self) -> &str { "Plane" }

    fn distance(&self, p: &Vec3) -> f64 {
        p.y
    }
}
