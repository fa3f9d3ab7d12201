/// Distance-field scene model.
///
/// Shapes are pure `(point, shape parameters) -> distance` functions behind
/// the `DistanceFunction` trait. A `SceneField` turns a world point into a
/// single nearest-surface `SceneSample`; that one call site is where shapes
/// get composed, either by hard union (`min`) or by `smooth_min`.

pub mod mandelbulb;
pub mod primitives;
pub mod scene;

use crate::engine::types::SceneSample;
use crate::math::Vec3;

/// Signed distance to one shape in its local space.
pub trait DistanceFunction: Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Signed distance from `p` to the surface (negative inside).
    fn distance(&self, p: &Vec3) -> f64;
}

/// A complete scene: nearest surface distance plus its color.
pub trait SceneField: Send + Sync {
    fn sample(&self, p: &Vec3) -> SceneSample;
}

/// Polynomial smooth minimum with blend radius `k` (> 0).
///
/// Never exceeds `min(a, b)` and equals it once `|a - b| >= k`.
#[inline]
pub fn smooth_min(a: f64, b: f64, k: f64) -> f64 {
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * h * k / 6.0
}

/// Hard union of two samples: the nearer one wins, color included.
#[inline]
pub fn union_sample(a: SceneSample, b: SceneSample) -> SceneSample {
    if b.distance < a.distance { b } else { a }
}

/// Smooth union of two samples. Distance follows `smooth_min`; color is
/// interpolated from `a` toward `b` by the blend weight.
#[inline]
pub fn smooth_min_sample(a: SceneSample, b: SceneSample, k: f64) -> SceneSample {
    let h = (k - (a.distance - b.distance).abs()).max(0.0) / k;
    SceneSample {
        distance: smooth_min(a.distance, b.distance, k),
        color: a.color.lerp(&b.color, h),
    }
}
