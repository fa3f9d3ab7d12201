/// Sphere tracer and normal estimator.
///
/// Unbounded sphere tracing: each step advances by the field's own
/// distance estimate. The estimator must be (close to) a lower bound on
/// true distance or thin features get stepped through; that trade-off is
/// inherent to the method.

use crate::math::Vec3;
use crate::sdf::SceneField;
use super::types::*;

/// Offset of the normal probes.
pub const NORMAL_EPSILON: f64 = 0.01;

/// March a single ray through the scene.
///
/// Every step checks, in order: travel past `MAX_DIST` (miss, color reset
/// to black), then `|distance| < SURF_DIST` (hit). Running out of
/// `MAX_STEPS` is reported as `Exhausted` and treated like a hit at the
/// closest approach.
pub fn ray_march<S: SceneField + ?Sized>(scene: &S, ray: &Ray) -> HitResult {
    let mut d0 = 0.0f64;
    let mut color = Vec3::ZERO;
    let mut last_distance = f64::MAX;

    for step in 0..MAX_STEPS {
        let sample = scene.sample(&ray.at(d0));
        d0 += sample.distance;
        color = sample.color;
        last_distance = sample.distance;

        if d0 > MAX_DIST {
            return HitResult {
                distance: d0,
                color: Vec3::ZERO,
                last_distance,
                steps: step + 1,
                outcome: MarchOutcome::Miss,
            };
        }
        if sample.distance.abs() < SURF_DIST {
            return HitResult {
                distance: d0,
                color,
                last_distance,
                steps: step + 1,
                outcome: MarchOutcome::Hit,
            };
        }
    }

    HitResult {
        distance: d0,
        color,
        last_distance,
        steps: MAX_STEPS,
        outcome: MarchOutcome::Exhausted,
    }
}

/// Surface normal at `p` from one-sided differences.
///
/// `n = d(p) - (d(p - e·x), d(p - e·y), d(p - e·z))`, normalized: a forward
/// difference against a fixed offset, four field evaluations.
pub fn calculate_normal<S: SceneField + ?Sized>(scene: &S, p: &Vec3) -> Vec3 {
    let e = NORMAL_EPSILON;
    let d = scene.sample(p).distance;

    let n = Vec3::splat(d) - Vec3::new(
        scene.sample(&(*p - Vec3::new(e, 0.0, 0.0))).distance,
        scene.sample(&(*p - Vec3::new(0.0, e, 0.0))).distance,
        scene.sample(&(*p - Vec3::new(0.0, 0.0, e))).distance,
    );

    n.normalized()
}
