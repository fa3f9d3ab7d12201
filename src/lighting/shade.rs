/// Shader — Lambert diffuse from one fixed point light plus a hard shadow
/// found by tracing a second ray toward the light.

use crate::engine::raymarcher::{calculate_normal, ray_march};
use crate::engine::types::{HitResult, Ray, ShadingMode, LIGHT_POS, SURF_DIST};
use crate::math::utils;
use crate::math::Vec3;
use crate::sdf::SceneField;

/// Factor applied to the diffuse term of an occluded point.
pub const SHADOW_ATTENUATION: f64 = 0.1;
/// Additive-mode bias and scale: `(diffuse - BIAS) * SCALE`.
pub const ADDITIVE_BIAS: f64 = 0.5;
pub const ADDITIVE_SCALE: f64 = 0.7;

/// Lighting terms at one surface point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSample {
    pub normal: Vec3,
    /// `clamp(n · l, 0, 1)` before shadowing
    pub lambert: f64,
    /// Whether the shadow ray met something before reaching the light
    pub occluded: bool,
    /// Final diffuse term, attenuated when occluded
    pub diffuse: f64,
}

/// Diffuse and shadow terms at `p`.
///
/// The shadow ray starts `2 · SURF_DIST` off the surface along the normal;
/// if it stops short of the light the point is in shadow.
pub fn light_point<S: SceneField + ?Sized>(scene: &S, p: &Vec3) -> LightSample {
    let to_light = LIGHT_POS - *p;
    let light_dir = to_light.normalized();
    let normal = calculate_normal(scene, p);
    let lambert = utils::clamp(normal.dot(&light_dir), 0.0, 1.0);

    let shadow_ray = Ray { origin: *p + normal * (SURF_DIST * 2.0), direction: light_dir };
    let occluded = ray_march(scene, &shadow_ray).distance < to_light.length();

    LightSample {
        normal,
        lambert,
        occluded,
        diffuse: if occluded { lambert * SHADOW_ATTENUATION } else { lambert },
    }
}

/// Final color for the primary ray's end point `p`.
///
/// Runs for misses too, matching the reference output: on a miss the
/// field color is already black, so only the lighting term remains.
pub fn shade<S: SceneField + ?Sized>(
    scene: &S,
    hit: &HitResult,
    p: &Vec3,
    mode: ShadingMode,
) -> Vec3 {
    let light = light_point(scene, p);
    match mode {
        ShadingMode::Additive => {
            hit.color + Vec3::splat((light.diffuse - ADDITIVE_BIAS) * ADDITIVE_SCALE)
        }
        ShadingMode::Modulated => hit.color * light.diffuse,
    }
}
