/// Ray generator: pixel coordinate → world-space camera ray.

use crate::math::{Vec2, Vec3};
use super::types::{Ray, RenderParams, CAMERA_POS};

/// Camera ray through `frag_coord` (pixel centers, origin bottom-left).
///
/// Screen offsets are divided by the square `resolution` rather than the
/// raw viewport, so the fractal keeps its proportions at any aspect ratio.
#[inline]
pub fn camera_ray(frag_coord: Vec2, params: &RenderParams) -> Ray {
    let uv = (frag_coord - params.viewport_size * 0.5) / params.resolution;
    Ray {
        origin: CAMERA_POS,
        direction: Vec3::new(uv.x, uv.y, 1.0).normalized(),
    }
}

/// Fragment coordinate of pixel (`x`, `row`) in a top-down image of the
/// given height.
#[inline]
pub fn frag_coord_for(x: u32, row: u32, height: u32) -> Vec2 {
    Vec2::new(x as f64 + 0.5, (height - 1 - row) as f64 + 0.5)
}
