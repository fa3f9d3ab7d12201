/// Core value types of the renderer.
///
/// Everything here is constructed fresh per pixel per frame and carries
/// no identity; `RenderParams` is the only per-frame input and is treated
/// as an immutable snapshot for the whole pixel grid.

use crate::math::{Vec2, Vec3};

/// Step budget of the sphere tracer.
pub const MAX_STEPS: u32 = 100;
/// Travel distance beyond which a ray counts as escaped.
pub const MAX_DIST: f64 = 100.0;
/// Surface threshold: a sample closer than this is a hit.
pub const SURF_DIST: f64 = 0.001;

/// Fixed camera position.
pub const CAMERA_POS: Vec3 = Vec3::new(0.0, 0.0, -5.0);
/// Fixed point light position.
pub const LIGHT_POS: Vec3 = Vec3::new(0.0, 0.6, -2.0);

/// Flat tint emitted for every pixel when the fractal path is disabled (#FF0000).
pub const FALLBACK_TINT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// A ray with unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Point at distance `t` along the ray.
    #[inline(always)]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// One evaluation of the distance field.
///
/// `distance` is negative inside a surface; `color` only means something
/// at a detected hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSample {
    pub distance: f64,
    pub color: Vec3,
}

impl SceneSample {
    /// Sample of a scene with nothing in it.
    pub const EMPTY: SceneSample = SceneSample { distance: f64::MAX, color: Vec3::ZERO };
}

/// How a march ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarchOutcome {
    /// A sample came within `SURF_DIST` of a surface.
    Hit,
    /// Travel exceeded `MAX_DIST`; color is reset to black.
    Miss,
    /// `MAX_STEPS` ran out; treated as a hit at the closest approach.
    Exhausted,
}

/// Result of one sphere-traced ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitResult {
    /// Total distance traveled along the ray
    pub distance: f64,
    /// Color of the last sample (black on a miss)
    pub color: Vec3,
    /// Signed distance of the last sample
    pub last_distance: f64,
    /// Number of field evaluations made
    pub steps: u32,
    pub outcome: MarchOutcome,
}

impl HitResult {
    #[inline]
    pub fn escaped(&self) -> bool {
        self.outcome == MarchOutcome::Miss
    }
}

/// Color blending convention of the shader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadingMode {
    /// `field color + (diffuse - 0.5) * 0.7` on every channel.
    #[default]
    Additive,
    /// `field color * diffuse`.
    Modulated,
}

impl ShadingMode {
    pub fn from_u32(id: u32) -> Self {
        match id {
            1 => ShadingMode::Modulated,
            _ => ShadingMode::Additive,
        }
    }
}

/// Per-frame render parameters supplied by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// Square scale, `min(width, height)` on both axes
    pub resolution: Vec2,
    /// Raw framebuffer width/height
    pub viewport_size: Vec2,
    /// Elapsed seconds
    pub time: f64,
    /// Fractal power exponent, ≥ 1
    pub power: f64,
    /// World-space position of the fractal
    pub offset: Vec3,
    /// When false every pixel is `FALLBACK_TINT`
    pub fractal_enabled: bool,
    pub shading: ShadingMode,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::for_viewport(800.0, 600.0)
    }
}

impl RenderParams {
    /// Parameters for a `width × height` framebuffer, with `resolution`
    /// derived as the shorter side.
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            resolution: Vec2::splat(width.min(height)),
            viewport_size: Vec2::new(width, height),
            time: 0.0,
            power: 1.0,
            offset: Vec3::ZERO,
            fractal_enabled: true,
            shading: ShadingMode::Additive,
        }
    }

    /// Framebuffer size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.viewport_size.x.max(0.0) as u32, self.viewport_size.y.max(0.0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_viewport_uses_shorter_side() {
        let params = RenderParams::for_viewport(1280.0, 720.0);
        assert_eq!(params.resolution, Vec2::new(720.0, 720.0));
        assert_eq!(params.viewport_size, Vec2::new(1280.0, 720.0));
        assert_eq!(params.pixel_size(), (1280, 720));
    }

    #[test]
    fn test_shading_mode_ids() {
        assert_eq!(ShadingMode::from_u32(0), ShadingMode::Additive);
        assert_eq!(ShadingMode::from_u32(1), ShadingMode::Modulated);
        assert_eq!(ShadingMode::from_u32(7), ShadingMode::Additive);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray { origin: CAMERA_POS, direction: Vec3::new(0.0, 0.0, 1.0) };
        assert_eq!(ray.at(5.0), Vec3::ZERO);
    }
}
