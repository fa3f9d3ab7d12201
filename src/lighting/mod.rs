/// Lighting module: per-point shading of the traced surface.
///
/// Single fixed point light, Lambert diffuse, hard shadows from a second
/// sphere-traced ray, and two color blending conventions (`ShadingMode`).

pub mod shade;
