/// Rendering engine: camera rays, sphere tracing, normals, and the
/// per-pixel / per-frame drivers that tie the pipeline together.

pub mod camera;
pub mod params;
pub mod raymarcher;
pub mod render;
pub mod types;
