/// Math library: small vector/matrix value types and scalar helpers
/// shared by the distance field, the tracer and the shader.

pub mod utils;
pub mod vector;

pub use vector::{Mat4, Vec2, Vec3};
