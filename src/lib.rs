use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod console;
pub mod engine;
pub mod lighting;
pub mod math;
pub mod sdf;

pub use engine::params::{params_from_buffer, ParamsError};
pub use engine::render::trace_pixel;
#[cfg(feature = "parallel")]
pub use engine::render::render_frame_parallel;
pub use engine::types::{RenderParams, ShadingMode};
pub use math::{Mat4, Vec2, Vec3};

/// Initialize the WASM module (runs on instantiation).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console::install(log::LevelFilter::Info);
    log::info!("bulb-march {} ready", env!("CARGO_PKG_VERSION"));
}

/// Number of values the host's parameter `Float64Array` must hold.
#[wasm_bindgen]
pub fn params_len() -> usize {
    engine::params::PARAMS_LEN
}

/// Color of a single pixel as `[r, g, b]` in [0, 1].
///
/// `frag_x` / `frag_y` — pixel-center coordinate, origin bottom-left
/// `render_params` — Float64Array, see `engine::params` for the layout
#[wasm_bindgen]
pub fn render_pixel(frag_x: f64, frag_y: f64, render_params: &[f64]) -> Result<Vec<f64>, JsError> {
    let params = params_from_buffer(render_params)?;
    let color = engine::render::render_pixel(Vec2::new(frag_x, frag_y), &params);
    Ok(color.to_array().to_vec())
}

/// Render scanlines into a shared RGBA frame.
///
/// Called from each Web Worker with its interleaved row assignment.
///
/// `render_params` — Float64Array of render parameters
/// `rgba_out` — Uint8Array view into the frame (width * height * 4 bytes, row 0 at the top)
/// `worker_id` / `worker_count` — interleaved scanline assignment
#[wasm_bindgen]
pub fn render_scanlines(
    render_params: &[f64],
    rgba_out: &mut [u8],
    worker_id: u32,
    worker_count: u32,
) -> Result<u32, JsError> {
    let params = params_from_buffer(render_params)?;
    Ok(engine::render::render_scanlines(&params, rgba_out, worker_id, worker_count))
}

/// Quick render — the whole frame in one call on the current thread.
/// Returns the number of rows written.
#[wasm_bindgen]
pub fn render_frame(render_params: &[f64], rgba_out: &mut [u8]) -> Result<u32, JsError> {
    let params = params_from_buffer(render_params)?;
    Ok(engine::render::render_frame(&params, rgba_out))
}

/// The flat tint shown when ray marching is switched off, as `[r, g, b]`.
#[wasm_bindgen]
pub fn fallback_color() -> Vec<f64> {
    engine::types::FALLBACK_TINT.to_array().to_vec()
}
