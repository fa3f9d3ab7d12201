//! Browser-side checks of the exported boundary.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use bulb_march::engine::params::params_to_buffer;
use bulb_march::{fallback_color, render_frame, render_pixel, RenderParams};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn buffer(fractal_enabled: bool) -> Vec<f64> {
    let mut params = RenderParams::for_viewport(16.0, 12.0);
    params.power = 8.0;
    params.fractal_enabled = fractal_enabled;
    params_to_buffer(&params).to_vec()
}

#[wasm_bindgen_test]
fn renders_pixel_through_the_boundary() {
    let Ok(color) = render_pixel(8.0, 6.0, &buffer(true)) else {
        panic!("valid parameters were rejected");
    };
    assert_eq!(color.len(), 3);
    assert!(color[1] > color[0]);
}

#[wasm_bindgen_test]
fn rejects_short_parameter_buffer() {
    assert!(render_pixel(0.5, 0.5, &[16.0, 12.0]).is_err());
}

#[wasm_bindgen_test]
fn disabled_fractal_fills_frame_with_fallback() {
    let mut rgba = vec![0u8; 16 * 12 * 4];
    assert!(matches!(render_frame(&buffer(false), &mut rgba), Ok(12)));
    assert_eq!(fallback_color(), vec![1.0, 0.0, 0.0]);
    assert!(rgba.chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
}
