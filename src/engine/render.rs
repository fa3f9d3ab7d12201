/// Per-pixel and per-frame rendering.
///
/// A pixel is a pure function of `(frag_coord, RenderParams)`. Frames are
/// rendered row by row into an RGBA buffer (row 0 at the top); rows can be
/// split across workers in any order without changing the output.

use crate::lighting::shade;
use crate::math::{utils, Vec2, Vec3};
use crate::sdf::scene::Scene;
use crate::sdf::SceneField;
use super::camera::{camera_ray, frag_coord_for};
use super::raymarcher::ray_march;
use super::types::{RenderParams, FALLBACK_TINT};

/// Color of one pixel, each channel clamped to [0, 1] (NaN passes through).
///
/// With the fractal path disabled this is `FALLBACK_TINT` regardless of
/// the other parameters.
pub fn render_pixel(frag_coord: Vec2, params: &RenderParams) -> Vec3 {
    if !params.fractal_enabled {
        return FALLBACK_TINT;
    }
    let scene = Scene::from_params(params);
    trace_pixel(&scene, frag_coord, params)
}

/// Full pipeline for one pixel against an already built scene.
pub fn trace_pixel<S: SceneField + ?Sized>(scene: &S, frag_coord: Vec2, params: &RenderParams) -> Vec3 {
    let ray = camera_ray(frag_coord, params);
    let hit = ray_march(scene, &ray);
    let p = ray.at(hit.distance);
    shade::shade(scene, &hit, &p, params.shading).clamp(0.0, 1.0)
}

/// Render one RGBA row (`width * 4` bytes) of a top-down image.
///
/// Without a scene every pixel is `FALLBACK_TINT`.
fn render_row<S: SceneField + ?Sized>(
    scene: Option<&S>,
    params: &RenderParams,
    row: u32,
    height: u32,
    rgba_row: &mut [u8],
) {
    for (x, px) in rgba_row.chunks_exact_mut(4).enumerate() {
        let color = match scene {
            Some(scene) => trace_pixel(scene, frag_coord_for(x as u32, row, height), params),
            None => FALLBACK_TINT,
        };
        px[0] = utils::float_to_byte(color.x);
        px[1] = utils::float_to_byte(color.y);
        px[2] = utils::float_to_byte(color.z);
        px[3] = 255;
    }
}

/// Render interleaved scanlines: worker `worker_id` of `worker_count`
/// takes rows `worker_id, worker_id + worker_count, …`.
///
/// `rgba_out` holds the whole frame (`width * height * 4` bytes); rows
/// that don't fit are skipped. Returns the number of rows rendered.
pub fn render_scanlines(
    params: &RenderParams,
    rgba_out: &mut [u8],
    worker_id: u32,
    worker_count: u32,
) -> u32 {
    let (w, h) = params.pixel_size();
    let row_bytes = w as usize * 4;
    if row_bytes == 0 || worker_count == 0 {
        return 0;
    }

    let scene = params.fractal_enabled.then(|| Scene::from_params(params));
    let mut rows_rendered = 0u32;

    for y in (worker_id..h).step_by(worker_count as usize) {
        let start = y as usize * row_bytes;
        let Some(rgba_row) = rgba_out.get_mut(start..start + row_bytes) else {
            break;
        };
        render_row(scene.as_ref(), params, y, h, rgba_row);
        rows_rendered += 1;
    }

    log::debug!(
        "worker {worker_id}/{worker_count}: rendered {rows_rendered} rows of {w}x{h}"
    );
    rows_rendered
}

/// Render the whole frame on the calling thread.
pub fn render_frame(params: &RenderParams, rgba_out: &mut [u8]) -> u32 {
    render_scanlines(params, rgba_out, 0, 1)
}

/// Render the whole frame with rows spread over the rayon pool.
///
/// Every row shares the same parameter snapshot and scene, so the bytes
/// match `render_frame` exactly.
#[cfg(feature = "parallel")]
pub fn render_frame_parallel(params: &RenderParams, rgba_out: &mut [u8]) -> u32 {
    use rayon::prelude::*;

    let (w, h) = params.pixel_size();
    let row_bytes = w as usize * 4;
    if row_bytes == 0 {
        return 0;
    }

    let scene = params.fractal_enabled.then(|| Scene::from_params(params));
    let rows = (rgba_out.len() / row_bytes).min(h as usize);

    rgba_out[..rows * row_bytes]
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, rgba_row)| render_row(scene.as_ref(), params, y as u32, h, rgba_row));

    log::debug!("rendered {rows} rows of {w}x{h} in parallel");
    rows as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{ShadingMode, CAMERA_POS};

    fn small_params() -> RenderParams {
        let mut params = RenderParams::for_viewport(24.0, 16.0);
        params.power = 8.0;
        params
    }

    #[test]
    fn test_render_pixel_is_deterministic() {
        let params = small_params();
        for frag in [Vec2::new(12.0, 8.0), Vec2::new(3.5, 12.5), Vec2::new(20.5, 1.5)] {
            let a = render_pixel(frag, &params);
            let b = render_pixel(frag, &params);
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }

    #[test]
    fn test_render_pixel_channels_in_range() {
        let params = small_params();
        for y in 0..16 {
            for x in 0..24 {
                let c = render_pixel(frag_coord_for(x, y, 16), &params);
                for ch in c.to_array() {
                    assert!(ch.is_nan() || (0.0..=1.0).contains(&ch));
                }
            }
        }
    }

    #[test]
    fn test_fallback_ignores_params() {
        let mut params = small_params();
        params.fractal_enabled = false;
        assert_eq!(render_pixel(Vec2::new(1.0, 1.0), &params), FALLBACK_TINT);

        params.power = 10.0;
        params.offset = Vec3::new(-3.0, 2.0, 1.0);
        params.time = 1234.5;
        params.shading = ShadingMode::Modulated;
        assert_eq!(render_pixel(Vec2::new(23.5, 0.5), &params), FALLBACK_TINT);

        let mut rgba = vec![0u8; 24 * 16 * 4];
        render_frame(&params, &mut rgba);
        assert!(rgba.chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
    }

    #[test]
    fn test_center_pixel_shows_the_fractal() {
        // Additive shading over the fractal tint: green dominates red
        let params = small_params();
        let c = render_pixel(Vec2::new(12.0, 8.0), &params);
        assert!(c.y > c.x);
    }

    #[test]
    fn test_singular_fractal_origin_renders_without_fault() {
        // The single pixel's first sample lands exactly on the fractal origin
        let mut params = RenderParams::for_viewport(1.0, 1.0);
        params.power = 2.0;
        params.offset = CAMERA_POS;

        let c = render_pixel(Vec2::new(0.5, 0.5), &params);
        assert!(c.x.is_nan() && c.y.is_nan() && c.z.is_nan());

        let mut rgba = [7u8; 4];
        assert_eq!(render_frame(&params, &mut rgba), 1);
        assert_eq!(rgba, [0, 0, 0, 255]);
    }

    #[test]
    fn test_interleaved_workers_match_single_pass() {
        let params = small_params();
        let mut single = vec![0u8; 24 * 16 * 4];
        assert_eq!(render_frame(&params, &mut single), 16);

        let mut split = vec![0u8; 24 * 16 * 4];
        let rows: u32 = (0..3).rev().map(|id| render_scanlines(&params, &mut split, id, 3)).sum();
        assert_eq!(rows, 16);
        assert_eq!(single, split);
    }

    #[test]
    fn test_short_buffer_renders_what_fits() {
        let params = small_params();
        let mut rgba = vec![0u8; 24 * 4 * 5 + 7];
        assert_eq!(render_frame(&params, &mut rgba), 5);
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut params = small_params();
        assert_eq!(render_scanlines(&params, &mut [], 0, 0), 0);
        params.viewport_size = Vec2::new(0.0, 16.0);
        assert_eq!(render_frame(&params, &mut [0u8; 64]), 0);
    }

    #[test]
    fn test_huge_worker_stride_renders_one_row() {
        let params = RenderParams::for_viewport(4.0, 4.0);
        let mut rgba = [0u8; 64];
        assert_eq!(render_scanlines(&params, &mut rgba, 1, u32::MAX), 1);
        assert!(rgba[..16].iter().all(|&b| b == 0));
        assert!(rgba[16..32].chunks_exact(4).all(|px| px[3] == 255));
        assert!(rgba[32..].iter().all(|&b| b == 0));

        assert_eq!(render_scanlines(&params, &mut rgba, u32::MAX, u32::MAX), 0);
    }

    #[test]
    fn test_fallback_rows_from_one_worker() {
        let mut params = small_params();
        params.fractal_enabled = false;
        let mut rgba = vec![0u8; 24 * 16 * 4];
        assert_eq!(render_scanlines(&params, &mut rgba, 1, 2), 8);
        for (row, line) in rgba.chunks_exact(24 * 4).enumerate() {
            let expected: &[u8] = if row % 2 == 1 { &[255, 0, 0, 255] } else { &[0, 0, 0, 0] };
            assert!(line.chunks_exact(4).all(|px| px == expected));
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_frame_matches_sequential() {
        let params = small_params();
        let mut sequential = vec![0u8; 24 * 16 * 4];
        render_frame(&params, &mut sequential);

        let mut parallel = vec![0u8; 24 * 16 * 4];
        assert_eq!(render_frame_parallel(&params, &mut parallel), 16);
        assert_eq!(sequential, parallel);
    }
}
