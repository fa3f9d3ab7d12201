/// Flat parameter buffer shared with the host.
///
/// Layout (`Float64Array`, `PARAMS_LEN` values):
/// `[viewport_w, viewport_h, time, power, offset_x, offset_y, offset_z,
///   fractal_enabled, shading_mode]`
///
/// `resolution` is not transmitted; it is always `min(viewport_w, viewport_h)`.

use thiserror::Error;

use crate::math::Vec3;
use super::types::{RenderParams, ShadingMode};

pub const PARAMS_LEN: usize = 9;

/// Power exponent range accepted from the host.
pub const POWER_RANGE: (f64, f64) = (1.0, 10.0);
/// Offset range the host controls produce; values outside only warn.
pub const OFFSET_LIMIT: f64 = 3.0;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("parameter buffer holds {len} values, expected {expected}", expected = PARAMS_LEN)]
    TooShort { len: usize },
    #[error("parameter `{name}` is not finite")]
    NotFinite { name: &'static str },
    #[error("viewport {width}x{height} has no pixels")]
    EmptyViewport { width: f64, height: f64 },
    #[error("power {0} outside [{min}, {max}]", min = POWER_RANGE.0, max = POWER_RANGE.1)]
    PowerOutOfRange(f64),
}

const NAMES: [&str; PARAMS_LEN] = [
    "viewport_w",
    "viewport_h",
    "time",
    "power",
    "offset_x",
    "offset_y",
    "offset_z",
    "fractal_enabled",
    "shading_mode",
];

/// Build and validate `RenderParams` from the host buffer.
pub fn params_from_buffer(data: &[f64]) -> Result<RenderParams, ParamsError> {
    if data.len() < PARAMS_LEN {
        return Err(ParamsError::TooShort { len: data.len() });
    }
    if let Some(i) = data[..PARAMS_LEN].iter().position(|v| !v.is_finite()) {
        return Err(ParamsError::NotFinite { name: NAMES[i] });
    }

    let (width, height) = (data[0], data[1]);
    if width < 1.0 || height < 1.0 {
        return Err(ParamsError::EmptyViewport { width, height });
    }

    let power = data[3];
    if power < POWER_RANGE.0 || power > POWER_RANGE.1 {
        return Err(ParamsError::PowerOutOfRange(power));
    }

    let offset = Vec3::new(data[4], data[5], data[6]);
    if offset.abs().max_component() > OFFSET_LIMIT {
        log::warn!("fractal offset {offset:?} outside ±{OFFSET_LIMIT}; it may leave the view");
    }

    let mut params = RenderParams::for_viewport(width, height);
    params.time = data[2];
    params.power = power;
    params.offset = offset;
    params.fractal_enabled = data[7] != 0.0;
    params.shading = ShadingMode::from_u32(data[8] as u32);
    Ok(params)
}

/// Inverse of `params_from_buffer`.
pub fn params_to_buffer(params: &RenderParams) -> [f64; PARAMS_LEN] {
    [
        params.viewport_size.x,
        params.viewport_size.y,
        params.time,
        params.power,
        params.offset.x,
        params.offset.y,
        params.offset.z,
        if params.fractal_enabled { 1.0 } else { 0.0 },
        match params.shading {
            ShadingMode::Additive => 0.0,
            ShadingMode::Modulated => 1.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_parse_full_buffer() {
        let params = params_from_buffer(&[1280.0, 720.0, 2.5, 8.0, 0.5, -1.0, 3.0, 1.0, 1.0]).unwrap();
        assert_eq!(params.resolution, Vec2::new(720.0, 720.0));
        assert_eq!(params.viewport_size, Vec2::new(1280.0, 720.0));
        assert_eq!(params.time, 2.5);
        assert_eq!(params.power, 8.0);
        assert_eq!(params.offset, Vec3::new(0.5, -1.0, 3.0));
        assert!(params.fractal_enabled);
        assert_eq!(params.shading, ShadingMode::Modulated);
        assert_eq!(params_to_buffer(&params), [1280.0, 720.0, 2.5, 8.0, 0.5, -1.0, 3.0, 1.0, 1.0]);
    }

    #[test]
    fn test_rejects_short_buffer() {
        assert_eq!(params_from_buffer(&[800.0, 600.0]), Err(ParamsError::TooShort { len: 2 }));
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut data = params_to_buffer(&RenderParams::default());
        data[5] = f64::NAN;
        assert_eq!(params_from_buffer(&data), Err(ParamsError::NotFinite { name: "offset_y" }));
    }

    #[test]
    fn test_rejects_power_outside_host_range() {
        let mut data = params_to_buffer(&RenderParams::default());
        data[3] = 0.5;
        assert_eq!(params_from_buffer(&data), Err(ParamsError::PowerOutOfRange(0.5)));
        data[3] = 10.0;
        assert!(params_from_buffer(&data).is_ok());
    }

    #[test]
    fn test_rejects_empty_viewport() {
        let mut data = params_to_buffer(&RenderParams::default());
        data[1] = 0.0;
        let err = params_from_buffer(&data).unwrap_err();
        assert_eq!(err.to_string(), "viewport 800x0 has no pixels");
    }

    #[test]
    fn test_far_offset_is_accepted() {
        let mut data = params_to_buffer(&RenderParams::default());
        data[4] = -7.0;
        assert_eq!(params_from_buffer(&data).unwrap().offset.x, -7.0);
    }
}
