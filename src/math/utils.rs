/// Scalar helpers used throughout the rendering pipeline.
///
/// `sign` and `atan2` follow GLSL semantics rather than the Rust
/// standard library's, since the distance estimator depends on them.

use std::f64::consts::PI;

/// Clamp a value to [min, max] range.
#[inline(always)]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min { min } else if v > max { max } else { v }
}

/// GLSL `sign`: -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
#[inline(always)]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 { 1.0 } else if v < 0.0 { -1.0 } else { v }
}

/// `atan2` that answers `sign(y) * π/2` on the y axis (`x == 0`),
/// including `0` at the origin.
#[inline(always)]
pub fn atan2(y: f64, x: f64) -> f64 {
    if x == 0.0 {
        sign(y) * PI / 2.0
    } else {
        y.atan2(x)
    }
}

/// Linear interpolation between a and b.
#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Pack a float to a byte [0, 255]. NaN packs to 0.
#[inline(always)]
pub fn float_to_byte(v: f64) -> u8 {
    let vi = (v * 255.0) as i32;
    if vi < 0 { 0 } else if vi > 255 { 255 } else { vi as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn test_atan2_on_y_axis() {
        assert!((atan2(2.0, 0.0) - PI / 2.0).abs() < 1e-12);
        assert!((atan2(-2.0, 0.0) + PI / 2.0).abs() < 1e-12);
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert!((atan2(1.0, 1.0) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-10);
        assert!((lerp(0.0, 10.0, 0.0) - 0.0).abs() < 1e-10);
        assert!((lerp(0.0, 10.0, 1.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_float_to_byte() {
        assert_eq!(float_to_byte(1.0), 255);
        assert_eq!(float_to_byte(0.0), 0);
        assert_eq!(float_to_byte(2.0), 255);
        assert_eq!(float_to_byte(f64::NAN), 0);
    }
}
