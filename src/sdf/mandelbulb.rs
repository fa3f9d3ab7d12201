/// Escape-time distance estimator for the MandelBulb.
///
/// Iterates `z ← z^power + c` with the spherical power map and returns the
/// classic `0.5 · ln(r) · r / dr` bound. The iteration cap and escape radius
/// are fixed; there is no convergence early-out, so a call never costs more
/// than `MAX_ITERATIONS` rounds.
///
/// A zero-length iterate (e.g. the origin itself) divides by zero inside
/// `acos(z.z / r)`. That is left alone: the estimate comes back NaN and the
/// pixel that asked for it renders undefined, nothing panics.

use crate::math::utils;
use crate::math::Vec3;
use super::DistanceFunction;

/// Iteration cap.
pub const MAX_ITERATIONS: u32 = 15;
/// Escape radius.
pub const BAILOUT: f64 = 2.0;

pub struct Mandelbulb {
    /// Power exponent of the spherical map (≥ 1)
    pub power: f64,
}

impl Mandelbulb {
    pub fn new(power: f64) -> Self {
        Self { power }
    }

    /// Estimate plus the number of completed iterations, for diagnostics.
    pub fn estimate(&self, p: &Vec3) -> (f64, u32) {
        let power = self.power;
        let mut z = *p;
        let mut dr = 1.0;
        let mut r = 0.0;
        let mut iterations = 0;

        for _ in 0..MAX_ITERATIONS {
            r = z.length();
            if r > BAILOUT {
                break;
            }

            let theta = (z.z / r).acos() * power;
            let phi = utils::atan2(z.y, z.x) * power;
            let zr = r.powf(power);
            dr = r.powf(power - 1.0) * power * dr + 1.0;

            let st = theta.sin();
            z = zr * Vec3::new(st * phi.cos(), phi.sin() * st, theta.cos());
            z += *p;
            iterations += 1;
        }

        (0.5 * r.ln() * r / dr, iterations)
    }
}

impl DistanceFunction for Mandelbulb {
    fn name(&self) -> &str { "MandelBulb" }

    fn distance(&self, p: &Vec3) -> f64 {
        self.estimate(p).0
    }
}
