/// Vector and matrix value types with f64 precision.
///
/// Layout follows the GLSL conventions the renderer was first written
/// against: `Vec3` is a plain xyz triple, `Mat4` is stored row-major and
/// applied to column vectors (`M * v`).

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use super::utils::lerp;

/// 2D vector — pixel coordinates, viewport and resolution sizes.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    #[inline(always)]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

/// Component-wise division.
impl Div for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    fn div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// 3D vector — points, directions and RGB colors.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::splat(0.0);

    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    #[inline(always)]
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline(always)]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. Vectors shorter than 1e-30
    /// come back unchanged.
    #[inline(always)]
    pub fn normalized(&self) -> Vec3 {
        let len = self.length();
        if len > 1e-30 {
            *self * (1.0 / len)
        } else {
            *self
        }
    }

    #[inline(always)]
    pub fn abs(&self) -> Vec3 {
        Vec3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise `max(v, s)`.
    #[inline(always)]
    pub fn max_scalar(&self, s: f64) -> Vec3 {
        Vec3::new(self.x.max(s), self.y.max(s), self.z.max(s))
    }

    #[inline(always)]
    pub fn max_component(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    #[inline(always)]
    pub fn xz(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Component-wise linear interpolation.
    #[inline(always)]
    pub fn lerp(&self, other: &Vec3, t: f64) -> Vec3 {
        Vec3::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t), lerp(self.z, other.z, t))
    }

    /// Component-wise clamp into [min, max]. NaN components stay NaN.
    #[inline(always)]
    pub fn clamp(&self, min: f64, max: f64) -> Vec3 {
        Vec3::new(self.x.clamp(min, max), self.y.clamp(min, max), self.z.clamp(min, max))
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// 4×4 affine transform, row-major, applied as `M * (p, 1)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub m: [[f64; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn identity() -> Self {
        Mat4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Identity with the translation column set to `t`.
    pub const fn translation(t: Vec3) -> Self {
        Mat4 {
            m: [
                [1.0, 0.0, 0.0, t.x],
                [0.0, 1.0, 0.0, t.y],
                [0.0, 0.0, 1.0, t.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Inverse of a pure translation by `offset`: moves query points by
    /// `-offset`, which places a shape at `offset` in world space.
    pub fn inverse_translation(offset: Vec3) -> Self {
        Self::translation(-offset)
    }

    /// Apply to a point (w = 1) and drop the w row.
    #[inline]
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        let m = &self.m;
        Vec3 {
            x: m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            y: m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            z: m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        }
    }

    /// Multiply two matrices: result = A * B
    pub fn mul(&self, other: &Mat4) -> Mat4 {
        let mut result = Mat4 { m: [[0.0; 4]; 4] };
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                               + self.m[i][1] * other.m[1][j]
                               + self.m[i][2] * other.m[2][j]
                               + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }
}
