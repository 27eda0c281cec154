//! Vector and matrix math for screen-space rasterization

use std::ops::{Add, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

/// 3D Vector (positions, colors)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn splat(k: f32) -> Self {
        Self { x: k, y: k, z: k }
    }

    /// Drop Z (projection onto the screen plane)
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn sum_all(self) -> f32 {
        self.x + self.y + self.z
    }

    /// Componentwise product
    pub fn mul_elem(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.mul_elem(other).sum_all()
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l == 0.0 {
            return Vec3::ZERO;
        }
        self.scale(1.0 / l)
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

/// 2D Vector (screen points, texture coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn splat(k: f32) -> Self {
        Self { x: k, y: k }
    }

    pub fn sum_all(self) -> f32 {
        self.x + self.y
    }

    /// Componentwise product
    pub fn mul_elem(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.mul_elem(other).sum_all()
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Vec2 {
        let l = self.len();
        if l == 0.0 {
            return Vec2::ZERO;
        }
        self.scale(1.0 / l)
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        self + (-other)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

/// Row-major 2x2 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    data: [f32; 4],
}

impl Mat2 {
    pub fn new(data: [f32; 4]) -> Self {
        Self { data }
    }

    pub fn from_rows(r0: Vec2, r1: Vec2) -> Self {
        Self::new([r0.x, r0.y, r1.x, r1.y])
    }

    pub fn from_columns(c0: Vec2, c1: Vec2) -> Self {
        Self::new([c0.x, c1.x, c0.y, c1.y])
    }

    pub fn row(&self, i: usize) -> Vec2 {
        let idx = i * 2;
        Vec2::new(self.data[idx], self.data[idx + 1])
    }

    pub fn transform(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.row(0).dot(v), self.row(1).dot(v))
    }

    pub fn det(&self) -> f32 {
        self.data[0] * self.data[3] - self.data[1] * self.data[2]
    }
}

/// Row-major 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [f32; 9],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    pub fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::new([r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z])
    }

    /// Basis matrix: each vector becomes a column
    pub fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::new([c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z])
    }

    pub fn row(&self, i: usize) -> Vec3 {
        let idx = i * 3;
        Vec3::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert_eq!(c, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_vec_arithmetic() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(0.5, 4.0, -1.0);
        assert_eq!(a + b, Vec3::new(1.5, 2.0, 2.0));
        assert_eq!(a - b, Vec3::new(0.5, -6.0, 4.0));
        assert_eq!(-a, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, -4.0, 6.0));
        assert_eq!(a.mul_elem(b), Vec3::new(0.5, -8.0, -3.0));

        let p = Vec2::new(3.0, 4.0);
        assert_eq!(p - Vec2::ONE, Vec2::new(2.0, 3.0));
        assert!((p.len() - 5.0).abs() < 0.0001);
        assert!((p.normalize().len() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_mat2_det_and_transform() {
        let m = Mat2::from_rows(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(m.det(), -2.0);
        assert_eq!(m.row(1), Vec2::new(3.0, 4.0));
        assert_eq!(m.transform(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 7.0));

        let c = Mat2::from_columns(Vec2::new(1.0, 3.0), Vec2::new(2.0, 4.0));
        assert_eq!(c, m);
    }

    #[test]
    fn test_mat3_columns_transform_basis() {
        let m = Mat3::from_columns(Vec3::UP, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        // x maps onto the first column
        assert_eq!(m.transform(Vec3::new(1.0, 0.0, 0.0)), Vec3::UP);
        assert_eq!(Mat3::IDENTITY.transform(Vec3::new(2.0, 3.0, 4.0)), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.row(0), Vec3::new(0.0, 1.0, 0.0));
    }
}
