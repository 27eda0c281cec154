//! Barycentric solve and attribute interpolation
//!
//! A screen point `r` is written as `r = p1 + alpha * (p2 - p1) + beta * (p3 - p1)`.
//! The weights come from a closed-form substitution on a 2x2 system, pivoting
//! on the first non-zero component of `p2 - p1` instead of inverting a full
//! 3x3 barycentric matrix.

use std::ops::{Add, Mul, Sub};

use super::math::{Mat2, Vec2};

/// Barycentric weights of a point relative to (p1, p2, p3).
/// The third weight is implicit: `gamma = 1 - alpha - beta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
}

impl Barycentric {
    /// Result for degenerate triangles. Never contained.
    pub const UNDEFINED: Barycentric = Barycentric {
        alpha: f32::NAN,
        beta: f32::NAN,
    };

    pub fn new(alpha: f32, beta: f32) -> Self {
        Self { alpha, beta }
    }

    pub fn is_defined(&self) -> bool {
        !self.alpha.is_nan() && !self.beta.is_nan()
    }

    pub fn gamma(&self) -> f32 {
        1.0 - self.alpha - self.beta
    }

    /// Inclusive test: points on any edge belong to the triangle
    pub fn contains(&self) -> bool {
        self.alpha >= 0.0 && self.beta >= 0.0 && self.alpha + self.beta <= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    /// First axis where `v` is non-zero
    fn pivot(v: Vec2) -> Option<Axis> {
        if v.x != 0.0 {
            Some(Axis::X)
        } else if v.y != 0.0 {
            Some(Axis::Y)
        } else {
            None
        }
    }

    fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Map `r` into the barycentric frame of triangle (p1, p2, p3).
///
/// Returns [`Barycentric::UNDEFINED`] when p1 and p2 coincide or the three
/// points are collinear. No epsilon is applied, so nearly flat triangles
/// yield large but finite weights.
pub fn solve_barycentric(p1: Vec2, p2: Vec2, p3: Vec2, r: Vec2) -> Barycentric {
    let q1 = p2 - p1;
    let q2 = p3 - p1;

    let Some(axis) = Axis::pivot(q1) else {
        return Barycentric::UNDEFINED;
    };

    let det = Mat2::from_rows(q2, q1).det();
    if det == 0.0 {
        return Barycentric::UNDEFINED;
    }

    let d = r - p1;

    // Eliminating alpha from both rows leaves beta independent of the pivot;
    // alpha then comes back from the pivot row.
    let beta = Mat2::from_rows(d, q1).det() / det;
    let alpha = (axis.of(d) - beta * axis.of(q2)) / axis.of(q1);

    Barycentric { alpha, beta }
}

/// Values that can be blended across a triangle
pub trait Attribute: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {}

impl<T> Attribute for T where T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T> {}

/// Affine blend `v1 + alpha * (v2 - v1) + beta * (v3 - v1)`.
///
/// Total for any weights; range checks are the caller's job.
pub fn interpolate<T: Attribute>(v1: T, v2: T, v3: T, weights: Barycentric) -> T {
    v1 + (v2 - v1) * weights.alpha + (v3 - v1) * weights.beta
}
