use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// A 2D point (or vector) in plot data coordinates.
///
/// The curve machinery only needs component access, the usual vector
/// arithmetic and the euclidean norm, so the type stays deliberately small.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    pub fn new(x: F, y: F) -> Self {
        Point2 { x, y }
    }

    /// Returns the squared L2 norm of the point interpreted as a vector.
    pub fn squared_norm(&self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Returns the L2 norm of the point interpreted as a vector.
    pub fn norm(&self) -> F {
        self.squared_norm().sqrt()
    }

    /// Returns the euclidean distance between self and other.
    pub fn distance(&self, other: Self) -> F {
        (*self - other).norm()
    }

    /// True if both coordinates are finite (not NaN, not infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Point2<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Point2<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
