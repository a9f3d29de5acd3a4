//! 2D vector value type used for all kinematic quantities
//!
//! Arithmetic is strictly componentwise (`*` and `/` included), so a scalar
//! has to be broadcast with [`Vector2::scalar_fill`] before it can scale a
//! vector

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use num_traits::{Float, NumCast};

/// Two-component vector `(i, j)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2<T> {
    pub i: T,
    pub j: T,
}

impl<T: Float> Vector2<T> {
    pub fn new(i: T, j: T) -> Self {
        Self { i, j }
    }

    pub fn zeros() -> Self {
        Self::scalar_fill(T::zero())
    }

    /// Vector with both components equal to `x`
    pub fn scalar_fill(x: T) -> Self {
        Self { i: x, j: x }
    }

    /// Euclidean norm sqrt(i^2 + j^2)
    pub fn length(&self) -> T {
        (self.i * self.i + self.j * self.j).sqrt()
    }

    /// Unit vector in the same direction
    /// A zero-length vector gives non-finite components; callers keep
    /// separations above the accuracy threshold instead of checking here
    pub fn normalize(&self) -> Self {
        *self / Self::scalar_fill(self.length())
    }

    pub fn is_finite(&self) -> bool {
        self.i.is_finite() && self.j.is_finite()
    }

    /// Convert components to another float type (e.g. f64 -> f32 for rendering)
    /// Float to float casts round to nearest and saturate to +-inf when the
    /// value is out of the target's range
    pub fn cast<U: Float>(&self) -> Vector2<U> {
        Vector2 {
            i: <U as NumCast>::from(self.i).unwrap_or_else(U::nan),
            j: <U as NumCast>::from(self.j).unwrap_or_else(U::nan),
        }
    }
}

impl<T: Float> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.i + rhs.i, self.j + rhs.j)
    }
}

impl<T: Float> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.i - rhs.i, self.j - rhs.j)
    }
}

impl<T: Float> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.i * rhs.i, self.j * rhs.j)
    }
}

impl<T: Float> Div for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.i / rhs.i, self.j / rhs.j)
    }
}

impl<T: Float> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.i = self.i + rhs.i;
        self.j = self.j + rhs.j;
    }
}

impl<T: Float> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.i = self.i - rhs.i;
        self.j = self.j - rhs.j;
    }
}

impl<T: Float + nalgebra::Scalar> From<nalgebra::Vector2<T>> for Vector2<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Float + nalgebra::Scalar> From<Vector2<T>> for nalgebra::Vector2<T> {
    fn from(v: Vector2<T>) -> Self {
        nalgebra::Vector2::new(v.i, v.j)
    }
}

impl<T: Float> From<[T; 2]> for Vector2<T> {
    fn from(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}
