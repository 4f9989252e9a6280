//! Implementations of `std::ops`.

use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{
    approx::{ApproxEq, Tolerance},
    traits::Number,
};

use super::Vec3;

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, U> PartialEq<[U; 3]> for Vec3<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; 3]) -> bool {
        self.0.eq(other)
    }
}

impl<T> ApproxEq for Vec3<T>
where
    T: ApproxEq,
{
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tolerance: Tolerance<Self::Scalar>) -> bool {
        self.0.approx_eq(&other.0, tolerance)
    }
}

/// Element-wise negation.
impl<T: Number> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Number> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

/// Element-wise addition.
impl<T: Number> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(rhs);
    }
}

/// Element-wise subtraction.
impl<T: Number> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

/// Element-wise subtraction.
impl<T: Number> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.minus(rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

/// Vector-Scalar division.
impl<T: Number> Div<T> for Vec3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

// NB: no element-wise `Vec3 * Vec3`; `dot` and `cross` are the products that exist for vectors
// here, and `*` between vectors would be ambiguous.

#[cfg(test)]
mod tests {
    use crate::vec3;

    #[test]
    fn operators() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v + vec3(9, 8, 7), [10, 10, 10]);
        assert_eq!(v - vec3(1, 1, 1), [0, 1, 2]);
        assert_eq!(-v, [-1, -2, -3]);
        assert_eq!(v * 3, [3, 6, 9]);
        assert_eq!(vec3(2, 4, 6) / 2, [1, 2, 3]);

        v += vec3(1, 1, 1);
        v *= 2;
        v -= vec3(0, 0, 8);
        assert_eq!(v, [4, 6, 0]);
    }
}
