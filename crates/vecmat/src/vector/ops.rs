//! Implementations of `std::ops`.
//!
//! Only the infallible operations get operators. Addition, subtraction and the dot product can
//! fail on mismatched lengths and are exposed as methods returning [`Result`][crate::Result].

use std::ops::{Index, Mul, Neg};

use crate::{
    approx::{ApproxEq, Tolerance},
    traits::Number,
};

use super::Vector;

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl<T> ApproxEq for Vector<T>
where
    T: ApproxEq,
{
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tolerance: Tolerance<Self::Scalar>) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}

/// Element-wise negation.
impl<T: Number> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Element-wise negation.
impl<T: Number> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.map(|&x| -x)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}
