//! Traits describing the element types vectors and matrices can be built from.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Signed numeric types supporting the four basic arithmetic operations.
///
/// Addition, scaling, dot and cross products, and determinants only require the element type to
/// implement this trait, so they work for signed integers as well as for floats. Inverses,
/// square roots and trigonometry need a [`Float`].
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions needed for rotations and angles.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the arccosine of `self`, in radians.
    fn acos(self) -> Self;
}

/// Floating-point element types.
///
/// Implemented for [`f32`] and [`f64`]. Inverses and operations that need a magnitude or an
/// angle (eg. [`Vector::normalize`][crate::Vector::normalize]) require this trait.
pub trait Float: Number + Sqrt + Trig + PartialOrd {}
impl<T> Float for T where T: Number + Sqrt + Trig + PartialOrd {}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    <$types>::sin(self)
                }

                fn cos(self) -> Self {
                    <$types>::cos(self)
                }

                fn acos(self) -> Self {
                    <$types>::acos(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);
