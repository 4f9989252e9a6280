use super::{ApproxEq, Tolerance};

macro_rules! float_approx_eq {
    ($($float:ty),+) => {
        $(
            impl ApproxEq for $float {
                type Scalar = Self;

                fn approx_eq(&self, other: &Self, tolerance: Tolerance<Self>) -> bool {
                    match tolerance {
                        // `inf == inf`, `-inf == -inf`, `inf != -inf`, `NaN != NaN`.
                        Tolerance::Abs(_) | Tolerance::Rel(_)
                            if !self.is_finite() || !other.is_finite() =>
                        {
                            self == other
                        }
                        Tolerance::Abs(abs) => (self - other).abs() <= abs,
                        Tolerance::Rel(rel) => {
                            (self - other).abs() <= self.abs().max(other.abs()) * rel
                        }
                        Tolerance::Ulps(_) if self.is_nan() || other.is_nan() => false,
                        // Bit patterns of different signs are not adjacent; only `-0.0 == +0.0`.
                        Tolerance::Ulps(_)
                            if self.is_sign_negative() != other.is_sign_negative() =>
                        {
                            self == other
                        }
                        Tolerance::Ulps(ulps) => {
                            self.to_bits().abs_diff(other.to_bits()) <= ulps.into()
                        }
                    }
                }
            }
        )+
    };
}
float_approx_eq!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &U, tolerance: Tolerance<Self::Scalar>) -> bool {
        T::approx_eq(self, other, tolerance)
    }
}

/// Slices of different lengths are never approximately equal.
impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &[U], tolerance: Tolerance<Self::Scalar>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &[U; N], tolerance: Tolerance<Self::Scalar>) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0, 3.0 + 1e-12];
        assert!(a.approx_eq(&b, Tolerance::Abs(1e-9)));
        assert!(!a.approx_eq(&b, Tolerance::Ulps(0)));
        assert!(!a.as_slice().approx_eq(&b[..2], Tolerance::Abs(1e-9)));
    }
}
