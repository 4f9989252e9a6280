use std::ops::{Index, Mul, Neg};

use crate::{
    approx::{ApproxEq, Tolerance},
    traits::Number,
};

use super::Matrix;

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

/// Matrices of different dimensions are never approximately equal.
impl<T> ApproxEq for Matrix<T>
where
    T: ApproxEq,
{
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tolerance: Tolerance<Self::Scalar>) -> bool {
        self.rows.as_slice().approx_eq(other.rows.as_slice(), tolerance)
    }
}

impl<T: Number> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|&elem| -elem)
    }
}

impl<T: Number> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.map(|&elem| -elem)
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

// NB: `Matrix * Matrix` and `Matrix * Vector` are fallible for run-time dimensions, so they are
// only exposed as `times_matrix` and `times_vector`.

#[cfg(test)]
mod tests {
    use crate::{
        approx::{ApproxEq, Tolerance},
        Matrix,
    };

    #[test]
    fn operators() {
        let mat = Matrix::try_from([[1, -2], [3, 0]]).unwrap();
        assert_eq!(mat[(0, 1)], -2);
        assert_eq!(-&mat, Matrix::try_from([[-1, 2], [-3, 0]]).unwrap());
        assert_eq!(&mat * 2, Matrix::try_from([[2, -4], [6, 0]]).unwrap());
        assert_eq!(-mat.clone() * 1, mat.scale(-1));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Matrix::<i32>::identity(2).unwrap();
        let _ = mat[(0, 2)];
    }

    #[test]
    fn approx_dimension_mismatch() {
        let two = Matrix::<f64>::identity(2).unwrap();
        let three = Matrix::<f64>::identity(3).unwrap();
        assert!(!two.approx_eq(&three, Tolerance::Abs(1.0)));
        assert!(two.approx_eq(&two.scale(1.0 + 1e-9), Tolerance::Abs(1e-6)));
        assert!(!two.approx_eq(&two.scale(1.0 + 1e-9), Tolerance::Ulps(4)));
    }
}
