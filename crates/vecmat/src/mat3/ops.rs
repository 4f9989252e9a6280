use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{
    approx::{ApproxEq, Tolerance},
    traits::Number,
    Vec3,
};

use super::Mat3;

impl<T> Index<(usize, usize)> for Mat3<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat3<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

impl<T> ApproxEq for Mat3<T>
where
    T: ApproxEq,
{
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tolerance: Tolerance<Self::Scalar>) -> bool {
        self.rows.approx_eq(&other.rows, tolerance)
    }
}

impl<T: Number> Add for Mat3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl<T: Number> Sub for Mat3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(&rhs)
    }
}

impl<T: Number> Neg for Mat3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Matrix * Column Vector.
impl<T: Number> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.times_vector(rhs)
    }
}

/// Matrix * Matrix.
impl<T: Number> Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times_matrix(&rhs)
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat3};

    #[test]
    fn operators() {
        let mut m = Mat3::from_rows(vec3(1, 2, 3), vec3(0, 1, 4), vec3(5, 6, 0));
        assert_eq!(m[(2, 1)], 6);
        m[(2, 2)] = 1;
        assert_eq!(m.third_row(), vec3(5, 6, 1));

        assert_eq!(m * Mat3::IDENTITY, m);
        assert_eq!(m * vec3(1, 0, 0), m.first_column());
        assert_eq!(m + -m, Mat3::ZERO);
        assert_eq!(m - m, m * 0);
    }
}
