use std::fmt;

use crate::{
    error::{LinalgError, Result},
    traits::{Float, Number, One, Zero},
    vec3, Matrix, Vec3, Vector,
};

mod ops;

/// A [`Mat3`] with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A [`Mat3`] with [`f64`] elements.
pub type Mat3d = Mat3<f64>;

/// A 3x3 matrix made of three [`Vec3`] rows.
///
/// This is the fixed-size counterpart of [`Matrix`]. Its [`determinant`] and [`inverse`] are
/// computed from closed-form formulas instead of by recursive cofactor expansion, and
/// [`Matrix`] uses them for every 3x3 (sub)matrix it encounters.
///
/// # Element Access
///
/// Rows are stored, columns are assembled on demand. [`Mat3`] implements [`Index`] and
/// [`IndexMut`] for `(row, col)` tuples.
///
/// ```
/// # use vecmat::*;
/// let mat = Mat3::from_rows(vec3(1, 2, 3), vec3(4, 5, 6), vec3(7, 8, 9));
/// assert_eq!(mat[(1, 0)], 4);
/// assert_eq!(mat.second_row(), vec3(4, 5, 6));
/// assert_eq!(mat.second_column(), vec3(2, 5, 8));
/// ```
///
/// [`determinant`]: Mat3::determinant
/// [`inverse`]: Mat3::inverse
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Mat3<T> {
    rows: [Vec3<T>; 3],
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}

impl<T: Zero> Mat3<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec3::ZERO, Vec3::ZERO, Vec3::ZERO],
    };
}

impl<T: Zero + One> Mat3<T> {
    /// The identity matrix.
    ///
    /// Multiplying any vector or matrix with it returns that vector or matrix unchanged.
    pub const IDENTITY: Self = Self {
        rows: [Vec3::X, Vec3::Y, Vec3::Z],
    };
}

impl<T> Mat3<T> {
    /// Creates a matrix from its three rows.
    #[inline]
    pub const fn from_rows(first: Vec3<T>, second: Vec3<T>, third: Vec3<T>) -> Self {
        Self {
            rows: [first, second, third],
        }
    }

    /// Returns the rows of this matrix.
    #[inline]
    pub const fn rows(&self) -> &[Vec3<T>; 3] {
        &self.rows
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Mat3<U>
    where
        F: FnMut(T) -> U,
    {
        Mat3 {
            rows: self.rows.map(|row| row.map(&mut f)),
        }
    }
}

impl<T: Copy> Mat3<T> {
    /// Returns the first row.
    pub fn first_row(&self) -> Vec3<T> {
        self.rows[0]
    }

    /// Returns the second row.
    pub fn second_row(&self) -> Vec3<T> {
        self.rows[1]
    }

    /// Returns the third row.
    pub fn third_row(&self) -> Vec3<T> {
        self.rows[2]
    }

    /// Returns the first column.
    pub fn first_column(&self) -> Vec3<T> {
        let [r0, r1, r2] = &self.rows;
        vec3(r0.x, r1.x, r2.x)
    }

    /// Returns the second column.
    pub fn second_column(&self) -> Vec3<T> {
        let [r0, r1, r2] = &self.rows;
        vec3(r0.y, r1.y, r2.y)
    }

    /// Returns the third column.
    pub fn third_column(&self) -> Vec3<T> {
        let [r0, r1, r2] = &self.rows;
        vec3(r0.z, r1.z, r2.z)
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.first_column(), self.second_column(), self.third_column())
    }
}

impl<T: Number> Mat3<T> {
    /// Multiplies this matrix with a column vector.
    ///
    /// The `*` operator does the same thing.
    pub fn times_vector(&self, v: Vec3<T>) -> Vec3<T> {
        let [r0, r1, r2] = self.rows;
        vec3(r0.dot(v), r1.dot(v), r2.dot(v))
    }

    /// Multiplies this matrix with `m`.
    ///
    /// The `*` operator does the same thing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = Mat3::from_rows(vec3(1, 2, 3), vec3(4, 5, 6), vec3(7, 8, 9));
    /// let b = Mat3::from_rows(vec3(9, 8, 7), vec3(6, 5, 4), vec3(3, 2, 1));
    /// assert_eq!(a.times_matrix(&b), Mat3::from_rows(
    ///     vec3(30, 24, 18),
    ///     vec3(84, 69, 54),
    ///     vec3(138, 114, 90),
    /// ));
    /// ```
    pub fn times_matrix(&self, m: &Self) -> Self {
        let columns = [m.first_column(), m.second_column(), m.third_column()];
        let row = |r: Vec3<T>| vec3(r.dot(columns[0]), r.dot(columns[1]), r.dot(columns[2]));
        let [r0, r1, r2] = self.rows;
        Self::from_rows(row(r0), row(r1), row(r2))
    }

    /// Returns the [determinant] of the matrix, from the six-term Leibniz formula.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows.map(Vec3::into_array);
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Returns the *trace* of the matrix (the sum of the elements on its diagonal).
    pub fn trace(&self) -> T {
        let [r0, r1, r2] = &self.rows;
        r0.x + r1.y + r2.z
    }

    /// Computes the element-wise sum of `self` and `m`.
    pub fn plus(&self, m: &Self) -> Self {
        let [a0, a1, a2] = self.rows;
        let [b0, b1, b2] = m.rows;
        Self::from_rows(a0.plus(b0), a1.plus(b1), a2.plus(b2))
    }

    /// Computes the element-wise difference of `self` and `m`.
    pub fn minus(&self, m: &Self) -> Self {
        let [a0, a1, a2] = self.rows;
        let [b0, b1, b2] = m.rows;
        Self::from_rows(a0.minus(b0), a1.minus(b1), a2.minus(b2))
    }

    /// Multiplies each element by `s`.
    pub fn scale(&self, s: T) -> Self {
        let [r0, r1, r2] = self.rows;
        Self::from_rows(r0.scale(s), r1.scale(s), r2.scale(s))
    }

    /// Returns the matrix `K` for which `K * v == axis.cross(v)` holds for every `v`.
    fn cross_product_matrix(axis: Vec3<T>) -> Self {
        let z = T::ZERO;
        #[rustfmt::skip]
        let k = Self::from_rows(
            vec3(z, -axis.z, axis.y),
            vec3(axis.z, z, -axis.x),
            vec3(-axis.y, axis.x, z),
        );
        k
    }
}

impl<T: Float> Mat3<T> {
    /// Inverts this matrix.
    ///
    /// Each entry of the adjugate is computed directly from its 2x2 cofactor and scaled by the
    /// reciprocal of the determinant.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotInvertible`] if the [`determinant`] is exactly zero. Matrices
    /// that are only *nearly* singular are inverted, and the result may be dominated by rounding
    /// error.
    ///
    /// [`determinant`]: Mat3::determinant
    ///
    /// Integer matrices have to be converted with [`Mat3::map`] first:
    ///
    /// ```compile_fail
    /// # use vecmat::*;
    /// let _ = Mat3::from_rows(vec3(2, 0, 0), vec3(0, 2, 0), vec3(0, 0, 2)).inverse();
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let m = Mat3::from_rows(vec3(1.0, 2.0, 3.0), vec3(0.0, 1.0, 4.0), vec3(5.0, 6.0, 0.0));
    /// assert_eq!(m.inverse()?, Mat3::from_rows(
    ///     vec3(-24.0, 18.0, 5.0),
    ///     vec3(20.0, -15.0, -4.0),
    ///     vec3(-5.0, 4.0, 1.0),
    /// ));
    ///
    /// let singular = Mat3::from_rows(
    ///     vec3(1.0, 2.0, 3.0),
    ///     vec3(4.0, 5.0, 6.0),
    ///     vec3(7.0, 8.0, 9.0),
    /// );
    /// assert_eq!(singular.inverse(), Err(LinalgError::NotInvertible));
    /// # Ok::<(), LinalgError>(())
    /// ```
    #[doc(alias = "invert")]
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(LinalgError::NotInvertible);
        }

        let inv = T::ONE / det;
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows.map(Vec3::into_array);
        #[rustfmt::skip]
        let inverse = Self::from_rows(
            vec3(inv * (e * i - f * h), inv * (c * h - b * i), inv * (b * f - c * e)),
            vec3(inv * (f * g - d * i), inv * (a * i - c * g), inv * (c * d - a * f)),
            vec3(inv * (d * h - e * g), inv * (b * g - a * h), inv * (a * e - b * d)),
        );
        Ok(inverse)
    }

    /// Creates a matrix rotating vectors by `radians` about `axis` (right-hand rule), using
    /// [Rodrigues' rotation formula].
    ///
    /// `axis` does not need to be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateVector`] if `axis` has zero length.
    ///
    /// [Rodrigues' rotation formula]: https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
    pub fn rotation_about_axis(axis: Vec3<T>, radians: T) -> Result<Self> {
        let k = Self::cross_product_matrix(axis.normalize()?);
        let (sin, cos) = (radians.sin(), radians.cos());
        Ok(Self::IDENTITY
            .plus(&k.scale(sin))
            .plus(&k.times_matrix(&k).scale(T::ONE - cos)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Mat3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.rows).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Mat3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r0, r1, r2] = &self.rows;
        write!(f, "({r0}, {r1}, {r2})")
    }
}

impl<T> From<Mat3<T>> for Matrix<T> {
    fn from(value: Mat3<T>) -> Self {
        Matrix::from_rows_unchecked(value.rows.map(Vector::from).into())
    }
}

impl<T: Copy> TryFrom<&Matrix<T>> for Mat3<T> {
    type Error = LinalgError;

    fn try_from(value: &Matrix<T>) -> Result<Self> {
        match value.rows() {
            [r0, r1, r2] => Ok(Self::from_rows(
                Vec3::try_from(r0)?,
                Vec3::try_from(r1)?,
                Vec3::try_from(r2)?,
            )),
            rows => Err(LinalgError::DimensionMismatch {
                expected: 3,
                actual: rows.len(),
            }),
        }
    }
}
