use std::fmt;

use crate::{
    error::{check_len, LinalgError, Result},
    traits::{Float, Number},
    Mat3, Vector,
};

mod ops;

/// Dimension from which [`Matrix::determinant`] and [`Matrix::inverse`] log a debug message
/// about the factorial cost of cofactor expansion.
pub const LARGE_EXPANSION_DIM: usize = 8;

/// A square matrix whose dimension is chosen at run time, made of [`Vector`] rows.
///
/// The shape is validated on construction: a [`Matrix`] always has `N >= 1` rows of exactly `N`
/// elements each. Columns are not stored and are assembled on demand by [`Matrix::column`].
///
/// # Construction
///
/// - [`Matrix::from_rows`] takes a list of row vectors and checks that they form a square.
/// - Square arrays of arrays can be converted with [`TryFrom`].
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::identity`] and [`Matrix::zeros`] create the two most common matrices.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] for `(row, col)` tuples, matching common mathematical
/// notation. Indices are 0-based, and out-of-bounds indexing panics like it does for slices;
/// [`Matrix::get`] returns an [`Option`] instead.
///
/// ```
/// # use vecmat::*;
/// let mat = Matrix::try_from([
///     [0, 1],
///     [2, 3],
/// ])?;
/// assert_eq!(mat[(1, 0)], 2);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// # Ok::<(), LinalgError>(())
/// ```
///
/// # Determinants and Inverses
///
/// [`Matrix::determinant`] uses recursive cofactor (Laplace) expansion along the first row, and
/// [`Matrix::inverse`] scales the adjugate by the reciprocal of the determinant. 3x3 matrices,
/// including every 3x3 minor encountered during the recursion, are handled by the closed-form
/// formulas of [`Mat3`].
///
/// The cost of both operations grows with the factorial of the dimension, and the recursion depth
/// grows linearly with it. They are meant for small matrices. No pivoting or decomposition is
/// performed.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T> Matrix<T> {
    /// Creates a [`Matrix`] from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `rows` is empty, and [`LinalgError::Shape`] if any row's
    /// length differs from the number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let rows = [Vector::new([1, 2])?, Vector::new([3, 4])?];
    /// let mat = Matrix::from_rows(rows)?;
    /// assert_eq!(mat.dim(), 2);
    ///
    /// let ragged = [Vector::new([1, 2])?, Vector::new([3, 4, 5])?];
    /// assert_eq!(
    ///     Matrix::from_rows(ragged),
    ///     Err(LinalgError::Shape { row: 1, len: 3, rows: 2 }),
    /// );
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn from_rows(rows: impl Into<Vec<Vector<T>>>) -> Result<Self> {
        let rows = rows.into();
        if rows.is_empty() {
            return Err(LinalgError::Empty);
        }
        if let Some((row, v)) = rows.iter().enumerate().find(|(_, v)| v.len() != rows.len()) {
            return Err(LinalgError::Shape {
                row,
                len: v.len(),
                rows: rows.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Wraps rows already known to form a non-empty square.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vector<T>>) -> Self {
        debug_assert!(!rows.is_empty() && rows.iter().all(|v| v.len() == rows.len()));
        Self { rows }
    }

    /// Creates a `dim`x`dim` [`Matrix`] by invoking a closure with the position (row and column)
    /// of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mat = Matrix::from_fn(2, |row, col| row * 10 + col)?;
    /// assert_eq!(mat, Matrix::try_from([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ])?);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn from_fn<F>(dim: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if dim == 0 {
            return Err(LinalgError::Empty);
        }
        Ok(Self::from_fn_unchecked(dim, cb))
    }

    fn from_fn_unchecked<F>(dim: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let rows = (0..dim)
            .map(|row| Vector::from_vec_unchecked((0..dim).map(|col| cb(row, col)).collect()))
            .collect();
        Self::from_rows_unchecked(rows)
    }

    /// Returns the dimension of this matrix (its number of rows, which equals its number of
    /// columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows of this matrix.
    #[inline]
    pub fn rows(&self) -> &[Vector<T>] {
        &self.rows
    }

    /// Returns the row at index `row`, or [`None`] if out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&Vector<T>> {
        self.rows.get(row)
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|v| v.get(col))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            rows: self.rows.iter().map(|row| row.map(&mut f)).collect(),
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns the column at index `col`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mat = Matrix::try_from([
    ///     [1, 2],
    ///     [3, 4],
    /// ])?;
    /// assert_eq!(mat.column(1), Some(Vector::new([2, 4])?));
    /// assert_eq!(mat.column(2), None);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn column(&self, col: usize) -> Option<Vector<T>> {
        (col < self.dim()).then(|| self.column_unchecked(col))
    }

    fn column_unchecked(&self, col: usize) -> Vector<T> {
        Vector::from_vec_unchecked(self.rows.iter().map(|row| row[col]).collect())
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn_unchecked(self.dim(), |row, col| self.rows[col][row])
    }

    /// Returns the submatrix obtained by removing row `row` and column `col`.
    ///
    /// Returns [`None`] if either index is out of bounds, or if the matrix is 1x1 (which has no
    /// non-empty minors).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mat = Matrix::try_from([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ])?;
    /// assert_eq!(mat.minor(1, 1), Some(Matrix::try_from([[1, 3], [7, 9]])?));
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Option<Self> {
        let dim = self.dim();
        (dim > 1 && row < dim && col < dim).then(|| self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(r, _)| r != row)
            .map(|(_, v)| {
                let elems = v
                    .iter()
                    .enumerate()
                    .filter(|&(c, _)| c != col)
                    .map(|(_, &elem)| elem)
                    .collect();
                Vector::from_vec_unchecked(elems)
            })
            .collect();
        Self::from_rows_unchecked(rows)
    }
}

impl<T: Number> Matrix<T> {
    /// Creates a `dim`x`dim` matrix with every element set to 0.
    pub fn zeros(dim: usize) -> Result<Self> {
        Self::from_fn(dim, |_, _| T::ZERO)
    }

    /// Creates the `dim`x`dim` identity matrix, with 1 on its diagonal and 0 everywhere else.
    pub fn identity(dim: usize) -> Result<Self> {
        Self::from_fn(dim, |row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Multiplies this matrix with the column vector `v`.
    ///
    /// Element `i` of the result is the dot product of row `i` with `v`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `v` does not have [`Matrix::dim`] elements.
    pub fn times_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        check_len(self.dim(), v.len())?;
        Ok(Vector::from_vec_unchecked(
            self.rows.iter().map(|row| row.dot_unchecked(v)).collect(),
        ))
    }

    /// Multiplies this matrix with `m`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the matrices have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = Matrix::try_from([[1, 2], [3, 4]])?;
    /// let b = Matrix::try_from([[5, 6], [7, 8]])?;
    /// assert_eq!(a.times_matrix(&b)?, Matrix::try_from([[19, 22], [43, 50]])?);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn times_matrix(&self, m: &Self) -> Result<Self> {
        check_len(self.dim(), m.dim())?;
        let columns = (0..m.dim())
            .map(|col| m.column_unchecked(col))
            .collect::<Vec<_>>();
        Ok(Self::from_fn_unchecked(self.dim(), |row, col| {
            self.rows[row].dot_unchecked(&columns[col])
        }))
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// 1x1 and 2x2 matrices use their direct formulas, 3x3 matrices the closed form of
    /// [`Mat3::determinant`]. Larger matrices are expanded along their first row: each element
    /// is multiplied with its cofactor, and the products are summed up.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// #[rustfmt::skip]
    /// let mat = Matrix::try_from([
    ///     [2, 0, 0, 0],
    ///     [1, 3, 0, 0],
    ///     [4, 1, 5, 0],
    ///     [9, 2, 6, 7],
    /// ])?;
    /// assert_eq!(mat.determinant(), 2 * 3 * 5 * 7);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn determinant(&self) -> T {
        log::trace!(
            "determinant of {0}x{0} matrix via {1}",
            self.dim(),
            if self.dim() <= 3 { "closed form" } else { "cofactor expansion" },
        );
        if self.dim() >= LARGE_EXPANSION_DIM {
            log::debug!(
                "cofactor expansion of a {0}x{0} matrix; this costs O({0}!)",
                self.dim()
            );
        }
        self.det()
    }

    /// Determinant without the size warning, used for the minors during recursion.
    fn det(&self) -> T {
        if let Ok(mat3) = Mat3::try_from(self) {
            return mat3.determinant();
        }

        match self.dim() {
            1 => self.rows[0][0],
            2 => self.rows[0][0] * self.rows[1][1] - self.rows[0][1] * self.rows[1][0],
            _ => self.rows[0]
                .iter()
                .enumerate()
                .fold(T::ZERO, |acc, (col, &elem)| {
                    acc + alternate_sign(col, elem) * self.minor_unchecked(0, col).det()
                }),
        }
    }

    /// Returns the cofactor of the element at `(row, col)`: the determinant of the corresponding
    /// [minor], negated if `row + col` is odd.
    ///
    /// The only cofactor of a 1x1 matrix is 1. Returns [`None`] if either index is out of bounds.
    ///
    /// [minor]: Matrix::minor
    pub fn cofactor(&self, row: usize, col: usize) -> Option<T> {
        (row < self.dim() && col < self.dim()).then(|| self.cofactor_unchecked(row, col))
    }

    fn cofactor_unchecked(&self, row: usize, col: usize) -> T {
        if self.dim() == 1 {
            return T::ONE;
        }
        alternate_sign(row + col, self.minor_unchecked(row, col).det())
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Matrix::<i32>::identity(5)?.trace(), 5);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn trace(&self) -> T {
        self.rows
            .iter()
            .enumerate()
            .fold(T::ZERO, |acc, (i, row)| acc + row[i])
    }

    /// Computes the element-wise sum of `self` and `m`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the matrices have different dimensions.
    pub fn plus(&self, m: &Self) -> Result<Self> {
        self.zip_rows(m, Vector::plus)
    }

    /// Computes the element-wise difference of `self` and `m`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the matrices have different dimensions.
    pub fn minus(&self, m: &Self) -> Result<Self> {
        self.zip_rows(m, Vector::minus)
    }

    /// Multiplies each element by `s`.
    pub fn scale(&self, s: T) -> Self {
        Self::from_rows_unchecked(self.rows.iter().map(|row| row.scale(s)).collect())
    }

    fn zip_rows<F>(&self, m: &Self, f: F) -> Result<Self>
    where
        F: Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    {
        check_len(self.dim(), m.dim())?;
        let rows = self
            .rows
            .iter()
            .zip(&m.rows)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows_unchecked(rows))
    }
}

impl<T: Float> Matrix<T> {
    /// Inverts this matrix.
    ///
    /// The inverse is the adjugate (the transposed matrix of [cofactors]) divided by the
    /// [determinant]. 3x3 matrices are inverted by [`Mat3::inverse`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotInvertible`] if the determinant is exactly zero. There is no
    /// tolerance: a matrix that is singular in exact arithmetic may still be inverted if rounding
    /// makes its determinant non-zero.
    ///
    /// [cofactors]: Matrix::cofactor
    /// [determinant]: Matrix::determinant
    ///
    /// Only floating-point matrices can be inverted. The inverse of an integer matrix is
    /// generally not an integer matrix, so convert it first:
    ///
    /// ```compile_fail
    /// # use vecmat::*;
    /// let _ = Matrix::try_from([[2, 0], [0, 2]]).unwrap().inverse();
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mat = Matrix::try_from([[4.0, 7.0], [2.0, 6.0]])?;
    /// let expected = Matrix::try_from([[0.6, -0.7], [-0.2, 0.4]])?;
    /// assert_approx_eq!(mat.inverse()?, expected).abs(1e-12);
    ///
    /// let singular = Matrix::try_from([[1.0, 2.0], [2.0, 4.0]])?;
    /// assert_eq!(singular.inverse(), Err(LinalgError::NotInvertible));
    /// # Ok::<(), LinalgError>(())
    /// ```
    #[doc(alias = "invert")]
    pub fn inverse(&self) -> Result<Self> {
        if let Ok(mat3) = Mat3::try_from(self) {
            log::trace!("inverting 3x3 matrix in closed form");
            return mat3.inverse().map(Self::from);
        }

        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("{0}x{0} matrix has a determinant of 0", self.dim());
            return Err(LinalgError::NotInvertible);
        }

        log::trace!("inverting {0}x{0} matrix via its adjugate", self.dim());
        let cofactors = Self::from_fn_unchecked(self.dim(), |row, col| {
            self.cofactor_unchecked(row, col)
        });
        Ok(cofactors.transpose().scale(T::ONE / det))
    }
}

/// Returns `value`, negated if `index` is odd.
fn alternate_sign<T: Number>(index: usize, value: T) -> T {
    if index % 2 == 0 {
        value
    } else {
        -value
    }
}

impl<T, const N: usize> TryFrom<[[T; N]; N]> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(value: [[T; N]; N]) -> Result<Self> {
        Self::from_rows(
            value
                .into_iter()
                .map(Vector::new)
                .collect::<Result<Vec<_>>>()?,
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows are kept on a single line even with `{:#?}`.
        struct FormatRow<'a, T>(&'a Vector<T>);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.rows.iter().map(FormatRow))
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, test::init_logger};

    use super::*;

    fn m<const N: usize>(rows: [[f64; N]; N]) -> Matrix<f64> {
        Matrix::try_from(rows).unwrap()
    }

    fn ascending() -> Matrix<f64> {
        m([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    fn descending() -> Matrix<f64> {
        m([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]])
    }

    #[rustfmt::skip]
    fn four() -> Matrix<f64> {
        m([
            [ 3.0, 2.0, 0.0, 1.0],
            [ 4.0, 0.0, 1.0, 2.0],
            [ 3.0, 0.0, 2.0, 1.0],
            [ 9.0, 2.0, 3.0, 1.0],
        ])
    }

    /// Reference determinant: plain first-row expansion all the way down to 1x1, without the
    /// 3x3 fast path.
    fn expand(mat: &Matrix<f64>) -> f64 {
        if mat.dim() == 1 {
            return mat[(0, 0)];
        }
        (0..mat.dim())
            .map(|col| {
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                sign * mat[(0, col)] * expand(&mat.minor(0, col).unwrap())
            })
            .sum()
    }

    #[test]
    fn shape_validation() {
        assert_eq!(Matrix::<f64>::from_rows(Vec::new()), Err(LinalgError::Empty));
        assert_eq!(Matrix::<f64>::identity(0), Err(LinalgError::Empty));

        let rows = vec![
            Vector::new([1.0, 2.0]).unwrap(),
            Vector::new([3.0, 4.0]).unwrap(),
            Vector::new([5.0, 6.0]).unwrap(),
        ];
        assert_eq!(
            Matrix::from_rows(rows),
            Err(LinalgError::Shape {
                row: 0,
                len: 2,
                rows: 3
            })
        );
    }

    #[test]
    fn plus_minus_scale() {
        assert_eq!(ascending().plus(&descending()).unwrap(), m([[10.0; 3]; 3]));
        assert_eq!(
            ascending().minus(&descending()).unwrap(),
            m([[-8.0, -6.0, -4.0], [-2.0, 0.0, 2.0], [4.0, 6.0, 8.0]])
        );
        assert_eq!(
            ascending().scale(2.0),
            m([[2.0, 4.0, 6.0], [8.0, 10.0, 12.0], [14.0, 16.0, 18.0]])
        );
        assert_eq!(
            ascending().plus(&four()),
            Err(LinalgError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn products() {
        assert_eq!(
            ascending().times_matrix(&descending()).unwrap(),
            m([[30.0, 24.0, 18.0], [84.0, 69.0, 54.0], [138.0, 114.0, 90.0]])
        );
        assert_eq!(
            four().times_matrix(&Matrix::identity(4).unwrap()).unwrap(),
            four()
        );
        assert!(four().times_matrix(&ascending()).is_err());

        let v = Vector::new([1.0, 0.0, -1.0]).unwrap();
        assert_eq!(ascending().times_vector(&v).unwrap(), [-2.0, -2.0, -2.0]);
        assert_eq!(
            four().times_vector(&v),
            Err(LinalgError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn columns_and_transpose() {
        assert_eq!(ascending().column(0).unwrap(), [1.0, 4.0, 7.0]);
        assert_eq!(ascending().transpose(), m([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]));
        assert_eq!(four().transpose().transpose(), four());
        assert_eq!(four().trace(), 6.0);
    }

    #[test]
    fn small_determinants() {
        assert_eq!(m([[-4.0]]).determinant(), -4.0);
        assert_eq!(m([[1.0, 2.0], [3.0, 4.0]]).determinant(), -2.0);
        assert_eq!(ascending().determinant(), 0.0);
        assert_eq!(Matrix::<f64>::identity(3).unwrap().determinant(), 1.0);
    }

    #[test]
    fn expansion_agrees_with_closed_form() {
        let invertible = m([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        for mat in [ascending(), descending(), invertible] {
            assert_eq!(mat.determinant(), expand(&mat));
        }
        assert_eq!(four().determinant(), expand(&four()));
        assert_eq!(four().determinant(), 24.0);
    }

    #[test]
    fn large_determinant() {
        init_logger();

        // Lower triangular: the determinant is the product of the diagonal.
        let mat = Matrix::from_fn(LARGE_EXPANSION_DIM, |row, col| {
            if col > row {
                0
            } else if col == row {
                row as i64 + 1
            } else {
                (row * 3 + col) as i64 % 5
            }
        })
        .unwrap();
        assert_eq!(mat.determinant(), (1..=LARGE_EXPANSION_DIM as i64).product::<i64>());
    }

    #[test]
    fn cofactors() {
        let mat = ascending();
        assert_eq!(mat.cofactor(0, 0), Some(-3.0));
        assert_eq!(mat.cofactor(0, 1), Some(6.0));
        assert_eq!(mat.cofactor(3, 0), None);
        assert_eq!(m([[7.0]]).cofactor(0, 0), Some(1.0));
        assert_eq!(m([[7.0]]).minor(0, 0), None);
    }

    #[test]
    fn inverse() {
        init_logger();

        assert_eq!(ascending().inverse(), Err(LinalgError::NotInvertible));
        assert_eq!(
            m([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]).inverse().unwrap(),
            m([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]])
        );
        assert_eq!(m([[4.0]]).inverse().unwrap(), m([[0.25]]));

        let inv = four().inverse().unwrap();
        assert_approx_eq!(inv.times_matrix(&four()).unwrap(), Matrix::identity(4).unwrap())
            .abs(1e-12);

        #[rustfmt::skip]
        let singular = m([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 1.0],
            [5.0, 0.0, 2.0, 1.0],
        ]);
        assert_eq!(singular.inverse(), Err(LinalgError::NotInvertible));
    }

    #[test]
    fn integer_elements() {
        let mat = Matrix::try_from([[2, 1], [1, 2]]).unwrap();
        assert_eq!(mat.determinant(), 3);
        assert_eq!(mat.cofactor(0, 1), Some(-1));
        assert_eq!(mat.times_matrix(&mat).unwrap(), Matrix::try_from([[5, 4], [4, 5]]).unwrap());

        // Inverting requires converting to floats, which keeps the fractional entries.
        let inv = mat.map(|&e| e as f64).inverse().unwrap();
        let expected = m([[2.0, -1.0], [-1.0, 2.0]]).scale(1.0 / 3.0);
        assert_approx_eq!(inv, expected).abs(1e-12);

        let doubled = Matrix::try_from([[2, 0], [0, 2]]).unwrap();
        assert_eq!(doubled.map(|&e| e as f64).inverse().unwrap(), m([[0.5, 0.0], [0.0, 0.5]]));
    }

    #[test]
    fn fmt() {
        let mat = m([[0.0, 1.0], [2.0, 3.0]]);
        assert_eq!(mat.to_string(), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.0],
]
"
            .trim()
        );
    }
}
