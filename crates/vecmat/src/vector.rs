use std::{fmt, slice};

use itertools::Itertools;

use crate::{
    error::{check_len, LinalgError, Result},
    traits::{Float, Number},
    Vec3,
};

mod ops;

/// A vector whose length is chosen at run time, storing elements of type `T`.
///
/// A [`Vector`] always has at least one element, and its length never changes after
/// construction. Binary operations ([`Vector::plus`], [`Vector::minus`], [`Vector::dot`]) check
/// that both operands have the same length and return [`LinalgError::DimensionMismatch`]
/// otherwise, instead of silently truncating.
///
/// For 3-dimensional math with named components and no length checks, use [`Vec3`].
///
/// # Construction
///
/// - [`Vector::new`] takes the elements from anything convertible into a [`Vec`], including
///   arrays.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::splat`] and [`Vector::zeros`] fill a vector with a single value.
/// - [`Vector::unit`] creates a unit vector along one axis.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let a = Vector::new([1, 2, 3])?;
/// let b = Vector::new([9, 8, 7])?;
/// assert_eq!(a.plus(&b)?, Vector::splat(3, 10)?);
/// assert_eq!(a.to_string(), "[1, 2, 3]");
/// # Ok::<(), LinalgError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T>(Vec<T>);

impl<T> Vector<T> {
    /// Creates a vector from its elements.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `elems` contains no elements.
    pub fn new(elems: impl Into<Vec<T>>) -> Result<Self> {
        let elems = elems.into();
        if elems.is_empty() {
            return Err(LinalgError::Empty);
        }
        Ok(Self(elems))
    }

    /// Wraps elements already known to be non-empty.
    pub(crate) fn from_vec_unchecked(elems: Vec<T>) -> Self {
        debug_assert!(!elems.is_empty());
        Self(elems)
    }

    /// Creates a vector of length `len` by invoking `cb` with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = Vector::from_fn(3, |i| i * 10)?;
    /// assert_eq!(v.as_slice(), &[0, 10, 20]);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn from_fn<F>(len: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        Self::new((0..len).map(cb).collect::<Vec<_>>())
    }

    /// Creates a vector of length `len` with every element set to `elem`.
    pub fn splat(len: usize, elem: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(vec![elem; len])
    }

    /// Returns the number of elements (the dimension) of this vector.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Converts this vector into its underlying [`Vec`].
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Applies a closure to each element, returning a new vector of the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = Vector::new([1, 2, 3])?.map(|x| x * x);
    /// assert_eq!(v, Vector::new([1, 4, 9])?);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn map<U, F>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector(self.0.iter().map(f).collect())
    }

    /// Combines `self` and `other` element by element, after checking that their lengths agree.
    fn zip_with<U, F>(&self, other: &Self, mut f: F) -> Result<Vector<U>>
    where
        F: FnMut(&T, &T) -> U,
    {
        check_len(self.len(), other.len())?;
        Ok(Vector(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(a, b)| f(a, b))
                .collect(),
        ))
    }
}

impl<T: Number> Vector<T> {
    /// Creates a vector of length `len` filled with zeroes.
    pub fn zeros(len: usize) -> Result<Self> {
        Self::splat(len, T::ZERO)
    }

    /// Creates a vector of length `len` whose element `axis` is one, and every other element is
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `len` is 0, and [`LinalgError::DimensionMismatch`] if
    /// `axis` is not less than `len`.
    pub fn unit(len: usize, axis: usize) -> Result<Self> {
        if axis >= len && len != 0 {
            return Err(LinalgError::DimensionMismatch {
                expected: len,
                actual: axis + 1,
            });
        }
        Self::from_fn(len, |i| if i == axis { T::ONE } else { T::ZERO })
    }

    /// Computes the element-wise sum of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the vectors have different lengths.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |&a, &b| a + b)
    }

    /// Computes the element-wise difference of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the vectors have different lengths.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |&a, &b| a - b)
    }

    /// Multiplies each element by `s`.
    ///
    /// The `*` operator does the same thing.
    pub fn scale(&self, s: T) -> Self {
        self.map(|&x| x * s)
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the vectors have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = Vector::new([1, 2, 3])?;
    /// let b = Vector::new([4, 5, 6])?;
    /// assert_eq!(a.dot(&b)?, 32);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        check_len(self.len(), other.len())?;
        Ok(self.dot_unchecked(other))
    }

    /// Dot product for operands whose lengths the caller has already checked.
    pub(crate) fn dot_unchecked(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(&other.0)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimensionality`] unless both vectors have exactly 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = Vector::new([1, 2, 3])?;
    /// let b = Vector::new([4, 5, 6])?;
    /// assert_eq!(a.cross(&b)?, Vector::new([-3, 6, -3])?);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let a = Vec3::try_from_dimensionality(self)?;
        let b = Vec3::try_from_dimensionality(other)?;
        Ok(a.cross(b).into())
    }
}

impl<T: Float> Vector<T> {
    /// Returns the length (Euclidean norm) of this vector.
    #[doc(alias = "length")]
    #[doc(alias = "norm")]
    pub fn magnitude(&self) -> T {
        self.dot_unchecked(self).sqrt()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateVector`] if the magnitude is zero.
    pub fn normalize(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO {
            return Err(LinalgError::DegenerateVector);
        }
        Ok(self.scale(T::ONE / magnitude))
    }

    /// Rotates this vector by `radians` about `axis`, following the right-hand rule.
    ///
    /// `axis` does not need to be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Dimensionality`] unless both `self` and `axis` have 3 elements,
    /// and [`LinalgError::DegenerateVector`] if `axis` has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector::new([1.0, 0.0, 0.0])?;
    /// let axis = Vector::new([0.0, 0.0, 1.0])?;
    /// let rotated = v.rotate_about_axis(&axis, FRAC_PI_2)?;
    /// assert_approx_eq!(rotated, Vector::new([0.0, 1.0, 0.0])?).abs(1e-12);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn rotate_about_axis(&self, axis: &Self, radians: T) -> Result<Self> {
        let v = Vec3::try_from_dimensionality(self)?;
        let axis = Vec3::try_from_dimensionality(axis)?;
        Ok(v.rotate_about_axis(axis, radians)?.into())
    }

    /// Computes the angle between `self` and `other`, in radians (between 0 and π).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the lengths differ, and
    /// [`LinalgError::DegenerateVector`] if either vector has zero length.
    pub fn angle_to(&self, other: &Self) -> Result<T> {
        let dot = self.dot(other)?;
        angle_from_cosine(dot, self.magnitude() * other.magnitude())
    }
}

/// Computes `acos(dot / magnitudes)`, clamping the cosine to `[-1, 1]` so that rounding cannot
/// push it outside the domain of `acos`.
pub(crate) fn angle_from_cosine<T: Float>(dot: T, magnitudes: T) -> Result<T> {
    if magnitudes == T::ZERO {
        return Err(LinalgError::DegenerateVector);
    }
    let cos = dot / magnitudes;
    let cos = if cos > T::ONE {
        T::ONE
    } else if cos < -T::ONE {
        -T::ONE
    } else {
        cos
    };
    Ok(cos.acos())
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().format(", "))
    }
}

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = LinalgError;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Self::new(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.0
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    fn v<const N: usize>(elems: [f64; N]) -> Vector<f64> {
        Vector::new(elems).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(Vector::<f64>::new(Vec::new()), Err(LinalgError::Empty));
        assert_eq!(Vector::<i32>::zeros(0), Err(LinalgError::Empty));
        assert_eq!(Vector::<i32>::zeros(2).unwrap().as_slice(), &[0, 0]);
        assert_eq!(Vector::<i32>::unit(3, 1).unwrap().as_slice(), &[0, 1, 0]);
        assert_eq!(
            Vector::<i32>::unit(3, 3),
            Err(LinalgError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
        assert_eq!(Vector::try_from(vec![1, 2]).unwrap().len(), 2);
    }

    #[test]
    fn plus_minus() {
        assert_eq!(v([1.0, 2.0, 3.0]).plus(&v([9.0, 8.0, 7.0])).unwrap(), v([10.0; 3]));
        assert_eq!(
            v([1.0, 2.0, 3.0]).minus(&v([4.0, 5.0, 6.0])).unwrap(),
            v([-3.0; 3])
        );
        assert_eq!(
            v([1.0, 2.0]).plus(&v([1.0, 2.0, 3.0])),
            Err(LinalgError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn operands_untouched() {
        let a = v([1.0, 2.0, 3.0]);
        let b = v([4.0, 5.0, 6.0]);
        let _ = a.plus(&b).unwrap();
        let _ = a.scale(2.0);
        assert_eq!(a, v([1.0, 2.0, 3.0]));
        assert_eq!(b, v([4.0, 5.0, 6.0]));
    }

    #[test]
    fn scale() {
        let a = v([1.0, 2.0, 3.0]);
        assert_eq!(a.scale(2.0), v([2.0, 4.0, 6.0]));
        assert_eq!(a.scale(1.0), a);
        assert_eq!(a.scale(0.0), Vector::zeros(3).unwrap());
    }

    #[test]
    fn dot() {
        assert_eq!(v([1.0, 2.0, 3.0]).dot(&v([4.0, 5.0, 6.0])), Ok(32.0));
        assert_eq!(v([0.0; 4]).dot(&v([7.0, -1.0, 3.0, 2.0])), Ok(0.0));
        assert!(v([1.0]).dot(&v([1.0, 2.0])).is_err());
    }

    #[test]
    fn cross() {
        assert_eq!(
            v([1.0, 2.0, 3.0]).cross(&v([4.0, 5.0, 6.0])).unwrap(),
            v([-3.0, 6.0, -3.0])
        );
        assert_eq!(
            v([1.0, 2.0]).cross(&v([4.0, 5.0])),
            Err(LinalgError::Dimensionality { len: 2 })
        );
        assert_eq!(
            v([1.0, 2.0, 3.0]).cross(&v([4.0, 5.0, 6.0, 7.0])),
            Err(LinalgError::Dimensionality { len: 4 })
        );
    }

    #[test]
    fn magnitude_normalize() {
        assert_eq!(v([3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(v([0.0, 0.0, 4.0]).normalize().unwrap(), v([0.0, 0.0, 1.0]));
        let unit = v([1.0, 2.0, 3.0, 4.0]).normalize().unwrap();
        assert_approx_eq!(unit.magnitude(), 1.0).abs(1e-12);
        assert_eq!(
            v([0.0, 0.0]).normalize(),
            Err(LinalgError::DegenerateVector)
        );
    }

    #[test]
    fn rotate() {
        let rotated = v([1.0, 0.0, 0.0])
            .rotate_about_axis(&v([0.0, 0.0, 1.0]), FRAC_PI_2)
            .unwrap();
        assert_approx_eq!(rotated, v([0.0, 1.0, 0.0])).abs(1e-12);

        // The axis is normalized before use.
        let rotated = v([1.0, 0.0, 0.0])
            .rotate_about_axis(&v([0.0, 0.0, 5.0]), PI)
            .unwrap();
        assert_approx_eq!(rotated, v([-1.0, 0.0, 0.0])).abs(1e-12);

        assert_eq!(
            v([1.0, 0.0]).rotate_about_axis(&v([0.0, 0.0, 1.0]), PI),
            Err(LinalgError::Dimensionality { len: 2 })
        );
        assert_eq!(
            v([1.0, 0.0, 0.0]).rotate_about_axis(&v([0.0, 0.0, 0.0]), PI),
            Err(LinalgError::DegenerateVector)
        );
    }

    #[test]
    fn angle() {
        assert_approx_eq!(v([1.0, 0.0]).angle_to(&v([0.0, 3.0])).unwrap(), FRAC_PI_2);
        assert_approx_eq!(v([1.0, 1.0]).angle_to(&v([-2.0, -2.0])).unwrap(), PI).abs(1e-6);
        let a = v([0.3, 0.7, 0.1]);
        assert_approx_eq!(a.angle_to(&a.scale(3.0)).unwrap(), 0.0).abs(1e-6);
        assert_eq!(
            v([0.0, 0.0]).angle_to(&v([1.0, 0.0])),
            Err(LinalgError::DegenerateVector)
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(v([1.0, 2.0, 3.0]).to_string(), "[1, 2, 3]");
        assert_eq!(v([-0.5]).to_string(), "[-0.5]");
        assert_eq!(format!("{:?}", v([1.0, 2.0])), "[1.0, 2.0]");
    }
}
