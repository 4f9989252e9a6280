use std::fmt;

use crate::{
    error::{LinalgError, Result},
    traits::{Float, Number, One, Zero},
    vector::angle_from_cosine,
    Mat3, Vector,
};

mod ops;
mod view;

pub use view::XYZ;

/// A [`Vec3`] with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A [`Vec3`] with [`f64`] elements.
pub type Vec3d = Vec3<f64>;

/// A 3-dimensional vector storing elements of type `T`.
///
/// This is the fixed-size counterpart of [`Vector`]: every operation is written out as its
/// scalar formula, and nothing needs a length check, so most methods are infallible.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y` and `z` (through [`Deref`] to [`XYZ`]).
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vec3::as_array`] and [`Vec3::into_array`] expose the underlying `[T; 3]`.
///
/// Named and indexed access read and write the same storage:
///
/// ```
/// # use vecmat::*;
/// let mut v = vec3(1, 2, 3);
/// v.y = 20;
/// assert_eq!(v[1], 20);
/// v[2] = 30;
/// assert_eq!(v.z, 30);
/// ```
///
/// [`Deref`]: std::ops::Deref
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Vec3<T>([T; 3]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}

impl<T: Zero> Vec3<T> {
    /// A vector with each element set to 0.
    pub const ZERO: Self = Self([T::ZERO, T::ZERO, T::ZERO]);
}

impl<T: Zero + One> Vec3<T> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T> Vec3<T> {
    /// Creates a vector from its three components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// Creates a vector with each element set to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; 3])
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vec3<U>
    where
        F: FnMut(T) -> U,
    {
        Vec3(self.0.map(f))
    }

    /// Returns a reference to the underlying elements.
    #[inline]
    pub const fn as_array(&self) -> &[T; 3] {
        &self.0
    }

    /// Converts this vector into an array of its elements.
    #[inline]
    pub fn into_array(self) -> [T; 3] {
        self.0
    }

    /// Converts a [`Vector`] into a [`Vec3`], failing with [`LinalgError::Dimensionality`] if it
    /// does not have 3 elements.
    pub(crate) fn try_from_dimensionality(v: &Vector<T>) -> Result<Self>
    where
        T: Copy,
    {
        match v.as_slice() {
            &[x, y, z] => Ok(Self([x, y, z])),
            other => Err(LinalgError::Dimensionality { len: other.len() }),
        }
    }
}

impl<T: Number> Vec3<T> {
    /// Computes the element-wise sum of `self` and `other`.
    #[inline]
    pub fn plus(self, other: Self) -> Self {
        vec3(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Computes the element-wise difference of `self` and `other`.
    #[inline]
    pub fn minus(self, other: Self) -> Self {
        vec3(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiplies each element by `s`.
    #[inline]
    pub fn scale(self, s: T) -> Self {
        vec3(self.x * s, self.y * s, self.z * s)
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
    /// assert_eq!(Vec3f::X.dot(Vec3f::Y), 0.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T: Float> Vec3<T> {
    /// Returns the length of this vector.
    #[doc(alias = "length")]
    #[doc(alias = "norm")]
    pub fn magnitude(self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Divides each element by the magnitude, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateVector`] if the magnitude is zero.
    pub fn normalize(self) -> Result<Self> {
        let len = self.magnitude();
        if len == T::ZERO {
            return Err(LinalgError::DegenerateVector);
        }
        Ok(vec3(self.x / len, self.y / len, self.z / len))
    }

    /// Rotates this vector by `radians` about `axis`, following the right-hand rule.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateVector`] if `axis` has zero length.
    pub fn rotate_about_axis(self, axis: Self, radians: T) -> Result<Self> {
        Ok(Mat3::rotation_about_axis(axis, radians)?.times_vector(self))
    }

    /// Computes the angle between `self` and `other`, in radians (between 0 and π).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateVector`] if either vector has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec3d::Y.angle_to(Vec3d::X)?, FRAC_PI_2);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn angle_to(self, other: Self) -> Result<T> {
        angle_from_cosine(self.dot(other), self.magnitude() * other.magnitude())
    }
}

impl<T: fmt::Debug> fmt::Debug for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = &self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(value: [T; 3]) -> Self {
        Self(value)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    #[inline]
    fn from(value: Vec3<T>) -> Self {
        value.0
    }
}

impl<T> From<Vec3<T>> for Vector<T> {
    fn from(value: Vec3<T>) -> Self {
        Vector::from_vec_unchecked(Vec::from(value.0))
    }
}

impl<T: Copy> TryFrom<&Vector<T>> for Vec3<T> {
    type Error = LinalgError;

    fn try_from(value: &Vector<T>) -> Result<Self> {
        match value.as_slice() {
            &[x, y, z] => Ok(Self([x, y, z])),
            other => Err(LinalgError::DimensionMismatch {
                expected: 3,
                actual: other.len(),
            }),
        }
    }
}

impl<T: Copy> TryFrom<Vector<T>> for Vec3<T> {
    type Error = LinalgError;

    fn try_from(value: Vector<T>) -> Result<Self> {
        Self::try_from(&value)
    }
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vec3([x, y, z])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
        assert_eq!((v[0], v[1], v[2]), (1.0, 2.0, 3.0));
        assert_eq!(Vec3f::Z.z, 1.0);
        assert_eq!(Vec3f::Z.x, 0.0);
    }

    #[test]
    fn arithmetic() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        assert_eq!(a.plus(b), vec3(5, 7, 9));
        assert_eq!(a.minus(b), vec3(-3, -3, -3));
        assert_eq!(a.scale(2), vec3(2, 4, 6));
        assert_eq!(a.dot(b), 32);
        assert_eq!(a.cross(b), vec3(-3, 6, -3));
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Ok(Vec3d::Z));
        let unit = vec3(1.0, -2.0, 2.0).normalize().unwrap();
        assert_approx_eq!(unit.magnitude(), 1.0).abs(1e-12);
        assert_eq!(Vec3d::ZERO.normalize(), Err(LinalgError::DegenerateVector));
    }

    #[test]
    fn rotate() {
        let v = Vec3d::X.rotate_about_axis(Vec3d::Z, FRAC_PI_2).unwrap();
        assert_approx_eq!(v, Vec3d::Y).abs(1e-12);

        let v = vec3(1.0, 2.0, 3.0).rotate_about_axis(vec3(1.0, 1.0, 0.0), PI / 3.0).unwrap();
        assert_approx_eq!(v.magnitude(), 14.0f64.sqrt()).abs(1e-12);

        assert_eq!(
            Vec3d::X.rotate_about_axis(Vec3d::ZERO, PI),
            Err(LinalgError::DegenerateVector)
        );
    }

    #[test]
    fn angle() {
        assert_approx_eq!(Vec3d::Y.angle_to(-Vec3d::Y).unwrap(), PI);
        assert_approx_eq!(Vec3d::Y.angle_to(-Vec3d::X).unwrap(), FRAC_PI_2);
        assert_eq!(
            Vec3d::ZERO.angle_to(Vec3d::X),
            Err(LinalgError::DegenerateVector)
        );
    }

    #[test]
    fn conversions() {
        let v: Vector<i32> = vec3(1, 2, 3).into();
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(Vec3::try_from(&v), Ok(vec3(1, 2, 3)));

        let short = Vector::new([1, 2]).unwrap();
        assert_eq!(
            Vec3::try_from(short),
            Err(LinalgError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(vec3(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
        assert_eq!(format!("{:?}", Vec3f::X), "(1.0, 0.0, 0.0)");
    }

    #[test]
    fn pod() {
        let vs = [vec3(1.0f32, 2.0, 3.0), vec3(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
