//! Approximate equality.
//!
//! Floating-point results of matrix inversion, rotation and normalization are rarely bit-exact.
//! [`ApproxEq`] compares values under a [`Tolerance`], and [`assert_approx_eq!`] /
//! [`assert_approx_ne!`] turn such comparisons into test assertions.
//!
//! [`assert_approx_eq!`]: crate::assert_approx_eq
//! [`assert_approx_ne!`]: crate::assert_approx_ne

mod impls;

use std::{fmt, panic::Location};

/// How close two floating-point numbers have to be to count as equal.
///
/// Background on the trade-offs between the variants:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance<F> {
    /// The absolute difference may be at most this large.
    ///
    /// Works well for values close to zero, such as the off-diagonal entries of a product that
    /// should be the identity matrix.
    Abs(F),
    /// The absolute difference may be at most this fraction of the larger magnitude.
    ///
    /// A good choice for values far from zero. Any non-zero number only compares equal to `0.0`
    /// with a relative tolerance of at least 1.0.
    Rel(F),
    /// At most this many representable values may lie between the two numbers
    /// ([*units in the last place*]).
    ///
    /// `-0.0` and `+0.0` are equal; other values of differing sign never are.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    Ulps(u32),
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types (vectors, matrices) are approximately equal if they have the same dimension and
/// every pair of corresponding elements is. `NaN` is never equal to anything, and infinities only
/// equal themselves.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The floating-point type the tolerance is expressed in ([`f32`] or [`f64`]).
    type Scalar: DefaultTolerances + Copy;

    /// Returns `true` if `self` and `other` are equal under `tolerance`.
    fn approx_eq(&self, other: &Rhs, tolerance: Tolerance<Self::Scalar>) -> bool;
}

/// Tolerances used by [`Asserter`] when the assertion does not select any.
pub trait DefaultTolerances: Sized {
    /// Values are equal if they are equal under any of these.
    const DEFAULT_TOLERANCES: [Tolerance<Self>; 2];
}

impl DefaultTolerances for f32 {
    const DEFAULT_TOLERANCES: [Tolerance<Self>; 2] =
        [Tolerance::Abs(Self::EPSILON), Tolerance::Rel(Self::EPSILON)];
}

impl DefaultTolerances for f64 {
    const DEFAULT_TOLERANCES: [Tolerance<Self>; 2] =
        [Tolerance::Abs(Self::EPSILON), Tolerance::Rel(Self::EPSILON)];
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped, at the end of the statement. Until then,
/// [`Asserter::abs`], [`Asserter::rel`] and [`Asserter::ulps`] add tolerances; the values are
/// equal if they are equal under *any* of them. If none are added, the element type's
/// [`DefaultTolerances`] are used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    tolerances: Vec<Tolerance<T::Scalar>>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            location: Location::caller(),
            msg,
            tolerances: Vec::new(),
        }
    }

    /// Adds a [`Tolerance::Abs`].
    pub fn abs(&mut self, abs: T::Scalar) -> &mut Self {
        self.within(Tolerance::Abs(abs))
    }

    /// Adds a [`Tolerance::Rel`].
    pub fn rel(&mut self, rel: T::Scalar) -> &mut Self {
        self.within(Tolerance::Rel(rel))
    }

    /// Adds a [`Tolerance::Ulps`].
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.within(Tolerance::Ulps(ulps))
    }

    /// Adds an arbitrary [`Tolerance`].
    pub fn within(&mut self, tolerance: Tolerance<T::Scalar>) -> &mut Self {
        self.tolerances.push(tolerance);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location is captured in `new` instead.
    fn drop(&mut self) {
        let defaults = <T::Scalar as DefaultTolerances>::DEFAULT_TOLERANCES;
        let tolerances = match &self.tolerances[..] {
            [] => &defaults[..],
            selected => selected,
        };
        let equal = tolerances
            .iter()
            .any(|&tolerance| T::approx_eq(self.left, self.right, tolerance));

        if equal != self.expect_equal {
            let op = if self.expect_equal { "==" } else { "!=" };
            let (left, right, location) = (self.left, self.right, self.location);
            match self.msg {
                Some(msg) => panic!(
                    "assertion `left {op} right` failed at {location}: {msg}\n  \
                     left: {left:?}\n right: {right:?}"
                ),
                None => panic!(
                    "assertion `left {op} right` failed at {location}\n  \
                     left: {left:?}\n right: {right:?}"
                ),
            }
        }
    }
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can select tolerances.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// let rotated = vec3(1.0, 0.0, 0.0)
///     .rotate_about_axis(Vec3d::Z, std::f64::consts::FRAC_PI_2)?;
/// assert_approx_eq!(rotated, Vec3d::Y).abs(1e-12);
/// # Ok::<(), LinalgError>(())
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// Counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.1)).abs(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
