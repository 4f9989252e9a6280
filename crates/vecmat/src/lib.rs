//! Small vector and square matrix value types.
//!
//! This library provides two families of types:
//!
//! - [`Vector`] and [`Matrix`], whose dimension is chosen at run time. Their determinant and
//!   inverse are computed by recursive cofactor expansion, so they are only suitable for small
//!   dimensions.
//! - [`Vec3`] and [`Mat3`], fixed to 3 dimensions, which use closed-form formulas instead of
//!   recursion and never fail on dimension checks.
//!
//! Both families are plain values: every operation returns a new object and leaves its operands
//! untouched. They convert into each other with [`From`] and [`TryFrom`], and the generic types
//! hand 3-dimensional work (cross products, rotations, 3x3 determinants and inverses) to the
//! fixed ones.
//!
//! # Goals & Non-Goals
//!
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Operations that need square roots or trigonometry are only available for
//!   [`Float`] types.
//! - Report every violated precondition (mismatched dimensions, singular matrices, zero-length
//!   vectors) as a [`LinalgError`] instead of panicking or producing garbage.
//! - Don't try to be fast for large matrices. There is no LU decomposition, no pivoting, and no
//!   SIMD. Determinants are tested against exactly zero.
//! - Put at least some effort into designing an ergonomic API that adheres to the
//!   [Rust API Guidelines].
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/
//!
//! # Examples
//!
//! ```
//! # use vecmat::*;
//! let mat = Matrix::try_from([
//!     [1.0, 2.0, 3.0],
//!     [0.0, 1.0, 4.0],
//!     [5.0, 6.0, 0.0],
//! ])?;
//! assert_eq!(mat.determinant(), 1.0);
//! assert_eq!(mat.inverse()?, Matrix::try_from([
//!     [-24.0, 18.0, 5.0],
//!     [20.0, -15.0, -4.0],
//!     [-5.0, 4.0, 1.0],
//! ])?);
//!
//! let up = vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0));
//! assert_eq!(up, Vec3d::Z);
//! # Ok::<(), LinalgError>(())
//! ```

pub mod approx;
mod error;
mod mat3;
mod matrix;
#[cfg(test)]
mod test;
mod traits;
mod vec3;
mod vector;

pub use error::*;
pub use mat3::*;
pub use matrix::*;
pub use traits::*;
pub use vec3::*;
pub use vector::*;
