//! Named-component access for [`Vec3`].

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use super::Vec3;

/// The fields of a [`Vec3`], reachable through its [`Deref`] impl.
///
/// This is a view over the same `[T; 3]` storage that indexing uses, not a copy.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

impl<T> Deref for Vec3<T> {
    type Target = XYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: `Vec3<T>` is a transparent `[T; 3]`, which has the same layout as the
        // `repr(C)` struct of three `T`s plus a zero-sized field.
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vec3<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // Safety: see `deref`.
        unsafe { mem::transmute(self) }
    }
}
