//! Named field access for small vectors.
//!
//! `Vector<T, 2..=4>` dereference to `#[repr(C)]` structs with the same layout, which lets
//! `v.x` and `v.w` work like fields.

use std::ops::{Deref, DerefMut};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($n:literal => $view:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &$view<T> {
                // Safety: `Vector` is `repr(transparent)` over `[T; $n]`, and the view is
                // `repr(C)` with `$n` fields of type `T` plus a zero-sized marker.
                unsafe { &*(self as *const Self).cast::<$view<T>>() }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut $view<T> {
                // Safety: see `deref`.
                unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
            }
        }
    };
}

view!(2 => XY);
view!(3 => XYZ);
view!(4 => XYZW);
