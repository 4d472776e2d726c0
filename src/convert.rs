// src/convert.rs
//! Generic byte-order conversion for any [`Pod`] value.
//!
//! Values of 2, 4 and 8 bytes go through the width-specialized primitives in
//! [`crate::swap`]; single bytes are returned unchanged; every other width is
//! reversed byte by byte through a `&mut [u8]` view of the value. The width is a
//! constant for each instantiation, so the branch is resolved by the compiler.
//!
//! All reinterpretation goes through `bytemuck`, never through a pointer cast of
//! the caller's type.

use std::marker::PhantomData;
use std::mem;

use bytemuck::Pod;

use crate::endian::Endian;
use crate::swap;
use crate::utils::{reverse_bytes, reverse_each};

/// Fails the build for zero-sized types.
struct NonZeroWidth<T>(PhantomData<T>);

impl<T> NonZeroWidth<T> {
    const CHECK: () = assert!(
        mem::size_of::<T>() != 0,
        "byte order conversion needs a value at least one byte wide"
    );
}

const LITTLE_IS_NATIVE: bool = Endian::Little.is_native();
const BIG_IS_NATIVE: bool = Endian::Big.is_native();

/// Reverse the byte order of `value`.
///
/// The result has the same type as the input: swapping an `f32` yields the `f32`
/// whose bytes are reversed.
///
/// ```
/// use endian_rs::swap_bytes;
///
/// assert_eq!(swap_bytes(0x1234u16), 0x3412);
/// assert_eq!(swap_bytes(0x12345678u32), 0x78563412);
/// assert_eq!(swap_bytes([1u8, 2, 3]), [3, 2, 1]);
/// ```
///
/// Zero-sized values have no bytes to reverse and do not build:
///
/// ```compile_fail
/// endian_rs::swap_bytes(());
/// ```
#[inline]
pub fn swap_bytes<T: Pod>(value: T) -> T {
    #[allow(clippy::let_unit_value)]
    let () = NonZeroWidth::<T>::CHECK;

    match mem::size_of::<T>() {
        1 => value,
        2 => bytemuck::cast(swap::swap16(bytemuck::cast(value))),
        4 => bytemuck::cast(swap::swap32(bytemuck::cast(value))),
        8 => bytemuck::cast(swap::swap64(bytemuck::cast(value))),
        _ => {
            let mut value = value;
            reverse_bytes(bytemuck::bytes_of_mut(&mut value));
            value
        }
    }
}

/// Reverse the byte order of `*value`.
#[inline]
pub fn swap_bytes_in_place<T: Pod>(value: &mut T) {
    *value = swap_bytes(*value);
}

/// Reverse the byte order of every element of `data`.
///
/// ```compile_fail
/// endian_rs::swap_slice_in_place(&mut [(); 3]);
/// ```
pub fn swap_slice_in_place<T: Pod>(data: &mut [T]) {
    #[allow(clippy::let_unit_value)]
    let () = NonZeroWidth::<T>::CHECK;

    match mem::size_of::<T>() {
        1 => {}
        2 | 4 | 8 => data.iter_mut().for_each(swap_bytes_in_place),
        _ => reverse_each(data),
    }
}

/// Convert a native value to little-endian.
///
/// The width check holds even where the swap branch is never taken:
///
/// ```compile_fail
/// endian_rs::native_to_little([0u8; 0]);
/// ```
///
/// ```compile_fail
/// endian_rs::native_to_big(());
/// ```
#[inline]
pub fn native_to_little<T: Pod>(value: T) -> T {
    if LITTLE_IS_NATIVE {
        value
    } else {
        swap_bytes(value)
    }
}

/// Convert a native value to big-endian.
#[inline]
pub fn native_to_big<T: Pod>(value: T) -> T {
    if BIG_IS_NATIVE {
        value
    } else {
        swap_bytes(value)
    }
}

/// Convert a little-endian value to native order.
#[inline]
pub fn little_to_native<T: Pod>(value: T) -> T {
    if LITTLE_IS_NATIVE {
        value
    } else {
        swap_bytes(value)
    }
}

/// Convert a big-endian value to native order.
#[inline]
pub fn big_to_native<T: Pod>(value: T) -> T {
    if BIG_IS_NATIVE {
        value
    } else {
        swap_bytes(value)
    }
}

/// In-place [`native_to_little`]. Nothing is written when the target is little-endian.
///
/// ```compile_fail
/// endian_rs::native_to_little_in_place(&mut ());
/// ```
#[inline]
pub fn native_to_little_in_place<T: Pod>(value: &mut T) {
    if !LITTLE_IS_NATIVE {
        swap_bytes_in_place(value);
    }
}

/// In-place [`native_to_big`]. Nothing is written when the target is big-endian.
#[inline]
pub fn native_to_big_in_place<T: Pod>(value: &mut T) {
    if !BIG_IS_NATIVE {
        swap_bytes_in_place(value);
    }
}

/// In-place [`little_to_native`].
#[inline]
pub fn little_to_native_in_place<T: Pod>(value: &mut T) {
    if !LITTLE_IS_NATIVE {
        swap_bytes_in_place(value);
    }
}

/// In-place [`big_to_native`].
#[inline]
pub fn big_to_native_in_place<T: Pod>(value: &mut T) {
    if !BIG_IS_NATIVE {
        swap_bytes_in_place(value);
    }
}
