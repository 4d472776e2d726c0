// src/ct.rs
//! Byte-order conversions usable in constant evaluation.
//!
//! Generic functions cannot be `const` on stable Rust, so this module spells the
//! conversions out per integer type. They are built on the mask-and-shift
//! primitives in [`crate::swap::portable`] and agree bit for bit with the
//! run-time API.
//!
//! ```
//! use endian_rs::ct;
//!
//! const MAGIC: u32 = ct::native_to_big_u32(0x4D54_6864);
//! assert_eq!(MAGIC.to_ne_bytes(), *b"MThd");
//! ```

use crate::endian::Endian;
use crate::swap::portable;

const LITTLE_IS_NATIVE: bool = Endian::Little.is_native();
const BIG_IS_NATIVE: bool = Endian::Big.is_native();

/// Reverse a byte array, exchanging symmetric pairs from both ends inward.
pub const fn reverse_array<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    if N < 2 {
        return bytes;
    }

    let mut lo = 0;
    let mut hi = N - 1;
    while lo < hi {
        let tmp = bytes[lo];
        bytes[lo] = bytes[hi];
        bytes[hi] = tmp;
        lo += 1;
        hi -= 1;
    }
    bytes
}

macro_rules! const_conversions {
    (
        $ty:ty, $swap:path,
        $swap_fn:ident, $to_little:ident, $to_big:ident, $from_little:ident, $from_big:ident
    ) => {
        #[doc = concat!("Reverse the bytes of a `", stringify!($ty), "`.")]
        #[inline]
        pub const fn $swap_fn(value: $ty) -> $ty {
            $swap(value)
        }

        #[doc = concat!("Convert a native `", stringify!($ty), "` to little-endian.")]
        #[inline]
        pub const fn $to_little(value: $ty) -> $ty {
            if LITTLE_IS_NATIVE {
                value
            } else {
                $swap(value)
            }
        }

        #[doc = concat!("Convert a native `", stringify!($ty), "` to big-endian.")]
        #[inline]
        pub const fn $to_big(value: $ty) -> $ty {
            if BIG_IS_NATIVE {
                value
            } else {
                $swap(value)
            }
        }

        #[doc = concat!("Convert a little-endian `", stringify!($ty), "` to native order.")]
        #[inline]
        pub const fn $from_little(value: $ty) -> $ty {
            if LITTLE_IS_NATIVE {
                value
            } else {
                $swap(value)
            }
        }

        #[doc = concat!("Convert a big-endian `", stringify!($ty), "` to native order.")]
        #[inline]
        pub const fn $from_big(value: $ty) -> $ty {
            if BIG_IS_NATIVE {
                value
            } else {
                $swap(value)
            }
        }
    };
}

const_conversions!(
    u16, portable::swap16,
    swap_u16, native_to_little_u16, native_to_big_u16, little_to_native_u16, big_to_native_u16
);
const_conversions!(
    u32, portable::swap32,
    swap_u32, native_to_little_u32, native_to_big_u32, little_to_native_u32, big_to_native_u32
);
const_conversions!(
    u64, portable::swap64,
    swap_u64, native_to_little_u64, native_to_big_u64, little_to_native_u64, big_to_native_u64
);

/// Reverse the bytes of a `u128`.
#[inline]
pub const fn swap_u128(value: u128) -> u128 {
    u128::from_ne_bytes(reverse_array(value.to_ne_bytes()))
}

/// Reverse the bytes of an `i16`, keeping the bit pattern.
#[inline]
pub const fn swap_i16(value: i16) -> i16 {
    portable::swap16(value as u16) as i16
}

#[inline]
pub const fn swap_i32(value: i32) -> i32 {
    portable::swap32(value as u32) as i32
}

#[inline]
pub const fn swap_i64(value: i64) -> i64 {
    portable::swap64(value as u64) as i64
}
