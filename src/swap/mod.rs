// src/swap/mod.rs
//! Width-specialized byte swaps.
//!
//! [`swap16`], [`swap32`] and [`swap64`] use whichever primitive the build
//! selected (see [`strategy`]). The [`portable`] versions are `const fn` and
//! produce the same results.

pub mod accel;
pub mod portable;
pub mod strategy;

pub use strategy::Strategy;

/// Swap the two bytes of a `u16`.
///
/// The compiler's 16-bit builtin is preferred; the 32-bit platform intrinsic is
/// only borrowed when no dedicated 16-bit swap is available.
#[inline]
pub fn swap16(value: u16) -> u16 {
    #[cfg(endian_builtin_bswap)]
    {
        accel::builtin_swap16(value)
    }
    #[cfg(all(not(endian_builtin_bswap), endian_platform_bswap32))]
    {
        accel::synthesized_swap16(value)
    }
    #[cfg(not(any(endian_builtin_bswap, endian_platform_bswap32)))]
    {
        portable::swap16(value)
    }
}

/// Reverse the four bytes of a `u32`.
#[inline]
pub fn swap32(value: u32) -> u32 {
    #[cfg(endian_platform_bswap32)]
    {
        accel::platform_swap32(value)
    }
    #[cfg(all(not(endian_platform_bswap32), endian_builtin_bswap))]
    {
        accel::builtin_swap32(value)
    }
    #[cfg(not(any(endian_platform_bswap32, endian_builtin_bswap)))]
    {
        portable::swap32(value)
    }
}

/// Reverse the eight bytes of a `u64`.
#[inline]
pub fn swap64(value: u64) -> u64 {
    #[cfg(endian_platform_bswap64)]
    {
        accel::platform_swap64(value)
    }
    #[cfg(all(not(endian_platform_bswap64), endian_builtin_bswap))]
    {
        accel::builtin_swap64(value)
    }
    #[cfg(not(any(endian_platform_bswap64, endian_builtin_bswap)))]
    {
        portable::swap64(value)
    }
}
