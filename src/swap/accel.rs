// src/swap/accel.rs
//! Accelerated byte swaps.
//!
//! The builtin functions are always compiled (rustc provides `swap_bytes` on every
//! target). The platform functions only exist when the build script found the
//! matching `core::arch` intrinsic and the `platform-intrinsics` feature asked for
//! it.

#[inline(always)]
pub fn builtin_swap16(value: u16) -> u16 {
    value.swap_bytes()
}

#[inline(always)]
pub fn builtin_swap32(value: u32) -> u32 {
    value.swap_bytes()
}

#[inline(always)]
pub fn builtin_swap64(value: u64) -> u64 {
    value.swap_bytes()
}

/// `bswap` on a 32-bit register.
#[cfg(endian_platform_bswap32)]
#[inline]
pub fn platform_swap32(value: u32) -> u32 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::_bswap;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::_bswap;

    // SAFETY: `_bswap` has no preconditions and needs no target feature.
    #[allow(unused_unsafe)]
    let swapped = unsafe { _bswap(value as i32) };
    swapped as u32
}

/// `bswap` on a 64-bit register.
#[cfg(endian_platform_bswap64)]
#[inline]
pub fn platform_swap64(value: u64) -> u64 {
    use core::arch::x86_64::_bswap64;

    // SAFETY: `_bswap64` has no preconditions and needs no target feature.
    #[allow(unused_unsafe)]
    let swapped = unsafe { _bswap64(value as i64) };
    swapped as u64
}

/// 16-bit swap built from the 32-bit intrinsic.
///
/// x86 has no 16-bit `bswap`: the value goes into the high half of a 32-bit
/// temporary, the temporary is swapped, and the low half holds the result.
#[cfg(endian_platform_bswap32)]
#[inline]
pub fn synthesized_swap16(value: u16) -> u16 {
    platform_swap32((value as u32) << 16) as u16
}
