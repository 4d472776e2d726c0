// src/swap/portable.rs
//! Mask-and-shift byte swaps.
//!
//! These are `const fn` so they can run during constant evaluation, and they are
//! the fallback used at run time when no accelerated primitive is selected. Every
//! other strategy is tested against them.

/// Swap the two bytes of a `u16`.
#[inline]
pub const fn swap16(value: u16) -> u16 {
    ((value & 0xff00) >> 8) | ((value & 0x00ff) << 8)
}

/// Reverse the four bytes of a `u32`.
#[inline]
pub const fn swap32(value: u32) -> u32 {
    ((value & 0xff00_0000) >> 24)
        | ((value & 0x00ff_0000) >> 8)
        | ((value & 0x0000_ff00) << 8)
        | ((value & 0x0000_00ff) << 24)
}

/// Reverse the eight bytes of a `u64`.
#[inline]
pub const fn swap64(value: u64) -> u64 {
    ((value & 0xff00_0000_0000_0000) >> 56)
        | ((value & 0x00ff_0000_0000_0000) >> 40)
        | ((value & 0x0000_ff00_0000_0000) >> 24)
        | ((value & 0x0000_00ff_0000_0000) >> 8)
        | ((value & 0x0000_0000_ff00_0000) << 8)
        | ((value & 0x0000_0000_00ff_0000) << 24)
        | ((value & 0x0000_0000_0000_ff00) << 40)
        | ((value & 0x0000_0000_0000_00ff) << 56)
}
