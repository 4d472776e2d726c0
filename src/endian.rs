// src/endian.rs
use bytemuck::Pod;

use crate::convert::{swap_bytes, swap_bytes_in_place, swap_slice_in_place};

/// A byte order.
///
/// The build target's order is available as [`Endian::NATIVE`]. A value of this
/// type can also be carried around at run time, for data whose byte order is only
/// known once it has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

/// The byte order of the build target.
pub const NATIVE_ENDIAN: Endian = Endian::NATIVE;

impl Endian {
    /// The byte order of the build target, fixed at compile time.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// The byte order of the build target, fixed at compile time.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// The order that is not this one.
    #[inline]
    pub const fn opposite(self) -> Endian {
        match self {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        }
    }

    /// Whether this is the build target's order.
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Endian::NATIVE),
            (Endian::Little, Endian::Little) | (Endian::Big, Endian::Big)
        )
    }

    /// Whether converting between this order and the native one reverses bytes.
    #[inline]
    pub const fn swap_needed(self) -> bool {
        !self.is_native()
    }

    #[inline]
    pub const fn is_little_endian(self) -> bool {
        matches!(self, Endian::Little)
    }

    /// Interpret `value`, stored in this byte order, as a native value.
    #[inline]
    pub fn to_native<T: Pod>(self, value: T) -> T {
        if self.swap_needed() {
            swap_bytes(value)
        } else {
            value
        }
    }

    /// Store the native `value` in this byte order.
    #[inline]
    pub fn from_native<T: Pod>(self, value: T) -> T {
        // Byte reversal is its own inverse.
        self.to_native(value)
    }

    /// In-place [`to_native`](Endian::to_native); no write when this order is native.
    #[inline]
    pub fn to_native_in_place<T: Pod>(self, value: &mut T) {
        if self.swap_needed() {
            swap_bytes_in_place(value);
        }
    }

    #[inline]
    pub fn from_native_in_place<T: Pod>(self, value: &mut T) {
        self.to_native_in_place(value)
    }

    /// Convert every element of `data` from this byte order to native order.
    pub fn to_native_slice<T: Pod>(self, data: &mut [T]) {
        if self.swap_needed() {
            swap_slice_in_place(data);
        }
    }

    /// Convert every element of `data` from native order to this byte order.
    pub fn from_native_slice<T: Pod>(self, data: &mut [T]) {
        self.to_native_slice(data)
    }

    /// `"little"` or `"big"`.
    pub fn name(&self) -> &'static str {
        match self {
            Endian::Little => "little",
            Endian::Big => "big",
        }
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
