// src/lib.rs
//! # endian-rs
//!
//! Byte-order conversion for any plain-old-data value, with identical results at
//! compile time and at run time.
//!
//! ## Features
//!
//! - 🔁 **Any width**: 1, 2, 4 and 8 byte values use dedicated primitives; every
//!   other width (packed structs, `[u8; N]`, `u128`) is reversed byte by byte
//! - 🧮 **Type preserving**: swapping an `f32` gives back an `f32`
//! - ⚙️ **Build-time strategy selection**: platform intrinsic, compiler builtin
//!   or portable arithmetic, picked once by the build script
//! - 🧊 **Const evaluation**: the [`ct`] module works in `const` items
//! - ✅ **No UB**: all reinterpretation goes through `bytemuck`
//!
//! ## Quick Start
//!
//! ```rust
//! use endian_rs::*;
//!
//! // Explicit orders
//! let wire = native_to_big(0x1234_5678u32);
//! assert_eq!(wire.to_ne_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(big_to_native(wire), 0x1234_5678);
//!
//! // In place
//! let mut sample = 1.5f64;
//! native_to_little_in_place(&mut sample);
//! little_to_native_in_place(&mut sample);
//! assert_eq!(sample, 1.5);
//!
//! // Odd widths
//! assert_eq!(swap_bytes([0xAu8, 0xB, 0xC]), [0xC, 0xB, 0xA]);
//!
//! // Orders only known at run time
//! let order = Endian::Big;
//! assert_eq!(order.to_native(wire), 0x1234_5678);
//! ```
//!
//! ### Constant evaluation
//!
//! ```rust
//! use endian_rs::ct;
//!
//! const HEADER: u64 = ct::native_to_little_u64(0x0102_0304_0506_0708);
//! assert_eq!(HEADER.to_ne_bytes(), [8, 7, 6, 5, 4, 3, 2, 1]);
//! ```
//!
//! ## Cargo features
//!
//! - `platform-intrinsics`: prefer `core::arch` byte-swap intrinsics where the
//!   target has them (x86, x86_64)
//! - `force-portable`: use mask-and-shift arithmetic everywhere. Setting
//!   `ENDIAN_RS_FORCE_PORTABLE=1` in the build environment does the same.
//! - `bench`: data generators for the benchmarks (`cargo bench --features bench`)

// Modules
pub mod error;
pub mod endian;
pub mod swap;
pub mod convert;
pub mod ct;
pub mod utils;
pub mod scope;
pub mod random;
pub mod character;
pub mod io;

// Re-export commonly used types at the crate root for convenience
pub use error::{Error, Result};

pub use endian::{Endian, NATIVE_ENDIAN};

pub use swap::Strategy;

pub use convert::{
    swap_bytes,
    swap_bytes_in_place,
    swap_slice_in_place,
    native_to_little,
    native_to_big,
    little_to_native,
    big_to_native,
    native_to_little_in_place,
    native_to_big_in_place,
    little_to_native_in_place,
    big_to_native_in_place,
};

// The trait bound every conversion takes
pub use bytemuck::Pod;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use endian_rs::prelude::*;
    //! ```

    pub use crate::convert::{
        big_to_native, little_to_native, native_to_big, native_to_little, swap_bytes,
    };
    pub use crate::endian::Endian;
    pub use crate::error::{Error, Result};
    pub use bytemuck::Pod;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "bench")]
pub mod bench_helpers {
    //! Deterministic inputs shared by the benchmarks.

    /// `count` well-mixed 64-bit values from a fixed multiplicative sequence.
    pub fn mixed_u64(count: usize) -> Vec<u64> {
        (0..count as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect()
    }

    /// `count` sequential 32-bit values.
    pub fn sequential_u32(count: usize) -> Vec<u32> {
        (0..count as u32).collect()
    }

    /// `count` three-byte pixels, exercising the generic byte-reversal path.
    pub fn rgb24_pixels(count: usize) -> Vec<[u8; 3]> {
        (0..count).map(|i| [i as u8, (i >> 8) as u8, (i >> 16) as u8]).collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(swap_bytes(0x1234u16), 0x3412u16);
        assert_eq!(swap_bytes(0x1234_5678u32), 0x7856_3412u32);
        assert_eq!(swap_bytes(0x0102_0304_0506_0708u64), 0x0807_0605_0403_0201u64);
    }

    #[test]
    fn test_strategy_reexport() {
        assert_eq!(Strategy::for_width(1), Some(Strategy::Identity));
        assert_eq!(Strategy::for_width(3), Some(Strategy::ByteReversal));
    }

    #[test]
    fn test_prelude_round_trip() {
        use crate::prelude::*;

        let value = -42i64;
        assert_eq!(big_to_native(native_to_big(value)), value);
        assert_eq!(little_to_native(native_to_little(value)), value);
        assert!(Endian::NATIVE.is_native());
    }
}
