// src/swap/strategy.rs
//! Byte-swap capability flags and the strategy chosen for each width.
//!
//! Everything here is decided by `build.rs` before the crate is compiled. The
//! constants mirror the cfg flags it emits so callers (and tests) can inspect the
//! selection without repeating the cfg logic.

/// The portable path was forced (`force-portable` feature or the
/// `ENDIAN_RS_FORCE_PORTABLE` build environment variable).
pub const FORCE_PORTABLE: bool = cfg!(endian_force_portable);

/// The compiler's `swap_bytes` builtin may be used.
pub const BUILTIN_BSWAP: bool = cfg!(endian_builtin_bswap);

/// `core::arch` `_bswap` is compiled in.
pub const PLATFORM_BSWAP32: bool = cfg!(endian_platform_bswap32);

/// `core::arch` `_bswap64` is compiled in.
pub const PLATFORM_BSWAP64: bool = cfg!(endian_platform_bswap64);

/// How a value of a given width gets its bytes reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Single-byte values are returned unchanged.
    Identity,
    /// A `core::arch` byte-swap intrinsic.
    PlatformIntrinsic,
    /// 16-bit swap built on the 32-bit platform intrinsic.
    Synthesized32,
    /// The compiler's `swap_bytes` builtin.
    CompilerBuiltin,
    /// Mask-and-shift arithmetic.
    Portable,
    /// Two-index byte exchange over the value's storage.
    ByteReversal,
}

/// Strategy used for 2-byte values.
///
/// There is no 16-bit platform intrinsic, so the dedicated builtin comes first.
pub const SWAP16: Strategy = if BUILTIN_BSWAP {
    Strategy::CompilerBuiltin
} else if PLATFORM_BSWAP32 {
    Strategy::Synthesized32
} else {
    Strategy::Portable
};

/// Strategy used for 4-byte values.
pub const SWAP32: Strategy = if PLATFORM_BSWAP32 {
    Strategy::PlatformIntrinsic
} else if BUILTIN_BSWAP {
    Strategy::CompilerBuiltin
} else {
    Strategy::Portable
};

/// Strategy used for 8-byte values.
pub const SWAP64: Strategy = if PLATFORM_BSWAP64 {
    Strategy::PlatformIntrinsic
} else if BUILTIN_BSWAP {
    Strategy::CompilerBuiltin
} else {
    Strategy::Portable
};

impl Strategy {
    /// The strategy used for a value `bytes` wide, or `None` for zero-sized values.
    pub const fn for_width(bytes: usize) -> Option<Strategy> {
        match bytes {
            0 => None,
            1 => Some(Strategy::Identity),
            2 => Some(SWAP16),
            4 => Some(SWAP32),
            8 => Some(SWAP64),
            _ => Some(Strategy::ByteReversal),
        }
    }

    /// Whether this strategy can run during constant evaluation.
    pub const fn is_const_capable(self) -> bool {
        matches!(
            self,
            Strategy::Identity | Strategy::CompilerBuiltin | Strategy::Portable | Strategy::ByteReversal
        )
    }

    /// Human-readable name, as used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Identity => "identity",
            Strategy::PlatformIntrinsic => "platform intrinsic",
            Strategy::Synthesized32 => "synthesized from 32-bit intrinsic",
            Strategy::CompilerBuiltin => "compiler builtin",
            Strategy::Portable => "portable",
            Strategy::ByteReversal => "byte reversal",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Report the build's capability flags and per-width strategies at `debug` level.
pub fn log_selection() {
    log::debug!(
        "byte swap capabilities: force_portable={} builtin={} platform32={} platform64={}",
        FORCE_PORTABLE,
        BUILTIN_BSWAP,
        PLATFORM_BSWAP32,
        PLATFORM_BSWAP64,
    );
    for (width, strategy) in [(2, SWAP16), (4, SWAP32), (8, SWAP64)] {
        log::debug!("{}-byte swap: {}", width, strategy);
    }
}
