// build.rs
//! Resolves the byte-swap capability flags once per build.
//!
//! Emitted cfg flags:
//! - `endian_force_portable`: portable bit arithmetic everywhere
//! - `endian_builtin_bswap`: the compiler's `swap_bytes` builtin may be used
//! - `endian_platform_bswap32`: `core::arch` `_bswap` may be used
//! - `endian_platform_bswap64`: `core::arch` `_bswap64` may be used

use std::env;

const FORCE_PORTABLE_ENV: &str = "ENDIAN_RS_FORCE_PORTABLE";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", FORCE_PORTABLE_ENV);

    for flag in [
        "endian_force_portable",
        "endian_builtin_bswap",
        "endian_platform_bswap32",
        "endian_platform_bswap64",
    ] {
        println!("cargo::rustc-check-cfg=cfg({})", flag);
    }

    let force_portable = env::var_os("CARGO_FEATURE_FORCE_PORTABLE").is_some()
        || env_flag(FORCE_PORTABLE_ENV);
    let platform_intrinsics = env::var_os("CARGO_FEATURE_PLATFORM_INTRINSICS").is_some();

    // Cargo describes the *target*, not the host running this script.
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    if force_portable {
        println!("cargo:rustc-cfg=endian_force_portable");
        return;
    }

    // rustc lowers `swap_bytes` to a single instruction where one exists and to
    // shifts elsewhere, on every target it supports.
    println!("cargo:rustc-cfg=endian_builtin_bswap");

    if platform_intrinsics {
        match arch.as_str() {
            "x86_64" => {
                println!("cargo:rustc-cfg=endian_platform_bswap32");
                println!("cargo:rustc-cfg=endian_platform_bswap64");
            }
            "x86" => println!("cargo:rustc-cfg=endian_platform_bswap32"),
            _ => {}
        }
    }
}

fn env_flag(name: &str) -> bool {
    match env::var(name) {
        Ok(value) => !matches!(value.trim(), "" | "0" | "false" | "no" | "off"),
        Err(_) => false,
    }
}
