// src/utils/mod.rs
//! Byte-level helpers shared by the run-time conversions.

mod bytes;

pub use bytes::*;
