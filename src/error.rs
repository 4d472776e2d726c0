// src/error.rs
use std::io;
use thiserror::Error;

/// Errors from the fallible helpers (stream input and output, random ranges).
///
/// The byte-order conversions themselves are total and never return this.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid range: low bound {low} is above high bound {high}")]
    InvalidRange { low: String, high: String },

    #[error("Cannot parse {token:?} as {target}: {reason}")]
    Parse {
        token: String,
        target: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
