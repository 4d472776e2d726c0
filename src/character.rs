// src/character.rs
//! Marker for the storage types of recognized character encodings.

use std::any::TypeId;

/// Encoding whose code units a [`Character`] type stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharEncoding {
    /// A Unicode scalar value (`char`).
    Utf32,
    /// A narrow C character or UTF-8 code unit (`u8`, `i8`).
    Narrow,
    /// A UTF-16 code unit (`u16`).
    Utf16,
}

mod sealed {
    pub trait Sealed {}
}

/// Types that hold one code unit of a recognized character encoding.
///
/// Use it as a bound for text-aware generic code:
///
/// ```
/// use endian_rs::character::Character;
///
/// fn count_units<C: Character>(text: &[C]) -> usize {
///     text.len()
/// }
///
/// assert_eq!(count_units(&['a', 'b']), 2);
/// assert_eq!(count_units("abc".as_bytes()), 3);
/// ```
pub trait Character: sealed::Sealed + Copy + 'static {
    const ENCODING: CharEncoding;
}

macro_rules! impl_character {
    ($($t:ty => $encoding:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Character for $t {
                const ENCODING: CharEncoding = CharEncoding::$encoding;
            }
        )*
    };
}

impl_character! {
    char => Utf32,
    u8 => Narrow,
    i8 => Narrow,
    u16 => Utf16,
}

/// Whether `T` is one of the [`Character`] types.
pub fn is_char<T: ?Sized + 'static>() -> bool {
    let id = TypeId::of::<T>();
    id == TypeId::of::<char>()
        || id == TypeId::of::<u8>()
        || id == TypeId::of::<i8>()
        || id == TypeId::of::<u16>()
}
