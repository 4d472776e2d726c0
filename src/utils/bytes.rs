// src/utils/bytes.rs
use bytemuck::Pod;

/// Reverse `bytes` by exchanging symmetric pairs from both ends inward.
///
/// For an odd length the middle byte stays where it is. Empty and single-byte
/// slices are left untouched.
#[inline]
pub fn reverse_bytes(bytes: &mut [u8]) {
    if bytes.len() < 2 {
        return;
    }

    let mut lo = 0;
    let mut hi = bytes.len() - 1;
    while lo < hi {
        bytes.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
}

/// Reverse the bytes of every element of `data`, each element on its own.
pub fn reverse_each<T: Pod>(data: &mut [T]) {
    let size = std::mem::size_of::<T>();
    if size <= 1 {
        return;
    }

    let bytes: &mut [u8] = bytemuck::cast_slice_mut(data);
    for chunk in bytes.chunks_exact_mut(size) {
        reverse_bytes(chunk);
    }
}
