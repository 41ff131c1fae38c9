//! Byte-level memory primitives.
//!
//! Slice-based counterparts of `memcpy`, `memmove` and `memset`. Raw
//! pointers are replaced by slices and offsets, so the non-overlap
//! requirement of [`copy`] is enforced by the borrow checker and the
//! overlapping case is expressed as a move inside a single buffer
//! ([`move_within`]).
//!
//! Every operation is a plain byte loop and never calls `core::ptr::copy`
//! or `<[u8]>::copy_from_slice`.
//!
//! The unchecked functions panic on an out-of-range request; the `try_*`
//! variants report [`Error::OutOfBounds`] instead.
//!
//! # Examples
//!
//! ```rust
//! use libfree::mem::{fill, move_within};
//!
//! let mut buf = *b"abcdef";
//! move_within(&mut buf, 0, 2, 4);
//! assert_eq!(&buf, b"ababcd");
//!
//! fill(&mut buf, 0x2d, 3);
//! assert_eq!(&buf, b"---bcd");
//! ```

use crate::error::Error;

/// Copy `n` bytes from `src` into `dest` and return `dest`.
///
/// # Panics
///
/// Panics if `n` exceeds the length of either slice.
pub fn copy<'a>(dest: &'a mut [u8], src: &[u8], n: usize) -> &'a mut [u8] {
    assert!(
        n <= dest.len() && n <= src.len(),
        "copy of {} bytes out of bounds",
        n
    );
    copy_bytes(dest, src, n);
    dest
}

/// Checked variant of [`copy`].
pub fn try_copy<'a>(dest: &'a mut [u8], src: &[u8], n: usize) -> Result<&'a mut [u8], Error> {
    if n > dest.len() || n > src.len() {
        return Err(Error::OutOfBounds);
    }
    copy_bytes(dest, src, n);
    Ok(dest)
}

fn copy_bytes(dest: &mut [u8], src: &[u8], n: usize) {
    for (d, s) in dest[..n].iter_mut().zip(&src[..n]) {
        *d = *s;
    }
}

/// Move `n` bytes inside `buf` from offset `src` to offset `dest`.
///
/// The regions may overlap. Bytes are copied front to back when
/// `dest < src` and back to front otherwise, so no source byte is
/// overwritten before it has been read. Returns `dest`.
///
/// # Panics
///
/// Panics if either `src..src + n` or `dest..dest + n` lies outside `buf`.
pub fn move_within(buf: &mut [u8], src: usize, dest: usize, n: usize) -> usize {
    assert!(
        in_bounds(buf.len(), src, n) && in_bounds(buf.len(), dest, n),
        "move of {} bytes from {} to {} out of bounds",
        n,
        src,
        dest
    );
    move_bytes(buf, src, dest, n);
    dest
}

/// Checked variant of [`move_within`].
pub fn try_move_within(buf: &mut [u8], src: usize, dest: usize, n: usize) -> Result<usize, Error> {
    if !in_bounds(buf.len(), src, n) || !in_bounds(buf.len(), dest, n) {
        return Err(Error::OutOfBounds);
    }
    move_bytes(buf, src, dest, n);
    Ok(dest)
}

fn move_bytes(buf: &mut [u8], src: usize, dest: usize, n: usize) {
    if dest < src {
        for i in 0..n {
            buf[dest + i] = buf[src + i];
        }
    } else {
        for i in (0..n).rev() {
            buf[dest + i] = buf[src + i];
        }
    }
}

fn in_bounds(len: usize, offset: usize, n: usize) -> bool {
    offset.checked_add(n).is_some_and(|end| end <= len)
}

/// Set the first `n` bytes of `dest` to the low 8 bits of `value` and
/// return `dest`.
///
/// # Panics
///
/// Panics if `n > dest.len()`.
pub fn fill(dest: &mut [u8], value: i32, n: usize) -> &mut [u8] {
    let byte = value as u8;
    for b in &mut dest[..n] {
        *b = byte;
    }
    dest
}

/// Checked variant of [`fill`].
pub fn try_fill(dest: &mut [u8], value: i32, n: usize) -> Result<&mut [u8], Error> {
    if n > dest.len() {
        return Err(Error::OutOfBounds);
    }
    Ok(fill(dest, value, n))
}
