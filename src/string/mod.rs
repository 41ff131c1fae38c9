//! NUL-terminated byte strings.
//!
//! Counterparts of `strlen`, `strcpy` and `strcat` operating on byte slices.
//! A string is the run of bytes before the first NUL; when a slice holds no
//! NUL at all the whole slice is taken as the string, which keeps the
//! functions total on arbitrary input.

use crate::error::Error;
use crate::mem;

/// NUL terminator.
pub const NUL: u8 = 0;

/// Number of bytes preceding the first NUL in `s`.
///
/// Returns `s.len()` when `s` contains no NUL.
///
/// ```rust
/// use libfree::string::length;
///
/// assert_eq!(length(b"boot\0junk"), 4);
/// assert_eq!(length(b"no terminator"), 13);
/// ```
pub fn length(s: &[u8]) -> usize {
    s.iter().position(|&b| b == NUL).unwrap_or(s.len())
}

/// Copy the string in `src`, terminator included, to the start of `dest`
/// and return `dest`.
///
/// # Panics
///
/// Panics if `dest` is shorter than `length(src) + 1`.
pub fn copy_string<'a>(dest: &'a mut [u8], src: &[u8]) -> &'a mut [u8] {
    let n = length(src);
    mem::copy(dest, src, n);
    dest[n] = NUL;
    dest
}

/// Checked variant of [`copy_string`].
pub fn try_copy_string<'a>(dest: &'a mut [u8], src: &[u8]) -> Result<&'a mut [u8], Error> {
    if length(src) >= dest.len() {
        return Err(Error::InsufficientCapacity);
    }
    Ok(copy_string(dest, src))
}

/// Append the string in `src` to the string already held in `dest`.
///
/// Returns the index of the new terminator, one past the appended text.
///
/// # Panics
///
/// Panics if the combined string and its terminator do not fit in `dest`.
///
/// ```rust
/// use libfree::string::append_string;
///
/// let mut buf = *b"disk\0\0\0\0\0\0";
/// let end = append_string(&mut buf, b"0p1\0");
/// assert_eq!(end, 7);
/// assert_eq!(&buf[..8], b"disk0p1\0");
/// ```
pub fn append_string(dest: &mut [u8], src: &[u8]) -> usize {
    let start = length(dest);
    copy_string(&mut dest[start..], src);
    start + length(src)
}

/// Checked variant of [`append_string`].
pub fn try_append_string(dest: &mut [u8], src: &[u8]) -> Result<usize, Error> {
    let start = length(dest);
    if start == dest.len() {
        return Err(Error::Unterminated);
    }
    if start + length(src) >= dest.len() {
        return Err(Error::InsufficientCapacity);
    }
    Ok(append_string(dest, src))
}

/// View the string in `s` as `&str`.
pub fn as_str(s: &[u8]) -> Result<&str, Error> {
    core::str::from_utf8(&s[..length(s)]).map_err(|_| Error::InvalidUtf8)
}
