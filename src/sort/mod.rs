//! In-place insertion sort.
//!
//! [`sort`] is the `qsort`-shaped entry point: it sorts `count` opaque
//! elements of `element_size` bytes laid out back to back in a byte buffer,
//! ordering them with a caller-supplied comparison. The element being
//! inserted is parked in a fixed [`SORT_SCRATCH_LEN`]-byte stack slot while
//! the run in front of it is shifted up by one element, so no allocation
//! takes place.
//!
//! The algorithm is quadratic in the worst case and is only meant for the
//! short tables found in boot code (partition entries, memory map ranges).
//! An element only moves past predecessors that compare greater, so equal
//! elements keep their relative order and sorting is idempotent.

use core::cmp::Ordering;

use crate::error::Error;
use crate::mem;

/// Capacity of the scratch slot holding the element being inserted.
pub const SORT_SCRATCH_LEN: usize = 32;

/// Sort `count` elements of `element_size` bytes at the start of `base`
/// in ascending order according to `compare`.
///
/// An element not less than its left neighbour is never moved, so an
/// ascending input (ties included) costs `count - 1` comparisons and no
/// writes.
///
/// # Panics
///
/// Panics if `element_size > SORT_SCRATCH_LEN` or if `base` is shorter than
/// `count * element_size`.
///
/// # Examples
///
/// ```rust
/// use libfree::sort::sort;
///
/// // three little-endian u16 values
/// let mut table = [0x30, 0x00, 0x10, 0x00, 0x20, 0x00];
/// sort(&mut table, 3, 2, |a, b| {
///     u16::from_le_bytes([a[0], a[1]]).cmp(&u16::from_le_bytes([b[0], b[1]]))
/// });
/// assert_eq!(table, [0x10, 0x00, 0x20, 0x00, 0x30, 0x00]);
/// ```
pub fn sort<F>(base: &mut [u8], count: usize, element_size: usize, compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    assert!(
        element_size <= SORT_SCRATCH_LEN,
        "element size {} exceeds sort scratch slot",
        element_size
    );
    assert!(
        count
            .checked_mul(element_size)
            .is_some_and(|len| len <= base.len()),
        "sort of {} elements out of bounds",
        count
    );
    insertion_sort(base, count, element_size, compare);
}

/// Checked variant of [`sort`].
pub fn try_sort<F>(base: &mut [u8], count: usize, element_size: usize, compare: F) -> Result<(), Error>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if element_size > SORT_SCRATCH_LEN {
        return Err(Error::ElementTooLarge);
    }
    match count.checked_mul(element_size) {
        Some(len) if len <= base.len() => {}
        _ => return Err(Error::OutOfBounds),
    }
    insertion_sort(base, count, element_size, compare);
    Ok(())
}

fn insertion_sort<F>(base: &mut [u8], count: usize, size: usize, mut compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mut scratch = [0u8; SORT_SCRATCH_LEN];

    for i in 1..count {
        let p = i * size;

        // Walk left past elements strictly greater than the candidate.
        let mut slot = i;
        while slot > 0 {
            let q = (slot - 1) * size;
            if compare(&base[p..p + size], &base[q..q + size]) != Ordering::Less {
                break;
            }
            slot -= 1;
        }

        if slot != i {
            let q = slot * size;
            mem::copy(&mut scratch, &base[p..p + size], size);
            mem::move_within(base, q, q + size, p - q);
            mem::copy(&mut base[q..], &scratch, size);
        }
    }
}

/// Insertion sort over typed elements.
///
/// Same algorithm and ordering guarantees as [`sort`]; the scratch slot is a
/// single `T`, so any `Copy` element size is accepted.
pub fn sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let candidate = items[i];

        let mut slot = i;
        while slot > 0 && compare(&candidate, &items[slot - 1]) == Ordering::Less {
            slot -= 1;
        }

        if slot != i {
            let mut j = i;
            while j > slot {
                items[j] = items[j - 1];
                j -= 1;
            }
            items[slot] = candidate;
        }
    }
}
