//! # libfree - freestanding C runtime primitives
//!
//! The handful of C library routines that boot loaders, kernels and bare
//! metal firmware keep needing before (or instead of) a real C runtime:
//! a bounded `snprintf`, `memcpy`/`memmove`/`memset`, `strlen`/`strcpy`/
//! `strcat` and a small in-place sort. Everything works on caller-supplied
//! buffers; nothing allocates and nothing keeps state between calls.
//!
//! ## Modules
//!
//! - [`format`]: bounded formatted output (`%d %i %u %o %x %X %p %s %c`,
//!   flags `#` and `0`, width, `h`/`hh`)
//! - [`mem`]: byte copy, overlapping move and fill
//! - [`string`]: NUL-terminated byte strings
//! - [`sort`]: insertion sort over opaque fixed-size elements
//!
//! ## Usage
//!
//! ```rust
//! use libfree::format::Arg;
//! use libfree::{format_into, sort, string};
//!
//! let mut line = [0u8; 32];
//! let n = format_into(&mut line, b"part%d @ %#010x", &[Arg::from(2i32), Arg::from(0x800u32)]);
//! assert_eq!(string::as_str(&line), Ok("part2 @ 0x00000800"));
//! assert_eq!(n, 18);
//!
//! let mut ids = *b"4213";
//! sort::sort(&mut ids, 4, 1, |a, b| a.cmp(b));
//! assert_eq!(&ids, b"1234");
//! ```
//!
//! ## Optional Features
//!
//! - `std`: build against the standard library and implement
//!   `std::error::Error` (default: disabled)
//! - `defmt`: `defmt::Format` for the public types, plus trace/warn logging
//!   of truncated output and missing format arguments

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

/// Common error type for the checked operations.
pub mod error;

/// Bounded formatted output into caller buffers.
pub mod format;

/// Byte copy, move and fill.
pub mod mem;

/// NUL-terminated byte string helpers.
pub mod string;

/// In-place insertion sort.
pub mod sort;

pub use error::Error;
pub use format::{Arg, format, format_into, format_line};
