//! Bounded formatted output.
//!
//! A small `snprintf` for code that has no C runtime to lean on. The format
//! string is scanned left to right; literal bytes are copied through and
//! each `%` directive is parsed by [`Directive::parse`] and rendered from
//! the next entry of a pre-captured argument list ([`Arg`]).
//!
//! # Supported directives
//!
//! | Conversion | Argument | Output                                   |
//! |------------|----------|------------------------------------------|
//! | `d` `i`    | integer  | signed decimal                           |
//! | `u`        | integer  | unsigned decimal                         |
//! | `o`        | integer  | unsigned octal, `#` adds a leading `0`   |
//! | `x` `X`    | integer  | unsigned hex, `#` adds `0x`              |
//! | `p`        | integer  | same as `x`                              |
//! | `s`        | string   | bytes up to NUL, right-padded to width   |
//! | `c`        | integer  | the low byte                             |
//! | other      | none     | the conversion byte itself (`%%` → `%`)  |
//!
//! Flags `#` and `0`, a decimal width and the `h`/`hh` size overrides may
//! precede the conversion. There is no precision, no left-justify flag, no
//! floating point and no positional argument.
//!
//! # Truncation
//!
//! Output is bounded by the destination slice. At most `len - 1` bytes are
//! stored, a NUL always follows them when the slice is not empty, and the
//! returned count is the length the complete output would have had.
//!
//! ```rust
//! use libfree::format::{Arg, format_into};
//!
//! let mut buf = [0u8; 8];
//! let n = format_into(&mut buf, b"lba=%#x!", &[Arg::from(0x1234u32)]);
//! assert_eq!(n, 11);
//! assert_eq!(&buf, b"lba=0x1\0");
//! ```

mod arg;
mod directive;


pub use arg::{Arg, Args};
pub use directive::{Conversion, Directive, Size};

use crate::string;

/// Capacity used by [`format`] and [`format_line`], terminator included.
pub const FORMAT_CAPACITY: usize = 256;

/// Scratch space for the digits of one number: a `u32` in base 8 takes 11.
pub const DIGIT_BUFFER_LEN: usize = 12;

/// Rendered line returned by [`format_line`], without terminator.
pub type Line = heapless::Vec<u8, FORMAT_CAPACITY>;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Write position over a bounded output buffer.
///
/// The position keeps counting past the end of the buffer so the full
/// output length is known, but bytes are only stored below the slot kept
/// for the terminator.
struct Cursor<'b> {
    buf: &'b mut [u8],
    pos: usize,
    // index of the terminator slot, `None` for an empty buffer
    end: Option<usize>,
}

impl<'b> Cursor<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        let end = buf.len().checked_sub(1);
        Self { buf, pos: 0, end }
    }

    fn put(&mut self, c: u8) {
        if let Some(end) = self.end {
            if self.pos < end {
                self.buf[self.pos] = c;
            }
        }
        self.pos += 1;
    }

    fn pad(&mut self, c: u8, count: i32) {
        for _ in 0..count.max(0) {
            self.put(c);
        }
    }

    /// Terminate the output and return the untruncated length.
    fn finish(self) -> usize {
        if let Some(end) = self.end {
            #[cfg(feature = "defmt")]
            if self.pos > end {
                defmt::trace!("format output truncated: {=usize} > {=usize}", self.pos, end);
            }
            self.buf[self.pos.min(end)] = 0;
        }
        self.pos
    }
}

/// Render `format` with `args` into `buffer`.
///
/// At most `buffer.len() - 1` bytes are written, followed by a NUL; an
/// empty buffer is left untouched. The format string ends at its first NUL
/// or at the end of the slice. Returns the number of bytes the complete
/// output takes, terminator excluded, which exceeds `buffer.len() - 1` when
/// the output was truncated.
///
/// Each `s`, `c` or numeric directive consumes one argument. Missing
/// arguments read as `0` or as the empty string.
pub fn format_into(buffer: &mut [u8], format: &[u8], args: &[Arg<'_>]) -> usize {
    let mut out = Cursor::new(buffer);
    let mut args = Args::new(args);
    let mut i = 0;

    while let Some(&c) = format.get(i) {
        if c == 0 {
            break;
        }
        i += 1;

        if c != b'%' {
            out.put(c);
            continue;
        }

        let Some((directive, used)) = Directive::parse(&format[i..]) else {
            break;
        };
        i += used;
        render(&mut out, &directive, &mut args);
    }

    out.finish()
}

/// [`format_into`] with the fixed [`FORMAT_CAPACITY`].
pub fn format(buffer: &mut [u8; FORMAT_CAPACITY], format: &[u8], args: &[Arg<'_>]) -> usize {
    format_into(buffer, format, args)
}

/// Render into a fresh [`Line`] holding the stored bytes.
///
/// ```rust
/// use libfree::format::{Arg, format_line};
///
/// let line = format_line(b"%s: %3u%%", &[Arg::from("cpu"), Arg::from(7u8)]);
/// assert_eq!(&line[..], b"cpu:   7%");
/// ```
pub fn format_line(format: &[u8], args: &[Arg<'_>]) -> Line {
    let mut buf = [0u8; FORMAT_CAPACITY];
    let written = format_into(&mut buf, format, args).min(FORMAT_CAPACITY - 1);
    Line::from_slice(&buf[..written]).unwrap_or_default()
}

fn render(out: &mut Cursor<'_>, d: &Directive, args: &mut Args<'_, '_>) {
    match d.conversion {
        Conversion::Str => {
            let s = args.next_str();
            let s = &s[..string::length(s)];
            for &c in s {
                out.put(c);
            }
            out.pad(b' ', str_padding(d.width, s.len()));
        }
        Conversion::Char => out.put(args.next_int() as u8),
        Conversion::Literal(c) => out.put(c),
        Conversion::Octal
        | Conversion::Decimal
        | Conversion::Unsigned
        | Conversion::HexLower
        | Conversion::HexUpper
        | Conversion::Pointer => render_number(out, d, args.next_int()),
    }
}

/// Spaces needed after a string of `len` bytes to reach `width`.
fn str_padding(width: i32, len: usize) -> i32 {
    width.saturating_sub(i32::try_from(len).unwrap_or(i32::MAX))
}

fn render_number(out: &mut Cursor<'_>, d: &Directive, raw: u32) {
    let base = d.conversion.base().unwrap_or(10);
    let signed = d.conversion.is_signed();
    let mut x = d.size.apply(raw, signed);
    let mut width = d.width;
    let mut sign_pending = false;

    if signed && (x as i32) < 0 {
        // With zero padding the sign goes in front of the zeros, otherwise
        // it follows the spaces.
        if d.zero_pad {
            out.put(b'-');
        } else {
            sign_pending = true;
        }
        width -= 1;
        x = x.wrapping_neg();
    }

    if d.alternate && (base == 8 || base == 16) {
        out.put(b'0');
        width -= 1;
        if base == 16 {
            out.put(b'x');
            width -= 1;
        }
    }

    let table = if d.conversion.is_upper() {
        UPPER_DIGITS
    } else {
        LOWER_DIGITS
    };
    let mut digits = [0u8; DIGIT_BUFFER_LEN];
    let mut n = 0;
    if x == 0 {
        digits[0] = b'0';
        n = 1;
    }
    while x != 0 {
        digits[n] = table[(x % base) as usize];
        x /= base;
        n += 1;
    }

    out.pad(if d.zero_pad { b'0' } else { b' ' }, width - n as i32);
    if sign_pending {
        out.put(b'-');
    }
    for &c in digits[..n].iter().rev() {
        out.put(c);
    }
}

/// Format into a byte buffer with inline arguments.
///
/// Expands to [`format_into`] with each argument converted through
/// [`Arg::from`]. The format may be a `&str` or a byte string.
///
/// ```rust
/// use libfree::sprintf;
///
/// let mut buf = [0u8; 32];
/// let n = sprintf!(&mut buf, "%s%hhu: %05d", "sd", 258u32, -42i32);
/// assert_eq!(&buf[..n], b"sd2: -0042");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::format_into(
            $buf,
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::format::Arg::from($arg)),*],
        )
    };
}
