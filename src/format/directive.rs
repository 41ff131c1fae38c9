//! Parsing of a single `%` directive.
//!
//! The grammar accepted after the `%` is
//!
//! ```text
//! directive := (flag | width | size)* conv
//! flag      := '#' | '0'
//! width     := digit(1-9) digit(0-9)*
//! size      := 'h' | 'hh'
//! ```
//!
//! Modifiers are accumulated in a [`Directive`] until a conversion byte is
//! seen. A `0` is always the zero-pad flag and never starts a width, so a
//! width of literal zero cannot be expressed.

/// Terminal conversion of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `o`
    Octal,
    /// `d` or `i`
    Decimal,
    /// `u`
    Unsigned,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `p`, bare lower-case hex
    Pointer,
    /// `s`
    Str,
    /// `c`
    Char,
    /// Any other byte, `%` included, echoed as-is.
    Literal(u8),
}

impl Conversion {
    /// Classify a conversion byte.
    pub fn from_byte(c: u8) -> Self {
        match c {
            b'o' => Conversion::Octal,
            b'd' | b'i' => Conversion::Decimal,
            b'u' => Conversion::Unsigned,
            b'x' => Conversion::HexLower,
            b'X' => Conversion::HexUpper,
            b'p' => Conversion::Pointer,
            b's' => Conversion::Str,
            b'c' => Conversion::Char,
            other => Conversion::Literal(other),
        }
    }

    /// Radix of a numeric conversion, `None` for the others.
    pub fn base(self) -> Option<u32> {
        match self {
            Conversion::Octal => Some(8),
            Conversion::Decimal | Conversion::Unsigned => Some(10),
            Conversion::HexLower | Conversion::HexUpper | Conversion::Pointer => Some(16),
            Conversion::Str | Conversion::Char | Conversion::Literal(_) => None,
        }
    }

    /// Whether the argument is interpreted as signed.
    pub fn is_signed(self) -> bool {
        self == Conversion::Decimal
    }

    /// Whether hex digits are upper-case.
    pub fn is_upper(self) -> bool {
        self == Conversion::HexUpper
    }
}

/// Sub-integer size override from `h` / `hh`.
///
/// Ordered by precedence: once `hh` has been seen a later `h` does not
/// widen the argument again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Size {
    /// No override, full default width.
    #[default]
    Int,
    /// `h`: 16 bits.
    Short,
    /// `hh`: 8 bits.
    Char,
}

impl Size {
    /// Narrow `raw` to this size, sign- or zero-extending it back to 32 bits.
    pub fn apply(self, raw: u32, signed: bool) -> u32 {
        match (self, signed) {
            (Size::Int, _) => raw,
            (Size::Short, true) => raw as u16 as i16 as i32 as u32,
            (Size::Short, false) => u32::from(raw as u16),
            (Size::Char, true) => raw as u8 as i8 as i32 as u32,
            (Size::Char, false) => u32::from(raw as u8),
        }
    }
}

/// Accumulated state of one directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// `#`: prefix octal with `0` and hex with `0x`.
    pub alternate: bool,
    /// `0`: pad numbers with zeros instead of spaces.
    pub zero_pad: bool,
    /// Minimum field width, `0` when none was given.
    pub width: i32,
    /// Sub-integer size override.
    pub size: Size,
    /// Terminal conversion.
    pub conversion: Conversion,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            alternate: false,
            zero_pad: false,
            width: 0,
            size: Size::Int,
            conversion: Conversion::Literal(b'%'),
        }
    }
}

impl Directive {
    /// Parse the directive starting just after a `%`.
    ///
    /// Returns the directive and the number of bytes consumed, conversion
    /// byte included. Returns `None` when the format string ends (slice end
    /// or NUL) before a conversion byte.
    ///
    /// ```rust
    /// use libfree::format::{Conversion, Directive, Size};
    ///
    /// let (d, used) = Directive::parse(b"#08hhx rest").unwrap();
    /// assert_eq!(used, 6);
    /// assert!(d.alternate && d.zero_pad);
    /// assert_eq!(d.width, 8);
    /// assert_eq!(d.size, Size::Char);
    /// assert_eq!(d.conversion, Conversion::HexLower);
    /// ```
    pub fn parse(rest: &[u8]) -> Option<(Directive, usize)> {
        let mut d = Directive::default();
        let mut i = 0;

        loop {
            let c = *rest.get(i).filter(|&&c| c != 0)?;
            i += 1;
            match c {
                b'#' => d.alternate = true,
                b'0' => d.zero_pad = true,
                b'1'..=b'9' => {
                    d.width = i32::from(c - b'0');
                    while let Some(&(digit @ b'0'..=b'9')) = rest.get(i) {
                        d.width = d
                            .width
                            .saturating_mul(10)
                            .saturating_add(i32::from(digit - b'0'));
                        i += 1;
                    }
                }
                b'h' => {
                    let size = if rest.get(i) == Some(&b'h') {
                        i += 1;
                        Size::Char
                    } else {
                        Size::Short
                    };
                    d.size = d.size.max(size);
                }
                conv => {
                    d.conversion = Conversion::from_byte(conv);
                    return Some((d, i));
                }
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Conversion {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Conversion::Octal => defmt::write!(f, "Octal"),
            Conversion::Decimal => defmt::write!(f, "Decimal"),
            Conversion::Unsigned => defmt::write!(f, "Unsigned"),
            Conversion::HexLower => defmt::write!(f, "HexLower"),
            Conversion::HexUpper => defmt::write!(f, "HexUpper"),
            Conversion::Pointer => defmt::write!(f, "Pointer"),
            Conversion::Str => defmt::write!(f, "Str"),
            Conversion::Char => defmt::write!(f, "Char"),
            Conversion::Literal(c) => defmt::write!(f, "Literal({=u8})", c),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Size {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Size::Int => defmt::write!(f, "Int"),
            Size::Short => defmt::write!(f, "Short"),
            Size::Char => defmt::write!(f, "Char"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Directive {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Directive(alternate={=bool}, zero_pad={=bool}, width={=i32}, size={}, conversion={})",
            self.alternate,
            self.zero_pad,
            self.width,
            self.size,
            self.conversion
        )
    }
}
