//! Type-erased format arguments and the cursor that hands them out.

/// One argument for a format directive.
///
/// C varargs are replaced by a pre-captured `&[Arg]`. Integers are stored at
/// the default promoted width (`u32`, the `unsigned int` a C `va_arg` would
/// fetch); signed values are stored as their two's complement bit pattern
/// and re-interpreted by the directive that consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// An integer at the default promoted width.
    Int(u32),
    /// A single byte for `%c`.
    Char(u8),
    /// A string for `%s`, read up to its first NUL or the end of the slice.
    Str(&'a [u8]),
}

impl<'a> Arg<'a> {
    /// Capture a pointer for `%p`.
    ///
    /// The address is truncated to the default integer width, matching
    /// what the conversion fetches.
    pub fn ptr<T>(p: *const T) -> Self {
        Arg::Int(p as usize as u32)
    }

    /// The argument as read by a numeric or `%c` directive.
    ///
    /// A string argument reads as `0`.
    pub fn as_int(&self) -> u32 {
        match *self {
            Arg::Int(v) => v,
            Arg::Char(c) => u32::from(c),
            Arg::Str(_) => 0,
        }
    }

    /// The argument as read by a `%s` directive.
    ///
    /// A numeric argument reads as the empty string.
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Arg::Str(s) => s,
            Arg::Int(_) | Arg::Char(_) => &[],
        }
    }
}

macro_rules! arg_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg<'_> {
            fn from(v: $t) -> Self {
                Arg::Int(v as i32 as u32)
            }
        }
    )*};
}

macro_rules! arg_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg<'_> {
            fn from(v: $t) -> Self {
                Arg::Int(v as u32)
            }
        }
    )*};
}

// C promotes sub-int arguments to int; wider ones are truncated.
arg_from_signed!(i8, i16, i32, i64, isize);
arg_from_unsigned!(u8, u16, u32, u64, usize);

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(c as u8)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Arg::Str(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Arg::Str(s)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Arg<'_> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Arg::Int(v) => defmt::write!(f, "Int({=u32})", v),
            Arg::Char(c) => defmt::write!(f, "Char({=u8})", c),
            Arg::Str(s) => defmt::write!(f, "Str({=[u8]})", s),
        }
    }
}

/// Cursor over the argument list of a single formatting call.
///
/// Each consuming directive takes exactly one argument. Reading past the
/// end yields `0` or the empty string rather than failing.
#[derive(Debug)]
pub struct Args<'s, 'a> {
    list: &'s [Arg<'a>],
    next: usize,
}

impl<'s, 'a> Args<'s, 'a> {
    /// Start a cursor at the first argument.
    pub fn new(list: &'s [Arg<'a>]) -> Self {
        Self { list, next: 0 }
    }

    /// Number of arguments handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }

    /// Fetch the next argument for a numeric or `%c` directive.
    pub fn next_int(&mut self) -> u32 {
        self.fetch().map_or(0, |arg| arg.as_int())
    }

    /// Fetch the next argument for a `%s` directive.
    pub fn next_str(&mut self) -> &'a [u8] {
        self.fetch().map_or(&[] as &[u8], |arg| arg.as_bytes())
    }

    fn fetch(&mut self) -> Option<Arg<'a>> {
        let arg = self.list.get(self.next).copied();
        #[cfg(feature = "defmt")]
        if arg.is_none() {
            defmt::warn!("format argument {=usize} missing", self.next);
        }
        self.next += 1;
        arg
    }
}
