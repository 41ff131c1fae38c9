//! Common error type for the checked primitives

use core::fmt;

/// Error returned by the checked (`try_*`) memory, string and sort operations.
///
/// The unchecked operations keep the C contract and never report errors;
/// their preconditions are enforced by slice indexing instead. This enum is
/// deliberately small and `Copy` so it can be passed around freely in
/// `no_std` firmware.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A byte range reaches past the end of one of the slices involved.
    OutOfBounds,
    /// The destination cannot hold the result plus its terminator.
    InsufficientCapacity,
    /// A destination string has no NUL terminator within its slice.
    Unterminated,
    /// The element size is larger than the sort scratch slot.
    ElementTooLarge,
    /// The string bytes before the terminator are not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::OutOfBounds => "range out of bounds",
            Error::InsufficientCapacity => "insufficient destination capacity",
            Error::Unterminated => "string is not NUL-terminated",
            Error::ElementTooLarge => "element size exceeds scratch slot",
            Error::InvalidUtf8 => "string is not valid UTF-8",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::OutOfBounds => defmt::write!(f, "OutOfBounds"),
            Error::InsufficientCapacity => defmt::write!(f, "InsufficientCapacity"),
            Error::Unterminated => defmt::write!(f, "Unterminated"),
            Error::ElementTooLarge => defmt::write!(f, "ElementTooLarge"),
            Error::InvalidUtf8 => defmt::write!(f, "InvalidUtf8"),
        }
    }
}
