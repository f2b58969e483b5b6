//! Pointer reinterpretation and closed-set numeric conversion.
//!
//! - [`raw`]: relabel the pointee type of typed and raw pointers without touching memory.
//! - [`num`]: convert between primitive numeric types through a single generic call.

#![forbid(missing_docs)]
#![forbid(unused_must_use)]
#![deny(clippy::all)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]
#![deny(clippy::expect_used)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::inline_always)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod num;
pub mod raw;
pub mod ub;

pub use num::{convert, exact_convert, try_convert, Arithmetic, NativeFloat, Number, NumberKind};
pub use raw::{Pointer, PointerKind, RawConst, RawMut, RawPointer, TypedPointer};

/// An error for a checked numeric conversion that could not be carried out.
///
/// # Examples
///
/// Common examples include:
///
/// - The value does not fit in the destination type
/// - A NaN was converted into an integer
/// - The conversion would lose precision
///
/// To find out what specifically happened, match the code with each constant
/// descriptor.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastError {
    code: u8,
}

impl core::ops::BitOr<Self> for CastError {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.add(rhs)
    }
}

impl CastError {
    const RESERVED_CODE: u8 = 0b0000_0000;

    const OUT_OF_RANGE_CODE: u8 = 0b0000_0001;

    const NOT_A_NUMBER_CODE: u8 = 0b0000_0010;

    const INEXACT_CODE: u8 = 0b0000_0100;

    /// A reserved code `0` that does not work as a regular error.
    pub const RESERVED: Self = Self::new(Self::RESERVED_CODE);

    /// An error indicating that the value lies outside the destination range.
    pub const OUT_OF_RANGE: Self = Self::new(Self::OUT_OF_RANGE_CODE);

    /// An error indicating that a NaN cannot be represented by the destination.
    pub const NOT_A_NUMBER: Self = Self::new(Self::NOT_A_NUMBER_CODE);

    /// An error indicating that the conversion would not round-trip.
    pub const INEXACT: Self = Self::new(Self::INEXACT_CODE);

    #[inline]
    const fn new(code: u8) -> Self {
        Self { code }
    }

    /// Adds the two errors into a combination of multiple error codes.
    #[inline]
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self {
            code: (self.code | rhs.code),
        }
    }

    /// Checks if the error is even an error.
    ///
    /// This returns false if and only if `self` IS [`Self::RESERVED`].
    #[inline]
    #[must_use]
    pub const fn is_err(self) -> bool {
        self.code != 0
    }

    /// Checks if the error includes an out of range code.
    #[inline]
    #[must_use]
    pub const fn is_out_of_range(self) -> bool {
        (self.code & Self::OUT_OF_RANGE_CODE) != 0
    }

    /// Checks if the error includes a not-a-number code.
    #[inline]
    #[must_use]
    pub const fn is_not_a_number(self) -> bool {
        (self.code & Self::NOT_A_NUMBER_CODE) != 0
    }

    /// Checks if the error includes an inexact code.
    #[inline]
    #[must_use]
    pub const fn is_inexact(self) -> bool {
        (self.code & Self::INEXACT_CODE) != 0
    }

    /// Raw code bits, one per constant descriptor.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.code
    }
}

impl core::fmt::Display for CastError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        const NAMES: [(CastError, &str); 3] = [
            (CastError::OUT_OF_RANGE, "out of range"),
            (CastError::NOT_A_NUMBER, "not a number"),
            (CastError::INEXACT, "inexact"),
        ];

        if !self.is_err() {
            return f.write_str("no error");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.code & flag.code != 0 {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
impl core::error::Error for CastError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::CastError;
    use std::string::ToString;

    #[test]
    fn codes_combine() {
        let err = CastError::OUT_OF_RANGE | CastError::INEXACT;
        assert!(err.is_err());
        assert!(err.is_out_of_range());
        assert!(err.is_inexact());
        assert!(!err.is_not_a_number());
    }

    #[test]
    fn reserved_is_not_an_error() {
        assert!(!CastError::RESERVED.is_err());
        assert_eq!(CastError::RESERVED.to_string(), "no error");
    }

    #[test]
    fn display_lists_every_code() {
        assert_eq!(CastError::NOT_A_NUMBER.to_string(), "not a number");
        assert_eq!(
            (CastError::INEXACT | CastError::OUT_OF_RANGE).to_string(),
            "out of range | inexact"
        );
    }
}
