//! Conversions between the primitive numeric types through one generic call.
//!
//! The supported set is closed: signed integers `i8` to `i64` and `isize`,
//! their unsigned counterparts, `f32`, `f64`, and the platform float
//! [`NativeFloat`]. Each member is a variant of [`Number`], and every
//! conversion is a total `match` over that enum, so a member added without a
//! conversion arm fails to compile instead of falling through at runtime.
//!
//! [`convert`] follows `as` semantics:
//!
//! - integer narrowing wraps modulo 2^N (`300 -> u8 == 44`)
//! - integer widening sign- or zero-extends
//! - float to integer truncates toward zero and saturates, NaN becomes `0`
//! - integer to float rounds to nearest
//!
//! [`try_convert`] and [`exact_convert`] refuse conversions that would lose
//! the value instead.

use crate::CastError;
use core::fmt::Debug;
use num_traits::NumCast;

/// Expands to an exhaustive `as` conversion of a [`Number`] into `$t`.
macro_rules! convert_number {
    ($number:expr => $t:ty) => {
        match $number {
            Number::I8(n) => n as $t,
            Number::I16(n) => n as $t,
            Number::I32(n) => n as $t,
            Number::I64(n) => n as $t,
            Number::Isize(n) => n as $t,
            Number::U8(n) => n as $t,
            Number::U16(n) => n as $t,
            Number::U32(n) => n as $t,
            Number::U64(n) => n as $t,
            Number::Usize(n) => n as $t,
            Number::F32(n) => n as $t,
            Number::F64(n) => n as $t,
            Number::Native(n) => n.get() as $t,
        }
    };
}

/// Runs `$body` with `$n` bound to the typed payload of a [`Number`].
macro_rules! each_number {
    ($number:expr, $n:ident => $body:expr) => {
        match $number {
            Number::I8($n) => $body,
            Number::I16($n) => $body,
            Number::I32($n) => $body,
            Number::I64($n) => $body,
            Number::Isize($n) => $body,
            Number::U8($n) => $body,
            Number::U16($n) => $body,
            Number::U32($n) => $body,
            Number::U64($n) => $body,
            Number::Usize($n) => $body,
            Number::F32($n) => $body,
            Number::F64($n) => $body,
            Number::Native($n) => $body,
        }
    };
}

mod native;
mod number;

pub use native::{NativeFloat, NativeRepr};
pub use number::{Number, NumberKind};

mod sealed {
    pub trait Sealed {}
}

/// A member of the closed set of convertible numeric types.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`,
/// `u64`, `usize`, `f32`, `f64` and [`NativeFloat`]. Sealed.
pub trait Arithmetic: Copy + PartialEq + PartialOrd + Debug + NumCast + sealed::Sealed {
    /// Runtime tag of this type.
    const KIND: NumberKind;

    /// Wraps the value in its [`Number`] variant.
    fn into_number(self) -> Number;

    /// Converts any [`Number`] into `Self` with `as` semantics.
    fn from_number(number: Number) -> Self;

    /// Converts into `R` with `as` semantics. Never fails.
    #[inline(always)]
    #[must_use]
    fn convert<R: Arithmetic>(self) -> R {
        R::from_number(self.into_number())
    }

    /// Converts into `R` if the value (truncated toward zero when converting
    /// a float into an integer) lies in `R`'s range.
    ///
    /// A finite float too large for a narrower float type is out of range;
    /// infinities convert to infinities.
    ///
    /// # Errors
    ///
    /// [`CastError::NOT_A_NUMBER`] for a NaN going into an integer,
    /// [`CastError::OUT_OF_RANGE`] for anything else that does not fit.
    #[inline]
    fn try_convert<R: Arithmetic>(self) -> Result<R, CastError> {
        match <R as NumCast>::from(self) {
            // narrowing float casts saturate to infinity instead of failing
            Some(out) if out.into_number().is_infinite() && !self.into_number().is_infinite() => {
                Err(CastError::OUT_OF_RANGE)
            }
            Some(out) => Ok(out),
            None if self.into_number().is_nan() => Err(CastError::NOT_A_NUMBER),
            None => Err(CastError::OUT_OF_RANGE),
        }
    }

    /// Converts into `R` only if converting back yields the same value.
    ///
    /// NaN converts exactly between float types.
    ///
    /// # Errors
    ///
    /// Anything [`Arithmetic::try_convert`] rejects, plus
    /// [`CastError::INEXACT`] when the conversion rounds or truncates.
    #[inline]
    fn exact_convert<R: Arithmetic>(self) -> Result<R, CastError> {
        let out = self.try_convert::<R>()?;

        // only float-to-float gets past try_convert with a NaN
        if self.into_number().is_nan() {
            return Ok(out);
        }

        match <Self as NumCast>::from(out) {
            Some(back) if back == self => Ok(out),
            _ => Err(CastError::INEXACT),
        }
    }
}

macro_rules! impl_arithmetic {
    ($($t:ty => $variant:ident;)+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                const KIND: NumberKind = NumberKind::$variant;

                #[inline(always)]
                fn into_number(self) -> Number {
                    Number::$variant(self)
                }

                #[inline(always)]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from_number(number: Number) -> Self {
                    convert_number!(number => $t)
                }
            }

            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_arithmetic! {
    i8 => I8;
    i16 => I16;
    i32 => I32;
    i64 => I64;
    isize => Isize;
    u8 => U8;
    u16 => U16;
    u32 => U32;
    u64 => U64;
    usize => Usize;
    f32 => F32;
    f64 => F64;
}

impl sealed::Sealed for NativeFloat {}

impl Arithmetic for NativeFloat {
    const KIND: NumberKind = NumberKind::Native;

    #[inline(always)]
    fn into_number(self) -> Number {
        Number::Native(self)
    }

    #[inline(always)]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_lossless,
        clippy::unnecessary_cast
    )]
    fn from_number(number: Number) -> Self {
        Self::new(convert_number!(number => NativeRepr))
    }
}

impl From<NativeFloat> for Number {
    #[inline]
    fn from(value: NativeFloat) -> Self {
        Self::Native(value)
    }
}

/// Converts `value` into `R` with `as` semantics.
///
/// ```
/// assert_eq!(castable::convert::<i32, u8>(300), 44);
/// assert_eq!(castable::convert::<f64, i32>(-3.9), -3);
/// ```
#[inline(always)]
#[must_use]
pub fn convert<S: Arithmetic, R: Arithmetic>(value: S) -> R {
    value.convert()
}

/// Free-function form of [`Arithmetic::try_convert`].
///
/// # Errors
///
/// See [`Arithmetic::try_convert`].
#[inline]
pub fn try_convert<S: Arithmetic, R: Arithmetic>(value: S) -> Result<R, CastError> {
    value.try_convert()
}

/// Free-function form of [`Arithmetic::exact_convert`].
///
/// # Errors
///
/// See [`Arithmetic::exact_convert`].
#[inline]
pub fn exact_convert<S: Arithmetic, R: Arithmetic>(value: S) -> Result<R, CastError> {
    value.exact_convert()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_keeps_value() {
        assert_eq!(convert::<i8, i64>(-5), -5);
        assert_eq!(convert::<u16, u64>(u16::MAX), 65_535);
        assert_eq!(convert::<i32, isize>(i32::MIN), i32::MIN as isize);
    }

    #[test]
    fn narrowing_wraps() {
        assert_eq!(convert::<i32, u8>(300), 44);
        assert_eq!(convert::<i64, i8>(200), -56);
        assert_eq!(convert::<i8, u32>(-1), u32::MAX);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(convert::<f64, i32>(3.9), 3);
        assert_eq!(convert::<f64, i32>(-3.9), -3);
        assert_eq!(convert::<f32, u8>(-3.9), 0);
        assert_eq!(convert::<f64, u8>(f64::NAN), 0);
    }

    #[test]
    fn method_form_matches_free_function() {
        let x = 1234i16;
        assert_eq!(x.convert::<f32>().to_bits(), convert::<i16, f32>(x).to_bits());
    }

    #[test]
    fn kinds_match_variants() {
        assert_eq!(i8::KIND, NumberKind::I8);
        assert_eq!(usize::KIND, NumberKind::Usize);
        assert_eq!(NativeFloat::KIND, NumberKind::Native);
        assert_eq!(7u32.into_number().kind(), u32::KIND);
    }

    #[test]
    fn nan_into_integer_is_rejected() {
        assert_eq!(try_convert::<f32, i64>(f32::NAN), Err(CastError::NOT_A_NUMBER));
    }

    #[test]
    fn exact_rejects_rounding() {
        assert_eq!(exact_convert::<f64, i32>(3.5), Err(CastError::INEXACT));
        assert_eq!(exact_convert::<f64, i32>(3.0), Ok(3));
        assert!(matches!(exact_convert::<f64, f32>(f64::NAN), Ok(n) if n.is_nan()));
    }

    #[test]
    fn narrowing_float_overflow_is_out_of_range() {
        assert_eq!(try_convert::<f64, f32>(f64::MAX), Err(CastError::OUT_OF_RANGE));
        assert_eq!(exact_convert::<f64, f32>(-1e300), Err(CastError::OUT_OF_RANGE));
        assert!(matches!(
            try_convert::<f64, f32>(f64::NEG_INFINITY),
            Ok(n) if n.is_infinite() && n.is_sign_negative()
        ));
    }
}
