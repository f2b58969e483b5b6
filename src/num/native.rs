//! The platform floating type.

use core::fmt;
use num_traits::{NumCast, ToPrimitive};

/// Primitive backing [`NativeFloat`] on the current target.
#[cfg(target_pointer_width = "64")]
pub type NativeRepr = f64;

/// Primitive backing [`NativeFloat`] on the current target.
#[cfg(not(target_pointer_width = "64"))]
pub type NativeRepr = f32;

/// A float as wide as the target's pointers: `f64` on 64-bit targets, `f32`
/// elsewhere.
///
/// It is a distinct member of the convertible set even though its layout
/// matches one of the primitive floats.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct NativeFloat(NativeRepr);

impl NativeFloat {
    /// Wraps a primitive float.
    #[inline(always)]
    #[must_use]
    pub const fn new(value: NativeRepr) -> Self {
        Self(value)
    }

    /// The wrapped primitive.
    #[inline(always)]
    #[must_use]
    pub const fn get(self) -> NativeRepr {
        self.0
    }

    /// Whether the value is NaN.
    #[inline]
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Whether the value is positive or negative infinity.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }
}

impl From<NativeRepr> for NativeFloat {
    fn from(value: NativeRepr) -> Self {
        Self(value)
    }
}

impl From<NativeFloat> for NativeRepr {
    fn from(value: NativeFloat) -> Self {
        value.0
    }
}

impl fmt::Display for NativeFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! delegate_to_primitive {
    ($($method:ident -> $t:ty;)+) => {
        $(
            #[inline]
            fn $method(&self) -> Option<$t> {
                self.0.$method()
            }
        )+
    };
}

impl ToPrimitive for NativeFloat {
    delegate_to_primitive! {
        to_isize -> isize;
        to_i8 -> i8;
        to_i16 -> i16;
        to_i32 -> i32;
        to_i64 -> i64;
        to_usize -> usize;
        to_u8 -> u8;
        to_u16 -> u16;
        to_u32 -> u32;
        to_u64 -> u64;
        to_f32 -> f32;
        to_f64 -> f64;
    }
}

impl NumCast for NativeFloat {
    #[inline]
    fn from<N: ToPrimitive>(n: N) -> Option<Self> {
        <NativeRepr as NumCast>::from(n).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_pointer_width() {
        assert_eq!(size_of::<NativeFloat>(), size_of::<usize>());
    }

    #[test]
    fn delegates_truncation() {
        let x = NativeFloat::new(-7.75);
        assert_eq!(x.to_i32(), Some(-7));
        assert_eq!(x.to_u8(), None);
    }

    #[test]
    fn numcast_from_integer() {
        assert_eq!(<NativeFloat as NumCast>::from(12u8), Some(NativeFloat::new(12.0)));
    }
}
