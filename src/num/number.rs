use super::{Arithmetic, NativeFloat};
use crate::CastError;
use core::fmt;

/// Runtime tag for each member of the convertible set.
///
/// Declared signed narrow to wide, then unsigned narrow to wide, then the
/// floats, then the platform float.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumberKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// [`NativeFloat`]
    Native,
}

impl NumberKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Isize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::Usize,
        Self::F32,
        Self::F64,
        Self::Native,
    ];

    /// Whether the kind is a floating type.
    #[inline]
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64 | Self::Native)
    }

    /// Whether the kind can hold negative values.
    #[inline]
    #[must_use]
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    /// Width in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
            Self::Isize | Self::Usize => size_of::<usize>(),
            Self::Native => size_of::<NativeFloat>(),
        }
    }

    /// The Rust name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Native => "NativeFloat",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value of any member of the convertible set, tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `isize`
    Isize(isize),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `usize`
    Usize(usize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// [`NativeFloat`]
    Native(NativeFloat),
}

impl Number {
    /// The runtime tag of the held value.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> NumberKind {
        match self {
            Self::I8(_) => NumberKind::I8,
            Self::I16(_) => NumberKind::I16,
            Self::I32(_) => NumberKind::I32,
            Self::I64(_) => NumberKind::I64,
            Self::Isize(_) => NumberKind::Isize,
            Self::U8(_) => NumberKind::U8,
            Self::U16(_) => NumberKind::U16,
            Self::U32(_) => NumberKind::U32,
            Self::U64(_) => NumberKind::U64,
            Self::Usize(_) => NumberKind::Usize,
            Self::F32(_) => NumberKind::F32,
            Self::F64(_) => NumberKind::F64,
            Self::Native(_) => NumberKind::Native,
        }
    }

    /// Whether the held value is a floating NaN.
    #[inline]
    #[must_use]
    pub const fn is_nan(self) -> bool {
        match self {
            Self::F32(n) => n.is_nan(),
            Self::F64(n) => n.is_nan(),
            Self::Native(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Whether the held value is a floating infinity.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        match self {
            Self::F32(n) => n.is_infinite(),
            Self::F64(n) => n.is_infinite(),
            Self::Native(n) => n.is_infinite(),
            _ => false,
        }
    }

    /// Converts into `R` with `as` semantics.
    #[inline(always)]
    #[must_use]
    pub fn convert<R: Arithmetic>(self) -> R {
        R::from_number(self)
    }

    /// See [`Arithmetic::try_convert`].
    ///
    /// # Errors
    ///
    /// As [`Arithmetic::try_convert`].
    pub fn try_convert<R: Arithmetic>(self) -> Result<R, CastError> {
        each_number!(self, n => n.try_convert::<R>())
    }

    /// See [`Arithmetic::exact_convert`].
    ///
    /// # Errors
    ///
    /// As [`Arithmetic::exact_convert`].
    pub fn exact_convert<R: Arithmetic>(self) -> Result<R, CastError> {
        each_number!(self, n => n.exact_convert::<R>())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_number!(*self, n => write!(f, "{n}{}", self.kind()))
    }
}
