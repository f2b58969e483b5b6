//! Pointer reinterpretation between typed and raw pointers.
//!
//! # Safety
//!
//! Nothing in this module reads or writes through a pointer it produces, so
//! relabeling is safe to call. The obligations move to the dereference:
//! before reading a reinterpreted pointer the caller must ensure that
//!
//! - the address is non-null and aligned for the new pointee,
//! - at least `size_of::<Pointee>()` bytes are live at that address,
//! - those bytes are a valid value of the new pointee type.
//!
//! The few functions here that do touch memory ([`PointeeRef::o`],
//! [`PointeeMut::set_o`], [`rebind`], [`rebind_mut`]) are `unsafe` and spell
//! this out again.

use core::ffi::c_void;

mod casting;
mod ptr;

pub use casting::{
    cast, cast_opt, cast_raw, cast_raw_opt, cast_typed, cast_typed_opt, nullable, rebind,
    rebind_mut,
};
pub use ptr::{PointeeMut, PointeeRef, Pointerable, RawConst, RawMut};

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for *const T {}
    impl<T> Sealed for *mut T {}
    impl Sealed for super::RawConst {}
    impl Sealed for super::RawMut {}
}

/// The four pointer kinds a reinterpretation can start from or produce.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointerKind {
    /// `*const T`
    Const,
    /// `*mut T`
    Mut,
    /// [`RawConst`]
    RawConst,
    /// [`RawMut`]
    RawMut,
}

impl PointerKind {
    /// Whether the kind carries no pointee type.
    #[inline]
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, Self::RawConst | Self::RawMut)
    }

    /// Whether memory may be written through this kind.
    #[inline]
    #[must_use]
    pub const fn is_mutable(self) -> bool {
        matches!(self, Self::Mut | Self::RawMut)
    }
}

/// Surface shared by every pointer kind.
pub trait Pointer: Copy + sealed::Sealed {
    /// Runtime tag of this pointer kind.
    const KIND: PointerKind;

    /// The null pointer of this kind.
    #[must_use]
    fn null() -> Self;

    /// The address held, without exposing provenance.
    #[must_use]
    fn address(self) -> usize;

    /// Whether the address is zero.
    #[inline]
    #[must_use]
    fn is_nil(self) -> bool {
        self.address() == 0
    }
}

/// A pointer with a statically known pointee.
pub trait TypedPointer: Pointer {
    /// The type the pointer addresses.
    type Pointee;

    /// Builds this kind from an immutable typed pointer.
    fn from_const(ptr: *const Self::Pointee) -> Self;

    /// Builds this kind from a mutable typed pointer.
    fn from_mut(ptr: *mut Self::Pointee) -> Self;

    /// The pointer as `*const Pointee`.
    fn as_const(self) -> *const Self::Pointee;

    /// Rebinds the pointee type, keeping the address. See [`cast`].
    #[inline(always)]
    #[must_use]
    fn recast<P: TypedPointer>(self) -> P {
        cast(self)
    }

    /// Relabels the pointer as raw, keeping the address. See [`cast_raw`].
    #[inline(always)]
    #[must_use]
    fn recast_raw<R: RawPointer>(self) -> R {
        cast_raw(self)
    }
}

/// A pointer that carries only an address.
pub trait RawPointer: Pointer {
    /// Builds this kind from an immutable untyped pointer.
    fn from_const_raw(ptr: *const c_void) -> Self;

    /// The pointer as `*const c_void`.
    fn as_const_raw(self) -> *const c_void;

    /// Views the address as already bound to `P::Pointee`. See [`cast_typed`].
    #[inline(always)]
    #[must_use]
    fn assume_bound<P: TypedPointer>(self) -> P {
        cast_typed(self)
    }
}

impl<T> Pointer for *const T {
    const KIND: PointerKind = PointerKind::Const;

    #[inline(always)]
    fn null() -> Self {
        core::ptr::null()
    }

    #[inline(always)]
    fn address(self) -> usize {
        <*const T>::addr(self)
    }
}

impl<T> Pointer for *mut T {
    const KIND: PointerKind = PointerKind::Mut;

    #[inline(always)]
    fn null() -> Self {
        core::ptr::null_mut()
    }

    #[inline(always)]
    fn address(self) -> usize {
        <*mut T>::addr(self)
    }
}

impl<T> TypedPointer for *const T {
    type Pointee = T;

    #[inline(always)]
    fn from_const(ptr: *const T) -> Self {
        ptr
    }

    #[inline(always)]
    fn from_mut(ptr: *mut T) -> Self {
        ptr.cast_const()
    }

    #[inline(always)]
    fn as_const(self) -> *const T {
        self
    }
}

impl<T> TypedPointer for *mut T {
    type Pointee = T;

    #[inline(always)]
    fn from_const(ptr: *const T) -> Self {
        ptr.cast_mut()
    }

    #[inline(always)]
    fn from_mut(ptr: *mut T) -> Self {
        ptr
    }

    #[inline(always)]
    fn as_const(self) -> *const T {
        self.cast_const()
    }
}

impl Pointer for RawConst {
    const KIND: PointerKind = PointerKind::RawConst;

    #[inline(always)]
    fn null() -> Self {
        Self::from_ptr(core::ptr::null())
    }

    #[inline(always)]
    fn address(self) -> usize {
        self.as_ptr().addr()
    }
}

impl Pointer for RawMut {
    const KIND: PointerKind = PointerKind::RawMut;

    #[inline(always)]
    fn null() -> Self {
        Self::from_ptr(core::ptr::null_mut())
    }

    #[inline(always)]
    fn address(self) -> usize {
        self.as_mut_ptr().addr()
    }
}

impl RawPointer for RawConst {
    #[inline(always)]
    fn from_const_raw(ptr: *const c_void) -> Self {
        Self::from_ptr(ptr)
    }

    #[inline(always)]
    fn as_const_raw(self) -> *const c_void {
        self.as_ptr()
    }
}

impl RawPointer for RawMut {
    #[inline(always)]
    fn from_const_raw(ptr: *const c_void) -> Self {
        Self::from_ptr(ptr.cast_mut())
    }

    #[inline(always)]
    fn as_const_raw(self) -> *const c_void {
        self.as_ptr()
    }
}
