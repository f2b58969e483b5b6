//! Raw pointer wrappers `RawConst` and `RawMut`, plus pointee shorthands.

use super::TypedPointer;
use core::ffi::c_void;

/// Untyped immutable pointer: an address with no pointee.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawConst {
    ptr: *const c_void,
}

unsafe impl Send for RawConst {}
unsafe impl Sync for RawConst {}

impl RawConst {
    /// Wraps an untyped pointer.
    #[inline(always)]
    #[must_use]
    pub const fn from_ptr(ptr: *const c_void) -> Self {
        Self { ptr }
    }

    /// Provides the pointer as stored.
    #[inline(always)]
    #[must_use]
    pub const fn as_ptr(self) -> *const c_void {
        self.ptr
    }

    /// Casts the pointer as mutable.
    ///
    /// Writing through the result is only sound if the memory was mutable to
    /// begin with.
    #[inline(always)]
    #[must_use]
    pub const fn cast_mut(self) -> RawMut {
        RawMut::from_ptr(self.ptr.cast_mut())
    }
}

impl<T> From<*const T> for RawConst {
    fn from(ptr: *const T) -> Self {
        Self::from_ptr(ptr.cast())
    }
}

impl<T> From<*mut T> for RawConst {
    fn from(ptr: *mut T) -> Self {
        Self::from_ptr(ptr.cast_const().cast())
    }
}

impl From<RawConst> for *const c_void {
    fn from(raw: RawConst) -> Self {
        raw.ptr
    }
}

/// Untyped mutable pointer: an address with no pointee.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawMut {
    ptr: *mut c_void,
}

unsafe impl Send for RawMut {}
unsafe impl Sync for RawMut {}

impl RawMut {
    /// Wraps an untyped pointer.
    #[inline(always)]
    #[must_use]
    pub const fn from_ptr(ptr: *mut c_void) -> Self {
        Self { ptr }
    }

    /// Provides the raw pointer as a constant.
    #[inline(always)]
    #[must_use]
    pub const fn as_ptr(self) -> *const c_void {
        self.ptr.cast_const()
    }

    /// Provides the raw pointer as stored.
    #[inline(always)]
    #[must_use]
    pub const fn as_mut_ptr(self) -> *mut c_void {
        self.ptr
    }

    /// Drops write access.
    #[inline(always)]
    #[must_use]
    pub const fn cast_const(self) -> RawConst {
        RawConst::from_ptr(self.ptr.cast_const())
    }
}

impl<T> From<*mut T> for RawMut {
    fn from(ptr: *mut T) -> Self {
        Self::from_ptr(ptr.cast())
    }
}

impl From<RawMut> for *mut c_void {
    fn from(raw: RawMut) -> Self {
        raw.ptr
    }
}

/// Shorthand access to what a typed pointer addresses.
pub trait PointeeRef: TypedPointer {
    /// Borrows the pointee (`o` for object).
    ///
    /// # Safety
    ///
    /// The pointer must be non-null, aligned for `Self::Pointee`, and point
    /// to a live, initialized value that is not mutated for `'a`.
    #[inline(always)]
    #[must_use]
    unsafe fn o<'a>(self) -> &'a Self::Pointee {
        crate::ub_assert! {
            (p = self.as_const(),) => { !p.is_null() && p.is_aligned() },
            "read through a null or misaligned pointer"
        }

        unsafe { &*self.as_const() }
    }
}

impl<P: TypedPointer> PointeeRef for P {}

/// Shorthand write access through a mutable typed pointer.
pub trait PointeeMut: PointeeRef {
    /// Mutably borrows the pointee.
    ///
    /// # Safety
    ///
    /// As [`PointeeRef::o`], and no other reference to the pointee may be live
    /// during `'a`.
    #[must_use]
    unsafe fn o_mut<'a>(self) -> &'a mut Self::Pointee;

    /// Assigns through the pointer, dropping the previous pointee.
    ///
    /// # Safety
    ///
    /// As [`PointeeMut::o_mut`]. The previous value must be initialized,
    /// since it is dropped.
    #[inline(always)]
    unsafe fn set_o(self, value: Self::Pointee) {
        unsafe { *self.o_mut() = value };
    }
}

impl<T> PointeeMut for *mut T {
    #[inline(always)]
    unsafe fn o_mut<'a>(self) -> &'a mut T {
        crate::ub_assert! {
            (p = self,) => { !p.is_null() && p.is_aligned() },
            "write through a null or misaligned pointer"
        }

        unsafe { &mut *self }
    }
}

/// Sequences whose storage can be addressed by a single element pointer.
pub trait Pointerable {
    /// Element type addressed by [`Pointerable::pointer`].
    type Element;

    /// Address of the first element, `None` when the sequence is empty.
    fn pointer(&self) -> Option<*const Self::Element>;
}

impl<T> Pointerable for [T] {
    type Element = T;

    #[inline]
    fn pointer(&self) -> Option<*const T> {
        if self.is_empty() {
            None
        } else {
            Some(self.as_ptr())
        }
    }
}

impl<T, const N: usize> Pointerable for [T; N] {
    type Element = T;

    #[inline]
    fn pointer(&self) -> Option<*const T> {
        self.as_slice().pointer()
    }
}

#[cfg(feature = "alloc")]
impl<T> Pointerable for alloc::vec::Vec<T> {
    type Element = T;

    #[inline]
    fn pointer(&self) -> Option<*const T> {
        self.as_slice().pointer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn o_reads_pointee() {
        let value = 0x1234_5678u32;
        let ptr = core::ptr::from_ref(&value);
        assert_eq!(unsafe { *ptr.o() }, value);
    }

    #[test]
    fn set_o_writes_pointee() {
        let mut value = 1u16;
        let ptr = core::ptr::from_mut(&mut value);
        unsafe { ptr.set_o(9) };
        assert_eq!(value, 9);
    }

    #[test]
    fn raw_wrappers_convert_between_mutability() {
        let mut value = 5u8;
        let raw = RawMut::from(core::ptr::from_mut(&mut value));
        let shared = raw.cast_const();
        assert_eq!(shared.as_ptr(), raw.as_ptr());
        assert_eq!(shared.cast_mut(), raw);
    }

    #[test]
    fn empty_sequences_have_no_pointer() {
        let empty: [u64; 0] = [];
        assert!(empty.pointer().is_none());
        assert!(empty.as_slice().pointer().is_none());
    }

    #[test]
    fn sequence_pointer_is_first_element() {
        let arr = [3i32, 4, 5];
        assert_eq!(arr.pointer(), Some(arr.as_ptr()));
        assert_eq!(arr[1..].pointer(), Some(core::ptr::from_ref(&arr[1])));
    }
}
