//! Functions to relabel pointers between kinds and pointee types.
//!
//! Every cast keeps the address exactly as it was. None of them check
//! alignment, size or liveness; those become the caller's problem the moment
//! the result is dereferenced.

use super::{Pointer, RawPointer, TypedPointer};
use core::ptr;

/// Rebinds a typed pointer to another typed kind and pointee.
///
/// Casting to the source's own kind and pointee returns the input unchanged.
///
/// # Dereferencing
///
/// This function does not access memory. Dereferencing the result requires
/// that the address is aligned for `P::Pointee` and covers a valid
/// `P::Pointee`.
#[inline(always)]
#[must_use]
pub fn cast<S: TypedPointer, P: TypedPointer>(src: S) -> P {
    P::from_const(src.as_const().cast::<P::Pointee>())
}

/// [`cast`] lifted over `Option`: `None` stays `None`.
#[inline(always)]
#[must_use]
pub fn cast_opt<S: TypedPointer, P: TypedPointer>(src: Option<S>) -> Option<P> {
    src.map(cast::<S, P>)
}

/// Relabels a typed pointer's address as raw.
#[inline(always)]
#[must_use]
pub fn cast_raw<S: TypedPointer, R: RawPointer>(src: S) -> R {
    R::from_const_raw(src.as_const().cast())
}

/// [`cast_raw`] lifted over `Option`: `None` stays `None`.
#[inline(always)]
#[must_use]
pub fn cast_raw_opt<S: TypedPointer, R: RawPointer>(src: Option<S>) -> Option<R> {
    src.map(cast_raw::<S, R>)
}

/// Views a raw address as pointing to `P::Pointee`.
///
/// The memory is assumed to already hold a `P::Pointee`; nothing is checked.
///
/// # Dereferencing
///
/// This function does not access memory. Dereferencing the result carries
/// the same obligations as for [`cast`].
#[inline(always)]
#[must_use]
pub fn cast_typed<R: RawPointer, P: TypedPointer>(src: R) -> P {
    P::from_const(src.as_const_raw().cast())
}

/// [`cast_typed`] lifted over `Option`: `None` stays `None`.
#[inline(always)]
#[must_use]
pub fn cast_typed_opt<R: RawPointer, P: TypedPointer>(src: Option<R>) -> Option<P> {
    src.map(cast_typed::<R, P>)
}

/// Maps a null pointer of any kind to `None`.
#[inline(always)]
#[must_use]
pub fn nullable<P: Pointer>(ptr: P) -> Option<P> {
    if ptr.is_nil() { None } else { Some(ptr) }
}

/// Reinterprets `&T` as `&U` for the lifetime of the borrow.
///
/// # Safety
///
/// - `U` must not be larger than `T`
/// - `value` must be aligned for `U`
/// - the bytes of `value` must be a valid `U`
/// - `U` must not introduce interior mutability over bytes `T` treats as immutable
///
/// A larger `U` is rejected at compile time. Debug builds abort on
/// misalignment; release builds check nothing.
///
/// ```compile_fail
/// let byte = 1u8;
/// let _: &u32 = unsafe { castable::raw::rebind(&byte) };
/// ```
#[inline(always)]
#[must_use]
pub unsafe fn rebind<T, U>(value: &T) -> &U {
    const {
        assert!(size_of::<U>() <= size_of::<T>(), "cannot rebind to a larger type");
    }

    let src = ptr::from_ref(value).cast::<U>();

    crate::ub_assert! {
        (p = src,) => { p.is_aligned() }, "rebind to a more strictly aligned type"
    }

    unsafe { &*src }
}

/// Reinterprets `&mut T` as `&mut U` for the lifetime of the borrow.
///
/// # Safety
///
/// As [`rebind`], and every value written through the result must leave the
/// bytes a valid `T`.
#[inline(always)]
#[must_use]
pub unsafe fn rebind_mut<T, U>(value: &mut T) -> &mut U {
    const {
        assert!(size_of::<U>() <= size_of::<T>(), "cannot rebind to a larger type");
    }

    let src = ptr::from_mut(value).cast::<U>();

    crate::ub_assert! {
        (p = src,) => { p.is_aligned() }, "rebind to a more strictly aligned type"
    }

    unsafe { &mut *src }
}
