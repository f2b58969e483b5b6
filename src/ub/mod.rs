//! Debug-only checks at the points where a reinterpreted pointer is dereferenced.

/// Aborts the program if the conditions are not met.
///
/// Checks only exist in debug builds. They should not be relied on for
/// safety: release builds perform no checking at all.
///
/// ```
/// let value = 7u32;
/// let ptr = core::ptr::from_ref(&value);
/// castable::ub_assert! {
///     (p = ptr,) => { !p.is_null() && p.is_aligned() }, "null or misaligned"
/// }
/// ```
#[macro_export]
macro_rules! ub_assert {
    ($($(($($def:ident = $val:expr,)*) => $result:block)+, $msg:literal)+) => {
        $(
            $(
                #[cfg(debug_assertions)]
                if !({
                    $( let $def = $val; )*
                    $result
                }) {
                    $crate::ub::abort($msg);
                }
            )+
        )+
    };
}

/// Aborts the program by panicking again during unwind.
///
/// # Panics
///
/// Panics once with `msg`; a drop guard then panics a second time while
/// unwinding, which the runtime turns into an abort.
#[cold]
pub fn abort(msg: &str) -> ! {
    struct PanicOnDrop;

    impl Drop for PanicOnDrop {
        fn drop(&mut self) {
            panic!("unwinding past a reinterpreted pointer");
        }
    }

    let _abort = PanicOnDrop;
    panic!("{}", msg);
}
