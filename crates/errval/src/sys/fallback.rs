//! Targets without a usable `errno`: a per-thread cell stands in for it.

use std::cell::Cell;

thread_local! {
    static ERRNO: Cell<i32> = const { Cell::new(0) };
}

#[inline]
pub(super) fn get_errno() -> i32 {
    ERRNO.with(|e| e.get())
}

#[inline]
pub(super) fn set_errno(value: i32) {
    ERRNO.with(|e| e.set(value))
}

pub(super) fn strerror(_errno: i32) -> Option<String> {
    None
}
