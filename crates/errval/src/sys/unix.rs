//! Unix: errno through nix, text through `strerror_r`.

use std::ffi::CStr;

use nix::errno::Errno;

#[inline]
pub(super) fn get_errno() -> i32 {
    Errno::last_raw()
}

#[inline]
pub(super) fn set_errno(value: i32) {
    Errno::set_raw(value)
}

/// XSI `strerror_r`; the libc crate binds the XSI symbol on glibc too.
pub(super) fn strerror(errno: i32) -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: buf is writable for buf.len() bytes and strerror_r writes at
    // most that many, NUL included.
    let rc = unsafe {
        libc::strerror_r(errno, buf.as_mut_ptr() as *mut libc::c_char, buf.len())
    };
    if rc != 0 {
        return None;
    }
    let text = CStr::from_bytes_until_nul(&buf).ok()?;
    let text = text.to_string_lossy();
    if text.is_empty() {
        None
    } else {
        Some(text.into_owned())
    }
}
