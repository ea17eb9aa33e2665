//! Errno bridge: platform system errors in and out of the code space.
//!
//! All conversions are total. An errno without a table entry becomes
//! [`ErrorCode::UNKNOWN_ERRNO`]; a code that is not a mapped system code
//! becomes errno `0`. That makes `0` ambiguous with "errno was zero"; use
//! [`ErrorCode::is_system`] when the difference matters.

use crate::init::state;
use crate::sys::{SystemError, PLATFORM};
use crate::{edebug, etrace, ErrorCode, ErrorSource, ErrorValue};

/// Code for a platform errno. Unmapped values give `UNKNOWN_ERRNO`.
#[inline]
pub fn code_from_errno(errno: i32) -> ErrorCode {
    match state().code_for_errno(errno) {
        Some(code) => code,
        None => {
            edebug!("errno {} has no system code, please report this", errno);
            ErrorCode::UNKNOWN_ERRNO
        }
    }
}

/// Platform errno for a system code; `0` if `code` is not one.
#[inline]
pub fn code_to_errno(code: ErrorCode) -> i32 {
    state().errno_for_code(code)
}

/// Code for the calling thread's current errno.
///
/// An errno of exactly `0` means nothing was recorded, and gives
/// `MISSING_ERRNO` rather than `NO_ERROR`.
#[inline]
pub fn code_from_syserror() -> ErrorCode {
    code_from_syserror_with(&PLATFORM)
}

/// [`code_from_syserror`] against an explicit accessor.
pub fn code_from_syserror_with(sys: &dyn SystemError) -> ErrorCode {
    let errno = sys.get();
    etrace!("read system error indicator: {}", errno);
    match errno {
        0 => ErrorCode::MISSING_ERRNO,
        errno => code_from_errno(errno),
    }
}

/// Set the calling thread's errno. The only sanctioned writer.
#[inline]
pub fn set_errno(value: i32) {
    set_errno_with(&PLATFORM, value)
}

/// [`set_errno`] against an explicit accessor.
pub fn set_errno_with(sys: &dyn SystemError, value: i32) {
    etrace!("set system error indicator: {}", value);
    sys.set(value)
}

impl ErrorValue {
    /// Error value for a platform errno.
    #[inline]
    pub fn from_errno(source: ErrorSource, errno: i32) -> Self {
        Self::make(source, code_from_errno(errno))
    }

    /// Error value for the calling thread's current errno.
    #[inline]
    pub fn from_syserror(source: ErrorSource) -> Self {
        Self::make(source, code_from_syserror())
    }

    /// Platform errno carried by this value; `0` if none.
    #[inline]
    pub fn to_errno(self) -> i32 {
        code_to_errno(self.code())
    }
}
