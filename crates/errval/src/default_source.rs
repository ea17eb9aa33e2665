//! Per-subsystem default source.
//!
//! Each subsystem fixes its source once, at compile time, and then builds
//! values from codes alone:
//!
//! ```
//! mod agent {
//!     errval::default_source!(errval::ErrorSource::GPGAGENT);
//!
//!     pub fn connect() -> Result<(), errval::ErrorValue> {
//!         Err(error(errval::ErrorCode::TIMEOUT))
//!     }
//! }
//!
//! let err = agent::connect().unwrap_err();
//! assert_eq!(err.source(), errval::ErrorSource::GPGAGENT);
//! ```
//!
//! The macro expands to `DEFAULT_SOURCE` plus `error`, `error_from_errno`
//! and `error_from_syserror` in the calling module. [`crate::defaults`]
//! carries the same functions bound to [`ErrorSource::UNKNOWN`].
//!
//! Generic code can take the source as a type parameter instead, through
//! [`DefaultSource`].

use crate::{ErrorCode, ErrorSource, ErrorValue};

/// A source fixed at compile time.
pub trait DefaultSource {
    const SOURCE: ErrorSource;
}

/// The library default: [`ErrorSource::UNKNOWN`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unknown;

impl DefaultSource for Unknown {
    const SOURCE: ErrorSource = ErrorSource::UNKNOWN;
}

impl ErrorValue {
    /// Pack `code` with the source of `S`.
    #[inline]
    pub const fn from_code<S: DefaultSource>(code: ErrorCode) -> Self {
        Self::make(S::SOURCE, code)
    }
}

/// Declare the default source of the calling module.
#[macro_export]
macro_rules! default_source {
    ($source:expr) => {
        /// Source used by `error`, `error_from_errno` and `error_from_syserror`.
        #[allow(dead_code)]
        pub const DEFAULT_SOURCE: $crate::ErrorSource = $source;

        /// Pack `code` with this module's default source.
        #[allow(dead_code)]
        #[inline]
        pub const fn error(code: $crate::ErrorCode) -> $crate::ErrorValue {
            $crate::ErrorValue::make(DEFAULT_SOURCE, code)
        }

        /// Error value for a platform errno, with this module's default source.
        #[allow(dead_code)]
        #[inline]
        pub fn error_from_errno(errno: i32) -> $crate::ErrorValue {
            $crate::ErrorValue::from_errno(DEFAULT_SOURCE, errno)
        }

        /// Error value for the current errno, with this module's default source.
        #[allow(dead_code)]
        #[inline]
        pub fn error_from_syserror() -> $crate::ErrorValue {
            $crate::ErrorValue::from_syserror(DEFAULT_SOURCE)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scd {
        crate::default_source!(crate::ErrorSource::SCD);
    }

    struct Pinentry;
    impl DefaultSource for Pinentry {
        const SOURCE: ErrorSource = ErrorSource::PINENTRY;
    }

    #[test]
    fn macro_binds_source() {
        assert_eq!(scd::DEFAULT_SOURCE, ErrorSource::SCD);
        let v = scd::error(ErrorCode::BAD_KEY);
        assert_eq!(v.source(), ErrorSource::SCD);
        assert_eq!(v.code(), ErrorCode::BAD_KEY);
        assert_eq!(scd::error(ErrorCode::NO_ERROR), ErrorValue::OK);
    }

    #[test]
    fn macro_errno_helpers() {
        let v = scd::error_from_errno(-1);
        assert_eq!(v.source(), ErrorSource::SCD);
        assert_eq!(v.code(), ErrorCode::UNKNOWN_ERRNO);

        crate::errno::set_errno(0);
        assert_eq!(scd::error_from_syserror().code(), ErrorCode::MISSING_ERRNO);
    }

    #[test]
    fn trait_binds_source() {
        let v = ErrorValue::from_code::<Pinentry>(ErrorCode::CANCELED);
        assert_eq!(v.source(), ErrorSource::PINENTRY);
        let v = ErrorValue::from_code::<Unknown>(ErrorCode::CANCELED);
        assert_eq!(v, ErrorValue::make_default(ErrorCode::CANCELED));
    }

    #[test]
    fn library_defaults_to_unknown() {
        assert_eq!(crate::defaults::DEFAULT_SOURCE, ErrorSource::UNKNOWN);
        assert_eq!(crate::defaults::error(ErrorCode::GENERAL).raw(), 1);
        assert_eq!(
            crate::defaults::error_from_errno(-1),
            ErrorValue::make_default(ErrorCode::UNKNOWN_ERRNO)
        );
    }
}
