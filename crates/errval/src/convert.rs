use std::io;

use crate::errno::{code_from_errno, code_to_errno};
use crate::{ErrorCode, ErrorSource, ErrorValue};

// ── io::ErrorKind → code ──────────────────────────────────────────

/// Code for an `io::Error` that carries no OS error number.
fn io_kind_code(kind: io::ErrorKind) -> ErrorCode {
    match kind {
        io::ErrorKind::NotFound => ErrorCode::NOT_FOUND,
        io::ErrorKind::InvalidInput => ErrorCode::INV_ARG,
        io::ErrorKind::InvalidData => ErrorCode::INV_DATA,
        io::ErrorKind::TimedOut => ErrorCode::TIMEOUT,
        io::ErrorKind::UnexpectedEof => ErrorCode::EOF,
        io::ErrorKind::Unsupported => ErrorCode::NOT_SUPPORTED,
        io::ErrorKind::OutOfMemory => ErrorCode::RESOURCE_LIMIT,
        io::ErrorKind::WriteZero => ErrorCode::TRUNCATED,
        _ => ErrorCode::GENERAL,
    }
}

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for ErrorValue {
    /// Raw OS errors go through the errno bridge; the rest map by kind.
    /// The source is unknown; retag with [`ResultExt::with_source`].
    fn from(err: io::Error) -> Self {
        let code = match err.raw_os_error() {
            Some(errno) => code_from_errno(errno),
            None => io_kind_code(err.kind()),
        };
        ErrorValue::make_default(code)
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<ErrorValue> for io::Error {
    /// System codes become the matching OS error; anything else is
    /// wrapped as a custom error.
    fn from(value: ErrorValue) -> Self {
        match code_to_errno(value.code()) {
            0 => {
                let kind = match value.code() {
                    ErrorCode::EOF => io::ErrorKind::UnexpectedEof,
                    ErrorCode::TIMEOUT => io::ErrorKind::TimedOut,
                    ErrorCode::NOT_FOUND => io::ErrorKind::NotFound,
                    ErrorCode::INV_ARG => io::ErrorKind::InvalidInput,
                    ErrorCode::INV_DATA => io::ErrorKind::InvalidData,
                    ErrorCode::NOT_SUPPORTED => io::ErrorKind::Unsupported,
                    _ => io::ErrorKind::Other,
                };
                io::Error::new(kind, value)
            }
            errno => io::Error::from_raw_os_error(errno),
        }
    }
}

// ── ResultExt ─────────────────────────────────────────────────────

/// Tag errors with a source while propagating them.
///
/// ```
/// use errval::{ErrorSource, ResultExt};
///
/// let r = std::fs::read("/nonexistent/errval").with_source(ErrorSource::GPG);
/// assert_eq!(r.unwrap_err().source(), ErrorSource::GPG);
/// ```
pub trait ResultExt<T> {
    fn with_source(self, source: ErrorSource) -> Result<T, ErrorValue>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ErrorValue>,
{
    fn with_source(self, source: ErrorSource) -> Result<T, ErrorValue> {
        self.map_err(|e| e.into().with_source(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn os_error_roundtrip() {
        let io_err = io::Error::from_raw_os_error(libc::EACCES);
        let v = ErrorValue::from(io_err);
        assert!(v.code().is_system());
        assert_eq!(v.to_errno(), libc::EACCES);

        let back: io::Error = v.into();
        assert_eq!(back.raw_os_error(), Some(libc::EACCES));
        assert_eq!(back.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn kind_mapping() {
        let v = ErrorValue::from(io::Error::new(io::ErrorKind::UnexpectedEof, "short"));
        assert_eq!(v.code(), ErrorCode::EOF);
        assert_eq!(v.source(), ErrorSource::UNKNOWN);

        let v = ErrorValue::from(io::Error::new(io::ErrorKind::Other, "?"));
        assert_eq!(v.code(), ErrorCode::GENERAL);
    }

    #[test]
    fn custom_value_into_io_error() {
        let v = ErrorValue::make(ErrorSource::DIRMNGR, ErrorCode::TIMEOUT);
        let e: io::Error = v.into();
        assert_eq!(e.kind(), io::ErrorKind::TimedOut);
        assert_eq!(e.to_string(), "Timeout <Dirmngr>");

        let inner = e.get_ref().and_then(|i| i.downcast_ref::<ErrorValue>());
        assert_eq!(inner, Some(&v));
    }

    #[test]
    fn result_ext_retags() {
        let r: Result<(), ErrorValue> = Err(ErrorValue::make_default(ErrorCode::BAD_KEY));
        let v = r.with_source(ErrorSource::SCD).unwrap_err();
        assert_eq!(v.source(), ErrorSource::SCD);
        assert_eq!(v.code(), ErrorCode::BAD_KEY);

        let ok: Result<u8, ErrorValue> = Ok(3);
        assert_eq!(ok.with_source(ErrorSource::SCD), Ok(3));

        let io: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::InvalidData, "x"));
        let v = io.with_source(ErrorSource::KSBA).unwrap_err();
        assert_eq!(v.code(), ErrorCode::INV_DATA);
        assert_eq!(v.source(), ErrorSource::KSBA);
    }
}
