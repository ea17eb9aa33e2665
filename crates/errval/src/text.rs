//! Error text.
//!
//! Two variants, with different contracts:
//!
//! - [`Messages`] owns one buffer and reuses it for every call. Each call
//!   invalidates the text returned by the previous one; the borrow checker
//!   enforces this. Share it across threads only behind your own lock.
//! - [`strerror_r`] writes into a buffer the caller supplies and touches no
//!   shared mutable state. Use it from concurrent code.
//!
//! Source descriptions never change after init, so [`strsource`] hands out
//! `&'static str` directly.
//!
//! Every lookup is total. Identifiers missing from the catalog (a newer
//! peer, a corrupt value) render as a fixed placeholder.

use std::borrow::Cow;

use crate::error::TextError;
use crate::init::state;
use crate::{sys, ErrorCode, ErrorSource, ErrorValue};

pub const UNKNOWN_CODE: &str = "Unknown error code";
pub const UNKNOWN_SOURCE: &str = "Unknown source";
pub const UNKNOWN_SYSTEM_ERROR: &str = "Unknown system error";

/// Description of `code`.
///
/// System codes prefer the platform's text for the mapped errno, then the
/// catalog's description.
pub(crate) fn describe(code: ErrorCode) -> Cow<'static, str> {
    let st = state();
    if code.is_system() {
        let errno = st.errno_for_code(code);
        if errno != 0 {
            if let Some(text) = sys::strerror(errno) {
                return Cow::Owned(text);
            }
        }
        return match st.catalog.code(code) {
            Some(entry) if !entry.description.is_empty() => Cow::Borrowed(entry.description.as_ref()),
            _ => Cow::Borrowed(UNKNOWN_SYSTEM_ERROR),
        };
    }
    match st.catalog.code(code) {
        Some(entry) => Cow::Borrowed(entry.description.as_ref()),
        None => Cow::Borrowed(UNKNOWN_CODE),
    }
}

pub(crate) fn strsource_of(src: ErrorSource) -> &'static str {
    match state().catalog.source(src) {
        Some(entry) => entry.description.as_ref(),
        None => UNKNOWN_SOURCE,
    }
}

/// Description of the source of `value`.
#[inline]
pub fn strsource(value: ErrorValue) -> &'static str {
    strsource_of(value.source())
}

/// Write the description of `value` plus a terminating NUL into `buf`.
///
/// Returns the text length (NUL excluded). If the text does not fit,
/// `buf` receives the longest prefix that ends on a character boundary,
/// NUL-terminated, and the result is [`TextError::Range`]. An empty `buf`
/// is always `Range`.
pub fn strerror_r(value: ErrorValue, buf: &mut [u8]) -> Result<usize, TextError> {
    copy_terminated(&describe(value.code()), buf)
}

fn copy_terminated(text: &str, buf: &mut [u8]) -> Result<usize, TextError> {
    let len = text.len();
    if buf.len() > len {
        buf[..len].copy_from_slice(text.as_bytes());
        buf[len] = 0;
        return Ok(len);
    }
    if let Some(room) = buf.len().checked_sub(1) {
        let mut cut = room;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        buf[..cut].copy_from_slice(&text.as_bytes()[..cut]);
        buf[cut] = 0;
    }
    Err(TextError::Range { needed: len + 1 })
}

/// Single-buffer text renderer.
///
/// ```
/// use errval::{ErrorCode, ErrorSource, ErrorValue, Messages};
///
/// let mut msgs = Messages::new();
/// let v = ErrorValue::make(ErrorSource::GPG, ErrorCode::BAD_SIGNATURE);
/// assert_eq!(msgs.strerror(v), "Bad signature");
/// assert_eq!(msgs.strsource(v), "GnuPG");
/// ```
#[derive(Debug, Default)]
pub struct Messages {
    buf: String,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Description of the code of `value`. Valid until the next call.
    pub fn strerror(&mut self, value: ErrorValue) -> &str {
        self.buf.clear();
        self.buf.push_str(&describe(value.code()));
        &self.buf
    }

    /// Description of the source of `value`. Valid until the next call.
    pub fn strsource(&mut self, value: ErrorValue) -> &str {
        self.buf.clear();
        self.buf.push_str(strsource(value));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn v(src: ErrorSource, code: ErrorCode) -> ErrorValue {
        ErrorValue::make(src, code)
    }

    #[test]
    fn known_texts() {
        let mut m = Messages::new();
        assert_eq!(m.strerror(ErrorValue::OK), "Success");
        assert_eq!(m.strerror(v(ErrorSource::GPG, ErrorCode::CANCELED)), "Operation cancelled");
        assert_eq!(m.strsource(v(ErrorSource::KLEO, ErrorCode::GENERAL)), "Kleopatra");
        assert_eq!(strsource(ErrorValue::OK), "Unspecified source");
    }

    #[test]
    fn unknown_identifiers_render_placeholders() {
        let odd = ErrorValue::make_raw(100, 9999);
        let mut m = Messages::new();
        assert_eq!(m.strerror(odd), UNKNOWN_CODE);
        assert_eq!(m.strsource(odd), UNKNOWN_SOURCE);
        assert_eq!(strsource(odd), UNKNOWN_SOURCE);

        let mut buf = [0u8; 64];
        let n = strerror_r(odd, &mut buf).unwrap();
        assert_eq!(&buf[..n], UNKNOWN_CODE.as_bytes());
    }

    #[test]
    fn unknown_system_slot() {
        let odd = ErrorValue::make_default(ErrorCode::system(0x7FFE));
        assert_eq!(Messages::new().strerror(odd), UNKNOWN_SYSTEM_ERROR);
    }

    #[cfg(unix)]
    #[test]
    fn system_codes_use_platform_text() {
        let code = crate::errno::code_from_errno(libc::ENOENT);
        let expected = sys::strerror(libc::ENOENT).unwrap();
        assert_eq!(Messages::new().strerror(ErrorValue::make_default(code)), expected);
    }

    #[test]
    fn strerror_r_fits() {
        let mut buf = [0xAAu8; 32];
        let n = strerror_r(v(ErrorSource::GPG, ErrorCode::TIMEOUT), &mut buf).unwrap();
        assert_eq!(n, "Timeout".len());
        assert_eq!(CStr::from_bytes_until_nul(&buf).unwrap().to_str().unwrap(), "Timeout");
    }

    #[test]
    fn strerror_r_exact_fit() {
        let mut buf = [0xAAu8; 8];
        assert_eq!(strerror_r(v(ErrorSource::GPG, ErrorCode::TIMEOUT), &mut buf), Ok(7));
        assert_eq!(buf[7], 0);
    }

    #[test]
    fn strerror_r_truncates() {
        let mut buf = [0xAAu8; 5];
        let err = strerror_r(v(ErrorSource::GPG, ErrorCode::TIMEOUT), &mut buf).unwrap_err();
        assert_eq!(err, TextError::Range { needed: 8 });
        assert_eq!(&buf, b"Time\0");
    }

    #[test]
    fn strerror_r_empty_buffer() {
        let mut buf = [0u8; 0];
        assert!(strerror_r(ErrorValue::OK, &mut buf).is_err());
    }

    #[test]
    fn truncation_respects_char_boundary() {
        // "é" is two bytes; cutting after one would split it.
        let mut buf = [0xAAu8; 3];
        let err = copy_terminated("aéb", &mut buf).unwrap_err();
        assert_eq!(err, TextError::Range { needed: 5 });
        assert_eq!(&buf[..2], b"a\0");

        let mut buf = [0xAAu8; 1];
        assert!(copy_terminated("x", &mut buf).is_err());
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn strerror_r_concurrent() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let code = if i % 2 == 0 { ErrorCode::TIMEOUT } else { ErrorCode::BAD_KEY };
                    let mut buf = [0u8; 64];
                    for _ in 0..1000 {
                        let n = strerror_r(ErrorValue::make_default(code), &mut buf).unwrap();
                        let text = std::str::from_utf8(&buf[..n]).unwrap();
                        assert!(text == "Timeout" || text == "Bad session key");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
