//! The packed error value.
//!
//! ```text
//!  31 30       24 23      16 15                0
//! +--+-----------+----------+-------------------+
//! |0 |  source   | reserved |       code        |
//! +--+-----------+----------+-------------------+
//! ```
//!
//! Bit 31 is always zero, so the value prints non-negative even through a
//! signed integer. Bits 16-23 are zero in every constructed value and are
//! ignored on decode.

use core::fmt;

use crate::{ErrorCode, ErrorSource};

/// A source and a code packed into 32 bits.
///
/// `ErrorValue(0)` is success. A value whose code is `NO_ERROR` is always
/// zero: the source of a success is not kept.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ErrorValue(u32);

impl ErrorValue {
    pub const CODE_MASK: u32 = ErrorCode::MASK;
    pub const SOURCE_MASK: u32 = ErrorSource::MASK;
    pub const SOURCE_SHIFT: u32 = 24;

    /// Success.
    pub const OK: ErrorValue = ErrorValue(0);

    /// Pack `source` and `code`. `NO_ERROR` collapses to zero for any source.
    #[inline]
    pub const fn make(source: ErrorSource, code: ErrorCode) -> Self {
        Self::make_raw(source.slot() as u32, code.raw() as u32)
    }

    /// Pack raw integers, truncating each to its field width.
    #[inline]
    pub const fn make_raw(source: u32, code: u32) -> Self {
        let code = code & Self::CODE_MASK;
        if code == 0 {
            return Self::OK;
        }
        Self(((source & Self::SOURCE_MASK) << Self::SOURCE_SHIFT) | code)
    }

    /// Pack `code` with the unknown source.
    ///
    /// Subsystems with their own source use the `error` function generated
    /// by [`default_source!`](crate::default_source) instead.
    #[inline]
    pub const fn make_default(code: ErrorCode) -> Self {
        Self::make(ErrorSource::UNKNOWN, code)
    }

    /// Wrap an integer received from elsewhere. Reserved bits are kept but
    /// ignored by the accessors.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn code(self) -> ErrorCode {
        ErrorCode::new((self.0 & Self::CODE_MASK) as u16)
    }

    #[inline]
    pub const fn source(self) -> ErrorSource {
        ErrorSource::new(((self.0 >> Self::SOURCE_SHIFT) & Self::SOURCE_MASK) as u8)
    }

    /// True if the code is `NO_ERROR`.
    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 & Self::CODE_MASK == 0
    }

    /// `Ok(())` for success, `Err(self)` otherwise.
    #[inline]
    pub const fn check(self) -> Result<(), ErrorValue> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Same code, different source. Success stays success.
    #[inline]
    pub const fn with_source(self, source: ErrorSource) -> Self {
        Self::make(source, self.code())
    }
}

impl From<ErrorValue> for u32 {
    #[inline]
    fn from(v: ErrorValue) -> u32 {
        v.0
    }
}

impl From<u32> for ErrorValue {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorValue({:#010x}, {:?}, {:?})", self.0, self.source(), self.code())
    }
}

/// `"<code text> <<source text>>"`, e.g. `Bad signature <GnuPG>`.
impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.code(), self.source())
    }
}

impl std::error::Error for ErrorValue {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn concrete_pack() {
        let v = ErrorValue::make(ErrorSource::new(5), ErrorCode::new(17));
        assert_eq!(v.raw(), 0x0500_0011);
        assert_eq!(v.code().raw(), 17);
        assert_eq!(v.source().slot(), 5);

        let v = ErrorValue::from_raw(0x0500_0011);
        assert_eq!(v.code(), ErrorCode::new(17));
        assert_eq!(v.source(), ErrorSource::PINENTRY);
    }

    #[test]
    fn no_error_collapses_to_zero() {
        let v = ErrorValue::make(ErrorSource::new(5), ErrorCode::NO_ERROR);
        assert_eq!(v.raw(), 0);
        assert_eq!(v.source(), ErrorSource::UNKNOWN);
        assert_eq!(v.code(), ErrorCode::NO_ERROR);
        assert!(v.is_ok());
        assert_eq!(v, ErrorValue::OK);
    }

    #[test]
    fn make_default_uses_unknown_source() {
        let v = ErrorValue::make_default(ErrorCode::GENERAL);
        assert_eq!(v.raw(), 1);
        assert_eq!(v.source(), ErrorSource::UNKNOWN);
    }

    #[test]
    fn reserved_bits_ignored_on_decode() {
        let v = ErrorValue::from_raw(0x8A12_3456);
        assert_eq!(v.code().raw(), 0x3456);
        assert_eq!(v.source().slot(), 0x0A);
        assert!(!v.is_ok());
    }

    #[test]
    fn make_raw_truncates() {
        let v = ErrorValue::make_raw(0x1FF, 0x1_0008);
        assert_eq!(v.source().slot(), 0x7F);
        assert_eq!(v.code().raw(), 8);
        assert_eq!(v.raw() & 0x8000_0000, 0);
        // Code truncating to zero is success.
        assert_eq!(ErrorValue::make_raw(3, 0x1_0000), ErrorValue::OK);
    }

    #[test]
    fn check_and_with_source() {
        assert_eq!(ErrorValue::OK.check(), Ok(()));
        let v = ErrorValue::make(ErrorSource::GPG, ErrorCode::TIMEOUT);
        assert_eq!(v.check(), Err(v));
        let w = v.with_source(ErrorSource::DIRMNGR);
        assert_eq!(w.code(), ErrorCode::TIMEOUT);
        assert_eq!(w.source(), ErrorSource::DIRMNGR);
        assert_eq!(ErrorValue::OK.with_source(ErrorSource::GPG), ErrorValue::OK);
    }

    #[test]
    fn display_and_debug() {
        let v = ErrorValue::make(ErrorSource::GPG, ErrorCode::BAD_SIGNATURE);
        assert_eq!(v.to_string(), "Bad signature <GnuPG>");
        assert_eq!(format!("{:?}", v), "ErrorValue(0x02000008, GPG(2), BAD_SIGNATURE(8))");
        assert_eq!(ErrorValue::OK.to_string(), "Success <Unspecified source>");
    }

    #[test]
    fn usable_as_std_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            ErrorValue::make(ErrorSource::KSBA, ErrorCode::BAD_CERT).check()?;
            Ok(())
        }
        assert_eq!(fails().unwrap_err().to_string(), "Bad certificate <KSBA>");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn roundtrip(src in 0u8..128, code in 1u16..=u16::MAX) {
            let v = ErrorValue::make(ErrorSource::new(src), ErrorCode::new(code));
            prop_assert_eq!(v.source().slot(), src);
            prop_assert_eq!(v.code().raw(), code);
        }

        #[test]
        fn no_error_collapse(src in any::<u8>()) {
            prop_assert_eq!(ErrorValue::make(ErrorSource::new(src), ErrorCode::NO_ERROR).raw(), 0);
        }

        #[test]
        fn reserved_bits_stay_zero(src in any::<u32>(), code in any::<u32>()) {
            let v = ErrorValue::make_raw(src, code);
            prop_assert_eq!(v.raw() & 0x8000_0000, 0);
            prop_assert_eq!(v.raw() & 0x00FF_0000, 0);
            prop_assert!((v.raw() as i32) >= 0);
        }

        #[test]
        fn masking_truncates(src in any::<u32>(), code in any::<u32>()) {
            let v = ErrorValue::make_raw(src, code);
            if code & 0xFFFF != 0 {
                prop_assert_eq!(v.source().slot() as u32, src & 127);
                prop_assert_eq!(v.code().raw() as u32, code & 0xFFFF);
            } else {
                prop_assert_eq!(v, ErrorValue::OK);
            }
        }
    }
}
