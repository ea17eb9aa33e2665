//! Error sources: which component raised an error.
//!
//! Slot values are a serialization contract. A slot, once assigned, is
//! never reordered or reused; new components are appended.
//!
//! | Slot       | Purpose                               |
//! |------------|---------------------------------------|
//! | `0`        | unknown / unspecified source          |
//! | `1..30`    | suite components                      |
//! | `31`       | `ANY`, matches every source           |
//! | `32..35`   | free for applications (`USER_1..4`)   |
//! | `36..127`  | reserved                              |

use core::fmt;

/// Identifier of the component that raised an error (7 significant bits).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ErrorSource(u8);

impl ErrorSource {
    /// Number of bits an error value reserves for the source.
    pub const BITS: u32 = 7;
    /// Mask applied to a source before it is packed.
    pub const MASK: u32 = (1 << Self::BITS) - 1;
    /// Size of the source space.
    pub const DIM: usize = 128;

    pub const UNKNOWN: ErrorSource = ErrorSource(0);
    pub const GCRYPT: ErrorSource = ErrorSource(1);
    pub const GPG: ErrorSource = ErrorSource(2);
    pub const GPGSM: ErrorSource = ErrorSource(3);
    pub const GPGAGENT: ErrorSource = ErrorSource(4);
    pub const PINENTRY: ErrorSource = ErrorSource(5);
    pub const SCD: ErrorSource = ErrorSource(6);
    pub const GPGME: ErrorSource = ErrorSource(7);
    pub const KEYBOX: ErrorSource = ErrorSource(8);
    pub const KSBA: ErrorSource = ErrorSource(9);
    pub const DIRMNGR: ErrorSource = ErrorSource(10);
    pub const GSTI: ErrorSource = ErrorSource(11);
    pub const GPA: ErrorSource = ErrorSource(12);
    pub const KLEO: ErrorSource = ErrorSource(13);
    pub const G13: ErrorSource = ErrorSource(14);
    pub const ASSUAN: ErrorSource = ErrorSource(15);
    pub const TLS: ErrorSource = ErrorSource(17);
    pub const ANY: ErrorSource = ErrorSource(31);
    pub const USER_1: ErrorSource = ErrorSource(32);
    pub const USER_2: ErrorSource = ErrorSource(33);
    pub const USER_3: ErrorSource = ErrorSource(34);
    pub const USER_4: ErrorSource = ErrorSource(35);

    /// Build a source from its slot. Bits above the seventh are dropped.
    #[inline]
    pub const fn new(slot: u8) -> Self {
        Self(slot & Self::MASK as u8)
    }

    /// Numeric slot of this source.
    #[inline]
    pub const fn slot(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for ErrorSource {
    #[inline]
    fn from(slot: u8) -> Self {
        Self::new(slot)
    }
}

impl From<ErrorSource> for u8 {
    #[inline]
    fn from(src: ErrorSource) -> u8 {
        src.0
    }
}

impl fmt::Debug for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::init::state().catalog.source(*self) {
            Some(entry) => write!(f, "{}({})", entry.name, self.0),
            None => write!(f, "ErrorSource({})", self.0),
        }
    }
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::text::strsource_of(*self))
    }
}
