//! Error codes: which condition occurred.
//!
//! # Code ranges
//!
//! | Range             | Purpose                                        |
//! |-------------------|------------------------------------------------|
//! | `0`               | `NO_ERROR`                                     |
//! | `1..1023`         | stock error conditions (append-only)           |
//! | `1024..1039`      | free for applications (`USER_1..USER_16`)      |
//! | `16381..16383`    | `MISSING_ERRNO`, `UNKNOWN_ERRNO`, `EOF`        |
//! | `32768..65535`    | system errors: `SYSTEM_ERROR` flag + name slot |
//!
//! The low 15 bits of a system code index the system-error name table.
//! They are a stable slot, not the platform's errno value, so a code stays
//! meaningful when it crosses to a process on another platform.

use core::fmt;

/// Identifier of an error condition (16 bits).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Mask applied to a code before it is packed.
    pub const MASK: u32 = 0xFFFF;
    /// Size of the code space.
    pub const DIM: usize = 65536;
    /// Flag marking codes derived from a platform errno.
    pub const SYSTEM_ERROR: u16 = 1 << 15;
    /// Number of system-error name slots.
    pub const SYSTEM_DIM: usize = 1 << 15;

    pub const NO_ERROR: ErrorCode = ErrorCode(0);
    pub const GENERAL: ErrorCode = ErrorCode(1);
    pub const BAD_SIGNATURE: ErrorCode = ErrorCode(8);
    pub const CHECKSUM: ErrorCode = ErrorCode(10);
    pub const BAD_PASSPHRASE: ErrorCode = ErrorCode(11);
    pub const BAD_KEY: ErrorCode = ErrorCode(19);
    pub const NO_VALUE: ErrorCode = ErrorCode(26);
    pub const NOT_FOUND: ErrorCode = ErrorCode(27);
    pub const SYNTAX: ErrorCode = ErrorCode(29);
    pub const RESOURCE_LIMIT: ErrorCode = ErrorCode(33);
    pub const BAD_CERT: ErrorCode = ErrorCode(36);
    pub const UNEXPECTED: ErrorCode = ErrorCode(38);
    pub const INV_ARG: ErrorCode = ErrorCode(45);
    pub const NETWORK: ErrorCode = ErrorCode(48);
    pub const INV_VALUE: ErrorCode = ErrorCode(55);
    pub const NO_DATA: ErrorCode = ErrorCode(58);
    pub const BUG: ErrorCode = ErrorCode(59);
    pub const NOT_SUPPORTED: ErrorCode = ErrorCode(60);
    pub const INV_OP: ErrorCode = ErrorCode(61);
    pub const TIMEOUT: ErrorCode = ErrorCode(62);
    pub const INTERNAL: ErrorCode = ErrorCode(63);
    pub const TOO_SHORT: ErrorCode = ErrorCode(66);
    pub const TOO_LARGE: ErrorCode = ErrorCode(67);
    pub const NOT_IMPLEMENTED: ErrorCode = ErrorCode(69);
    pub const CONFLICT: ErrorCode = ErrorCode(70);
    pub const TRUNCATED: ErrorCode = ErrorCode(74);
    pub const INV_DATA: ErrorCode = ErrorCode(79);
    pub const INV_NAME: ErrorCode = ErrorCode(88);
    pub const LINE_TOO_LONG: ErrorCode = ErrorCode(97);
    pub const CANCELED: ErrorCode = ErrorCode(99);

    pub const USER_1: ErrorCode = ErrorCode(1024);
    pub const USER_2: ErrorCode = ErrorCode(1025);
    pub const USER_3: ErrorCode = ErrorCode(1026);
    pub const USER_4: ErrorCode = ErrorCode(1027);
    pub const USER_5: ErrorCode = ErrorCode(1028);
    pub const USER_6: ErrorCode = ErrorCode(1029);
    pub const USER_7: ErrorCode = ErrorCode(1030);
    pub const USER_8: ErrorCode = ErrorCode(1031);
    pub const USER_9: ErrorCode = ErrorCode(1032);
    pub const USER_10: ErrorCode = ErrorCode(1033);
    pub const USER_11: ErrorCode = ErrorCode(1034);
    pub const USER_12: ErrorCode = ErrorCode(1035);
    pub const USER_13: ErrorCode = ErrorCode(1036);
    pub const USER_14: ErrorCode = ErrorCode(1037);
    pub const USER_15: ErrorCode = ErrorCode(1038);
    pub const USER_16: ErrorCode = ErrorCode(1039);

    /// The system error indicator was zero when it was read.
    pub const MISSING_ERRNO: ErrorCode = ErrorCode(16381);
    /// A platform errno with no entry in the errno table.
    pub const UNKNOWN_ERRNO: ErrorCode = ErrorCode(16382);
    pub const EOF: ErrorCode = ErrorCode(16383);

    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Build a system code from a name-table slot. Bits above 15 are dropped.
    #[inline]
    pub const fn system(slot: u16) -> Self {
        Self(Self::SYSTEM_ERROR | (slot & (Self::SYSTEM_ERROR - 1)))
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// True if this code carries the `SYSTEM_ERROR` flag.
    #[inline]
    pub const fn is_system(self) -> bool {
        self.0 & Self::SYSTEM_ERROR != 0
    }

    /// Name-table slot of a system code.
    #[inline]
    pub const fn system_slot(self) -> Option<u16> {
        if self.is_system() {
            Some(self.0 & (Self::SYSTEM_ERROR - 1))
        } else {
            None
        }
    }
}

impl From<u16> for ErrorCode {
    #[inline]
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> u16 {
        code.0
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::init::state().catalog.code_name(*self) {
            Some(name) => write!(f, "{}({})", name, self.0),
            None => write!(f, "ErrorCode({})", self.0),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::text::describe(*self))
    }
}
