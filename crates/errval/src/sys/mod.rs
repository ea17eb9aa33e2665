//! Platform layer.
//!
//! Everything that touches the platform's system-error indicator (`errno`)
//! goes through [`SystemError`]. Nothing else in the crate reads or writes
//! it, so a platform quirk stays in one file.
//!
//! ## Platform selection
//!
//! | Target          | Indicator                   | Errno table          |
//! |-----------------|-----------------------------|----------------------|
//! | Linux           | `nix::errno::Errno`         | full                 |
//! | other unix      | `nix::errno::Errno`         | POSIX subset         |
//! | anything else   | thread-local cell           | empty                |

use std::sync::atomic::{AtomicI32, Ordering};

mod table;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        use unix as imp;
    } else {
        mod fallback;
        use fallback as imp;
    }
}

pub use table::errno_table;

/// Accessor for the current system-error indicator.
///
/// [`Platform`] is the real one. Tests inject [`InMemory`].
pub trait SystemError: Send + Sync {
    /// Current value of the indicator.
    fn get(&self) -> i32;

    /// Overwrite the indicator.
    fn set(&self, value: i32);
}

/// The calling thread's `errno`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Platform;

impl SystemError for Platform {
    #[inline]
    fn get(&self) -> i32 {
        imp::get_errno()
    }

    #[inline]
    fn set(&self, value: i32) {
        imp::set_errno(value)
    }
}

/// Process-wide platform accessor.
pub static PLATFORM: Platform = Platform;

/// In-memory indicator, shared by whoever holds the reference.
#[derive(Debug, Default)]
pub struct InMemory {
    value: AtomicI32,
}

impl InMemory {
    pub const fn new(value: i32) -> Self {
        Self { value: AtomicI32::new(value) }
    }
}

impl SystemError for InMemory {
    fn get(&self) -> i32 {
        self.value.load(Ordering::Relaxed)
    }

    fn set(&self, value: i32) {
        self.value.store(value, Ordering::Relaxed)
    }
}

/// Platform text for `errno`, if the platform has any.
pub fn strerror(errno: i32) -> Option<String> {
    imp::strerror(errno)
}
