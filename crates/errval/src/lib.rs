//! # errval
//!
//! One 32-bit value that says which component failed and why, shared by
//! independently built programs and libraries.
//!
//! ```
//! use errval::{ErrorCode, ErrorSource, ErrorValue};
//!
//! let v = ErrorValue::make(ErrorSource::new(5), ErrorCode::new(17));
//! assert_eq!(v.raw(), 0x0500_0011);
//! assert_eq!(v.source(), ErrorSource::PINENTRY);
//! assert_eq!(v.code().raw(), 17);
//! assert_eq!(v.to_string(), "No secret key <Pinentry>");
//! ```
//!
//! ## Modules
//!
//! - `value` - the packed value: make, decode, display
//! - `source`, `code` - the two identifier types
//! - `catalog` - identifier tables, stock and loaded from text
//! - `errno` - platform errno in and out of the code space
//! - `text` - descriptions, shared-buffer and caller-buffer variants
//! - `sys` - the only place that touches the platform errno
//! - `init` - one-time process state
//! - `default_source`, `defaults` - per-module default source
//! - `convert` - `std::io::Error` interop
//! - `config`, `env`, `log` - runtime configuration and diagnostics

pub mod catalog;
pub mod code;
pub mod config;
pub mod convert;
pub mod default_source;
pub mod env;
pub mod errno;
pub mod error;
pub mod init;
pub mod log;
pub mod source;
pub mod sys;
pub mod text;
pub mod value;

pub use catalog::{Catalog, Entry, Table};
pub use code::ErrorCode;
pub use config::Config;
pub use convert::ResultExt;
pub use default_source::DefaultSource;
pub use errno::{
    code_from_errno, code_from_syserror, code_from_syserror_with, code_to_errno, set_errno,
    set_errno_with,
};
pub use error::{InitError, TableError, TextError};
pub use init::{deinit, init, init_from_config, init_with};
pub use source::ErrorSource;
pub use text::{strerror_r, strsource, Messages};
pub use value::ErrorValue;

/// `error`, `error_from_errno` and `error_from_syserror` bound to the
/// library's own default source, [`ErrorSource::UNKNOWN`].
pub mod defaults {
    crate::default_source!(crate::ErrorSource::UNKNOWN);
}

/// Pack `source` and `code`; see [`ErrorValue::make`].
#[inline]
pub const fn make(source: ErrorSource, code: ErrorCode) -> ErrorValue {
    ErrorValue::make(source, code)
}
