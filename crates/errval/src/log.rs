//! Leveled diagnostics on stderr.
//!
//! The library is quiet by default: only warnings and errors are printed.
//! The environment is read once, on first use; levels set in code after
//! that always win.
//!
//! # Environment Variables
//!
//! - `ERRVAL_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace (or 0-5)
//! - `ERRVAL_FLUSH_LOG=1` - Flush stderr after each line
//!
//! # Usage
//!
//! ```ignore
//! use errval::{edebug, ewarn};
//!
//! edebug!("errno table: {} entries", n);
//! ewarn!("{}: {} matches no platform errno", path, name);
//! ```

use core::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Once;

use crate::env::{env_get_bool, env_get_opt};

pub const ENV_LOG_LEVEL: &str = "ERRVAL_LOG_LEVEL";
pub const ENV_FLUSH_LOG: &str = "ERRVAL_FLUSH_LOG";

/// How much to print. Each level includes the ones before it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    const ALL: [LogLevel; 6] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    fn from_repr(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::from_repr(n).ok_or("log level out of range");
        }
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or("unknown log level")
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static FLUSH: AtomicBool = AtomicBool::new(false);
static FROM_ENV: Once = Once::new();

/// Read `ERRVAL_LOG_LEVEL` and `ERRVAL_FLUSH_LOG`. Runs once; later calls
/// do nothing.
pub fn init() {
    FROM_ENV.call_once(|| {
        if let Some(level) = env_get_opt::<LogLevel>(ENV_LOG_LEVEL) {
            LEVEL.store(level as u8, Ordering::Relaxed);
        }
        FLUSH.store(env_get_bool(ENV_FLUSH_LOG, false), Ordering::Relaxed);
    });
}

#[inline]
pub fn log_level() -> LogLevel {
    init();
    LogLevel::from_repr(LEVEL.load(Ordering::Relaxed)).unwrap_or(LogLevel::Trace)
}

#[inline]
pub fn flush_enabled() -> bool {
    init();
    FLUSH.load(Ordering::Relaxed)
}

/// Override the level. The environment is consumed first, so it cannot
/// undo this later.
pub fn set_log_level(level: LogLevel) {
    init();
    LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn set_flush_enabled(enabled: bool) {
    init();
    FLUSH.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

#[doc(hidden)]
pub fn __write(level: LogLevel, args: fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let mut out = std::io::stderr().lock();
    let _ = writeln!(out, "errval[{}]: {}", level, args);
    if flush_enabled() {
        let _ = out.flush();
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __elog {
    ($level:ident, $($arg:tt)*) => {
        $crate::log::__write($crate::log::LogLevel::$level, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! ewarn {
    ($($arg:tt)*) => { $crate::__elog!(Warn, $($arg)*) };
}

#[macro_export]
macro_rules! einfo {
    ($($arg:tt)*) => { $crate::__elog!(Info, $($arg)*) };
}

#[macro_export]
macro_rules! edebug {
    ($($arg:tt)*) => { $crate::__elog!(Debug, $($arg)*) };
}

/// Per-call detail on hot paths; compiled in, filtered at run time.
#[macro_export]
macro_rules! etrace {
    ($($arg:tt)*) => { $crate::__elog!(Trace, $($arg)*) };
}
