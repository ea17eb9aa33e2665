//! Failures of the library itself.
//!
//! These are not the errors the library encodes. Encoding, decoding and
//! lookups are total; only the caller-buffer text function, table loading
//! and explicit initialization can fail.

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from the caller-buffer text functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// The buffer was too small. It holds a truncated, NUL-terminated
    /// prefix; `needed` is the size that would have fit the whole text.
    Range { needed: usize },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Range { needed } => {
                write!(f, "buffer too small for error text ({} bytes needed)", needed)
            }
        }
    }
}

impl std::error::Error for TextError {}

/// Errors from loading a replacement table.
#[derive(Debug)]
pub enum TableError {
    /// Table file could not be read
    Io { path: PathBuf, source: io::Error },

    /// Malformed row
    Parse { line: usize, reason: &'static str },

    /// Slot outside the table's range
    SlotOutOfRange { line: usize, slot: u32, max: u32 },

    /// Slot already used by an earlier row
    DuplicateSlot { line: usize, slot: u32 },

    /// Identifier already used by an earlier row
    DuplicateName { line: usize, name: String },

    /// No rows at all
    Empty,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            TableError::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            TableError::SlotOutOfRange { line, slot, max } => {
                write!(f, "line {}: slot {} out of range (max {})", line, slot, max)
            }
            TableError::DuplicateSlot { line, slot } => {
                write!(f, "line {}: slot {} already defined", line, slot)
            }
            TableError::DuplicateName { line, name } => {
                write!(f, "line {}: identifier {} already defined", line, name)
            }
            TableError::Empty => write!(f, "table has no rows"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors from explicit initialization.
#[derive(Debug)]
pub enum InitError {
    /// Process state was already built (explicitly or by first use)
    AlreadyInitialized,

    /// Configuration rejected by `Config::validate`
    Config(&'static str),

    /// A configured table failed to load
    Table(TableError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => write!(f, "error tables already initialized"),
            InitError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            InitError::Table(e) => write!(f, "table error: {}", e),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Table(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TableError> for InitError {
    fn from(e: TableError) -> Self {
        InitError::Table(e)
    }
}
