//! Identifier tables: sources, codes and system-error names.
//!
//! The codec never branches on individual identifiers. Everything it needs
//! to know about a slot (its identifier and its description) lives here as
//! data, so a newer build can append identifiers without touching logic.
//!
//! A [`Catalog`] holds three [`Table`]s:
//!
//! | Table    | Slots          | Description column                    |
//! |----------|----------------|---------------------------------------|
//! | sources  | `0..127`       | required                              |
//! | codes    | `0..32767`     | required                              |
//! | system   | `0..32767`     | optional (platform text is preferred) |
//!
//! The stock tables are embedded; [`parse`] loads replacements from text.

mod codes;
mod errnos;
pub mod parse;
mod sources;

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::TableError;
use crate::{ErrorCode, ErrorSource};

pub use parse::{load_table, parse_table, TableKind};

// ── Entry / Table ─────────────────────────────────────────────────

/// One row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub slot: u16,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

/// Rows of one table, sorted by slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    entries: Vec<Entry>,
}

impl Table {
    /// Build a table from embedded `(slot, name, description)` rows.
    pub(crate) fn from_static(rows: &'static [(u16, &'static str, &'static str)]) -> Self {
        Self::sorted(
            rows.iter()
                .map(|&(slot, name, description)| Entry {
                    slot,
                    name: Cow::Borrowed(name),
                    description: Cow::Borrowed(description),
                })
                .collect(),
        )
    }

    /// Build a `kind` table from rows held in memory.
    ///
    /// Rows are checked the way [`parse_table`] checks a file; the `line`
    /// of a reported error is the 1-based row index.
    pub fn from_entries(kind: TableKind, entries: Vec<Entry>) -> Result<Self, TableError> {
        let mut slots = HashSet::new();
        let mut names: HashSet<&str> = HashSet::new();
        for (idx, entry) in entries.iter().enumerate() {
            let line = idx + 1;
            let slot = u32::from(entry.slot);
            if slot > kind.max_slot() {
                return Err(TableError::SlotOutOfRange { line, slot, max: kind.max_slot() });
            }
            if !slots.insert(slot) {
                return Err(TableError::DuplicateSlot { line, slot });
            }
            if !names.insert(&entry.name) {
                return Err(TableError::DuplicateName { line, name: entry.name.to_string() });
            }
        }
        Ok(Self::sorted(entries))
    }

    fn sorted(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|e| e.slot);
        Self { entries }
    }

    /// Reject rows that do not fit the slot range of `kind`.
    fn check_fits(&self, kind: TableKind) -> Result<(), TableError> {
        let max = kind.max_slot();
        match self.entries.iter().position(|e| u32::from(e.slot) > max) {
            Some(idx) => Err(TableError::SlotOutOfRange {
                line: idx + 1,
                slot: u32::from(self.entries[idx].slot),
                max,
            }),
            None => Ok(()),
        }
    }

    /// Row at `slot`, if any.
    #[inline]
    pub fn get(&self, slot: u16) -> Option<&Entry> {
        self.entries
            .binary_search_by_key(&slot, |e| e.slot)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Row named `name`.
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest slot in use, if the table is not empty.
    pub fn max_slot(&self) -> Option<u16> {
        self.entries.last().map(|e| e.slot)
    }
}

// ── Catalog ───────────────────────────────────────────────────────

/// Sources, codes and system-error names known to this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sources: Table,
    codes: Table,
    system: Table,
}

impl Catalog {
    /// The tables compiled into this crate.
    pub fn stock() -> Self {
        Self {
            sources: Table::from_static(sources::STOCK_SOURCES),
            codes: Table::from_static(codes::STOCK_CODES),
            system: stock_system_table(),
        }
    }

    /// Start from the stock tables and replace any of them.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn sources(&self) -> &Table {
        &self.sources
    }

    pub fn codes(&self) -> &Table {
        &self.codes
    }

    pub fn system(&self) -> &Table {
        &self.system
    }

    /// Row describing `src`.
    #[inline]
    pub fn source(&self, src: ErrorSource) -> Option<&Entry> {
        self.sources.get(src.slot() as u16)
    }

    /// Row describing `code`. System codes resolve through the name table.
    #[inline]
    pub fn code(&self, code: ErrorCode) -> Option<&Entry> {
        match code.system_slot() {
            Some(slot) => self.system.get(slot),
            None => self.codes.get(code.raw()),
        }
    }

    /// Identifier of `code`, e.g. `GENERAL` or `ENOENT`.
    pub fn code_name(&self, code: ErrorCode) -> Option<&str> {
        self.code(code).map(|e| e.name.as_ref())
    }

    pub fn source_by_name(&self, name: &str) -> Option<ErrorSource> {
        self.sources
            .find(name)
            .map(|e| ErrorSource::new(e.slot as u8))
    }

    /// Code named `name`. Stock identifiers win over errno names.
    pub fn code_by_name(&self, name: &str) -> Option<ErrorCode> {
        self.codes
            .find(name)
            .map(|e| ErrorCode::new(e.slot))
            .or_else(|| self.system_code_by_name(name))
    }

    /// System code for an errno identifier such as `EPIPE`.
    pub fn system_code_by_name(&self, name: &str) -> Option<ErrorCode> {
        self.system.find(name).map(|e| ErrorCode::system(e.slot))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::stock()
    }
}

fn stock_system_table() -> Table {
    Table::sorted(
        errnos::STOCK_SYSTEM_NAMES
            .iter()
            .map(|&(slot, name)| Entry {
                slot,
                name: Cow::Borrowed(name),
                description: Cow::Borrowed(""),
            })
            .collect(),
    )
}

/// Builder for a [`Catalog`]; unset tables fall back to the stock ones.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    sources: Option<Table>,
    codes: Option<Table>,
    system: Option<Table>,
}

impl CatalogBuilder {
    pub fn sources(mut self, table: Table) -> Result<Self, TableError> {
        table.check_fits(TableKind::Sources)?;
        self.sources = Some(table);
        Ok(self)
    }

    pub fn codes(mut self, table: Table) -> Result<Self, TableError> {
        table.check_fits(TableKind::Codes)?;
        self.codes = Some(table);
        Ok(self)
    }

    pub fn system(mut self, table: Table) -> Result<Self, TableError> {
        table.check_fits(TableKind::System)?;
        self.system = Some(table);
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        Catalog {
            sources: self
                .sources
                .unwrap_or_else(|| Table::from_static(sources::STOCK_SOURCES)),
            codes: self
                .codes
                .unwrap_or_else(|| Table::from_static(codes::STOCK_CODES)),
            system: self.system.unwrap_or_else(stock_system_table),
        }
    }
}
