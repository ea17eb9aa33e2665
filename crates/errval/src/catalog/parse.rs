//! Text format for replacement tables.
//!
//! One row per line: `<slot> <IDENTIFIER> <description...>`. Fields are
//! separated by whitespace; the description is the rest of the line.
//! Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # slot  name        description
//! 32      MYAPP       My application
//! 33      MYAPP_NET   My application (network layer)
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use super::{Entry, Table};
use crate::error::TableError;
use crate::{ErrorCode, ErrorSource};

/// Which table a text file describes; fixes the slot range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Sources,
    Codes,
    System,
}

impl TableKind {
    /// Highest slot the table may use.
    pub const fn max_slot(self) -> u32 {
        match self {
            TableKind::Sources => ErrorSource::MASK,
            TableKind::Codes | TableKind::System => ErrorCode::SYSTEM_ERROR as u32 - 1,
        }
    }

    /// System rows may omit the description; the platform supplies one.
    pub const fn description_required(self) -> bool {
        !matches!(self, TableKind::System)
    }
}

/// Parse a table from text.
pub fn parse_table(text: &str, kind: TableKind) -> Result<Table, TableError> {
    let mut entries = Vec::new();
    let mut slots = HashSet::new();
    let mut names = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let row = raw.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }

        let (slot_field, rest) = split_field(row);
        let (name, description) = split_field(rest);

        let slot: u32 = slot_field
            .parse()
            .map_err(|_| TableError::Parse { line, reason: "slot is not a decimal number" })?;
        if slot > kind.max_slot() {
            return Err(TableError::SlotOutOfRange { line, slot, max: kind.max_slot() });
        }
        if name.is_empty() {
            return Err(TableError::Parse { line, reason: "missing identifier" });
        }
        if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(TableError::Parse { line, reason: "identifier must be [A-Za-z0-9_]" });
        }
        if description.is_empty() && kind.description_required() {
            return Err(TableError::Parse { line, reason: "missing description" });
        }
        if !slots.insert(slot) {
            return Err(TableError::DuplicateSlot { line, slot });
        }
        if !names.insert(name.to_string()) {
            return Err(TableError::DuplicateName { line, name: name.to_string() });
        }

        entries.push(Entry {
            slot: slot as u16,
            name: Cow::Owned(name.to_string()),
            description: Cow::Owned(description.to_string()),
        });
    }

    if entries.is_empty() {
        return Err(TableError::Empty);
    }
    Ok(Table::sorted(entries))
}

/// Read and parse a table file.
pub fn load_table(path: &Path, kind: TableKind) -> Result<Table, TableError> {
    let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(&text, kind)?;
    crate::einfo!("loaded {:?} table from {}: {} rows", kind, path.display(), table.len());
    Ok(table)
}

/// Split off the first whitespace-delimited field.
fn split_field(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], s[at..].trim_start()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_comments_and_blanks() {
        let text = "# header\n\n32 MYAPP My application\n  33\tMYAPP_NET   network layer  \n";
        let table = parse_table(text, TableKind::Sources).unwrap();
        assert_eq!(table.len(), 2);
        let row = table.get(33).unwrap();
        assert_eq!(row.name, "MYAPP_NET");
        assert_eq!(row.description, "network layer");
    }

    #[test]
    fn system_rows_may_omit_description() {
        let table = parse_table("0 EPERM\n1 ENOENT No such file\n", TableKind::System).unwrap();
        assert_eq!(table.get(0).unwrap().description, "");
        assert_eq!(table.get(1).unwrap().description, "No such file");
    }

    #[test]
    fn code_rows_need_description() {
        let err = parse_table("1 GENERAL\n", TableKind::Codes).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_bad_slot() {
        let err = parse_table("# c\nx NAME desc\n", TableKind::Codes).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 2, .. }));

        let err = parse_table("128 NAME desc\n", TableKind::Sources).unwrap_err();
        assert!(matches!(err, TableError::SlotOutOfRange { line: 1, slot: 128, max: 127 }));

        let err = parse_table("32768 NAME desc\n", TableKind::Codes).unwrap_err();
        assert!(matches!(err, TableError::SlotOutOfRange { slot: 32768, .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let err = parse_table("1 A a\n1 B b\n", TableKind::Codes).unwrap_err();
        assert!(matches!(err, TableError::DuplicateSlot { line: 2, slot: 1 }));

        let err = parse_table("1 A a\n2 A b\n", TableKind::Codes).unwrap_err();
        assert!(matches!(err, TableError::DuplicateName { line: 2, .. }));
    }

    #[test]
    fn rejects_bad_identifier() {
        let err = parse_table("1 NOT-OK desc\n", TableKind::Codes).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(parse_table("# nothing\n", TableKind::Codes), Err(TableError::Empty)));
    }

    #[test]
    fn load_missing_file() {
        let err = load_table(Path::new("/nonexistent/errval/table"), TableKind::Codes).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("errval-parse-{}.tbl", std::process::id()));
        std::fs::write(&path, "5 PINENTRY Pinentry\n").unwrap();
        let table = load_table(&path, TableKind::Sources).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(table.get(5).unwrap().name, "PINENTRY");
    }
}
