//! Recorded diagnostic entries.
//!
//! Entries are immutable once recorded and owned exclusively by the ledger's
//! append-only lists; they are dropped only when the ledger itself is.

use crate::warnings::WarningKind;

/// Source location attached to a report. Line and column are `-1` when the
/// caller has no position to give.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    pub file: Option<String>,
    pub line: i32,
    pub col: i32,
}

impl Location {
    /// Location inside a named file.
    pub fn new(file: impl Into<String>, line: i32, col: i32) -> Self {
        Location {
            file: Some(file.into()),
            line,
            col,
        }
    }

    /// No file, no position.
    pub fn unknown() -> Self {
        Location::default()
    }
}

impl Default for Location {
    fn default() -> Self {
        Location {
            file: None,
            line: -1,
            col: -1,
        }
    }
}

/// One recorded error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorEntry {
    pub file_name: Option<String>,
    pub message: String,
    pub line: i32,
    pub col: i32,
}

/// One recorded warning, classified by kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WarningEntry {
    pub kind: WarningKind,
    pub message: String,
    pub file_name: Option<String>,
    pub line: i32,
    pub col: i32,
}
