//! Transient output messages dispatched to sinks.

use std::fmt;

/// Kind of a reportable event.
///
/// The `Display` form is part of the stable line format parsed by downstream
/// tooling, hence the capitalized spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "Info"),
            MessageKind::Warning => write!(f, "Warning"),
            MessageKind::Error => write!(f, "Error"),
        }
    }
}

/// One reportable event.
///
/// Built fresh per report, passed by mutable reference through the sinks,
/// and discarded after dispatch. `proceed` is the sole channel by which a
/// sink tells the ledger that processing may continue past this message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OutputMessage {
    pub kind: MessageKind,
    pub text: String,
    pub file_path: Option<String>,
    pub line: i32,
    pub column: i32,
    /// Set by sinks after writing; starts out `false`.
    pub proceed: bool,
}

impl OutputMessage {
    /// Message with no source location.
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        OutputMessage {
            kind,
            text: text.into(),
            file_path: None,
            line: -1,
            column: -1,
            proceed: false,
        }
    }

    /// Info message for plain narration.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, text)
    }

    /// Message tied to a source location.
    pub fn with_location(
        kind: MessageKind,
        text: impl Into<String>,
        file_path: Option<String>,
        line: i32,
        column: i32,
    ) -> Self {
        OutputMessage {
            kind,
            text: text.into(),
            file_path,
            line,
            column,
            proceed: false,
        }
    }

    /// Copy for the secondary (IDE) sink: same payload with the path
    /// blanked, since IDE sinks resolve file context themselves.
    pub fn without_path(&self) -> Self {
        OutputMessage {
            kind: self.kind,
            text: self.text.clone(),
            file_path: None,
            line: self.line,
            column: self.column,
            proceed: false,
        }
    }

    /// Render the stable one-line format:
    ///
    /// - no path: `Kind: Message`
    /// - with path: `Kind: Message (path - line: L, col: C)`
    pub fn format_line(&self) -> String {
        match self.file_path.as_deref() {
            Some(path) if !path.is_empty() => format!(
                "{}: {} ({} - line: {}, col: {})",
                self.kind, self.text, path, self.line, self.column
            ),
            _ => format!("{}: {}", self.kind, self.text),
        }
    }
}
