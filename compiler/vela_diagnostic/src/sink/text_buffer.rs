//! Text-buffer sink.

use rustc_hash::FxHashMap;

use crate::message::OutputMessage;

use super::{mark_proceed, OutputSink};

/// In-memory sink for embedding in a host UI.
///
/// Holds a line buffer plus a caller-supplied map from integer key to
/// grouped lines (e.g. grouping by source-file index). The sink only
/// appends to the line buffer; the map's population and meaning are
/// caller-defined, the sink merely carries it.
#[derive(Default)]
pub struct TextBufferSink {
    lines: Vec<String>,
    groups: FxHashMap<i32, Vec<String>>,
}

impl TextBufferSink {
    pub fn new() -> Self {
        TextBufferSink::default()
    }

    /// Wrap a caller-supplied group map.
    pub fn with_groups(groups: FxHashMap<i32, Vec<String>>) -> Self {
        TextBufferSink {
            lines: Vec::new(),
            groups,
        }
    }

    /// Lines written so far, in write order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn groups(&self) -> &FxHashMap<i32, Vec<String>> {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut FxHashMap<i32, Vec<String>> {
        &mut self.groups
    }

    /// Hand back the buffer and the group map.
    pub fn into_parts(self) -> (Vec<String>, FxHashMap<i32, Vec<String>>) {
        (self.lines, self.groups)
    }
}

impl OutputSink for TextBufferSink {
    fn write(&mut self, message: &mut OutputMessage) {
        self.lines.push(message.format_line());
        mark_proceed(message);
    }

    fn messages(&self) -> Option<&[String]> {
        Some(&self.lines)
    }
}
