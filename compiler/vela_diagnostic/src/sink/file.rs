//! File sink.

use std::io::Write;

use crate::message::OutputMessage;

use super::{mark_proceed, OutputSink};

/// Sink that writes formatted lines to a caller-provided writer.
///
/// The writer's lifetime belongs to whoever constructed the sink: the sink
/// appends lines and nothing else, and `into_inner` hands the writer back.
/// It never closes or flushes a stream on its own.
pub struct FileSink<W: Write> {
    writer: W,
}

impl<W: Write> FileSink<W> {
    pub fn new(writer: W) -> Self {
        FileSink { writer }
    }

    /// Return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for FileSink<W> {
    fn write(&mut self, message: &mut OutputMessage) {
        let _ = writeln!(self.writer, "{}", message.format_line());
        mark_proceed(message);
    }
}
