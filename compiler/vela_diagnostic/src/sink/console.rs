//! Console sink.

use crate::message::OutputMessage;

use super::{mark_proceed, OutputSink};

/// Sink that writes formatted lines to the process standard output.
///
/// This is the default primary sink a fresh ledger installs; a host IDE
/// typically swaps it for something it can render.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink
    }
}

impl OutputSink for ConsoleSink {
    fn write(&mut self, message: &mut OutputMessage) {
        println!("{}", message.format_line());
        mark_proceed(message);
    }
}
